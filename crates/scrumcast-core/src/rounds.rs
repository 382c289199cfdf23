// Round selection: maps a round label to the price/points columns it reads.
//
// Exactly one price/points pair is active per view. "All Rounds" reads the
// season aggregates (latest price, points per round) instead of a single
// round's columns.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of scored rounds in the competition.
pub const NUM_ROUNDS: usize = 5;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("unknown round label `{0}` (expected \"Round 1\"..\"Round 5\" or \"All Rounds\")")]
    UnknownLabel(String),

    #[error("unknown column reference `{0}`")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Column identifiers
// ---------------------------------------------------------------------------

/// A numeric dataset column that a view can read.
///
/// Round-indexed variants are 1-based to match the dataset headers
/// (`price_round_1` .. `price_round_5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    PriceRound(u8),
    PointsRound(u8),
    LatestPrice,
    PointsAllRounds,
    PointsPerRoundAllRounds,
}

impl Column {
    /// Resolve a dataset header name to a column.
    pub fn from_name(name: &str) -> Result<Self, RoundError> {
        let trimmed = name.trim();
        match trimmed {
            "latest_price" => return Ok(Column::LatestPrice),
            "points_all_rounds" => return Ok(Column::PointsAllRounds),
            "points_per_round_all_rounds" => return Ok(Column::PointsPerRoundAllRounds),
            _ => {}
        }

        let parse_round = |suffix: &str| -> Option<u8> {
            let n: u8 = suffix.parse().ok()?;
            (1..=NUM_ROUNDS as u8).contains(&n).then_some(n)
        };

        if let Some(n) = trimmed.strip_prefix("price_round_").and_then(parse_round) {
            return Ok(Column::PriceRound(n));
        }
        if let Some(n) = trimmed.strip_prefix("points_round_").and_then(parse_round) {
            return Ok(Column::PointsRound(n));
        }
        Err(RoundError::UnknownColumn(trimmed.to_string()))
    }

    /// The dataset header name for this column.
    pub fn name(&self) -> String {
        match self {
            Column::PriceRound(n) => format!("price_round_{n}"),
            Column::PointsRound(n) => format!("points_round_{n}"),
            Column::LatestPrice => "latest_price".to_string(),
            Column::PointsAllRounds => "points_all_rounds".to_string(),
            Column::PointsPerRoundAllRounds => "points_per_round_all_rounds".to_string(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// The price/points column pair read by a single view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundColumns {
    pub price: Column,
    pub points: Column,
}

// ---------------------------------------------------------------------------
// Round labels
// ---------------------------------------------------------------------------

/// One of the six selectable rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoundLabel {
    Round1,
    Round2,
    Round3,
    Round4,
    Round5,
    #[default]
    AllRounds,
}

impl RoundLabel {
    /// Selector order.
    pub const ALL: [RoundLabel; 6] = [
        RoundLabel::Round1,
        RoundLabel::Round2,
        RoundLabel::Round3,
        RoundLabel::Round4,
        RoundLabel::Round5,
        RoundLabel::AllRounds,
    ];

    /// Parse a human label ("Round 3", "All Rounds").
    pub fn parse(label: &str) -> Result<Self, RoundError> {
        RoundLabel::ALL
            .into_iter()
            .find(|r| r.label() == label.trim())
            .ok_or_else(|| RoundError::UnknownLabel(label.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoundLabel::Round1 => "Round 1",
            RoundLabel::Round2 => "Round 2",
            RoundLabel::Round3 => "Round 3",
            RoundLabel::Round4 => "Round 4",
            RoundLabel::Round5 => "Round 5",
            RoundLabel::AllRounds => "All Rounds",
        }
    }

    /// 1-based round number, or `None` for the season aggregate.
    pub fn round_number(&self) -> Option<u8> {
        match self {
            RoundLabel::Round1 => Some(1),
            RoundLabel::Round2 => Some(2),
            RoundLabel::Round3 => Some(3),
            RoundLabel::Round4 => Some(4),
            RoundLabel::Round5 => Some(5),
            RoundLabel::AllRounds => None,
        }
    }

    /// The price/points pair this round reads.
    pub fn columns(&self) -> RoundColumns {
        match self.round_number() {
            Some(n) => RoundColumns {
                price: Column::PriceRound(n),
                points: Column::PointsRound(n),
            },
            None => RoundColumns {
                price: Column::LatestPrice,
                points: Column::PointsPerRoundAllRounds,
            },
        }
    }

    /// Next label in selector order, wrapping around.
    pub fn next(&self) -> Self {
        let idx = self.index();
        RoundLabel::ALL[(idx + 1) % RoundLabel::ALL.len()]
    }

    /// Previous label in selector order, wrapping around.
    pub fn prev(&self) -> Self {
        let idx = self.index();
        RoundLabel::ALL[(idx + RoundLabel::ALL.len() - 1) % RoundLabel::ALL.len()]
    }

    fn index(&self) -> usize {
        RoundLabel::ALL
            .iter()
            .position(|r| r == self)
            .unwrap_or(0)
    }
}

impl FromStr for RoundLabel {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundLabel::parse(s)
    }
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_resolves_to_its_columns() {
        for (i, round) in RoundLabel::ALL.iter().take(NUM_ROUNDS).enumerate() {
            let n = (i + 1) as u8;
            let cols = round.columns();
            assert_eq!(cols.price, Column::PriceRound(n));
            assert_eq!(cols.points, Column::PointsRound(n));
            assert_eq!(cols.points.name(), format!("points_round_{n}"));
        }

        let all = RoundLabel::AllRounds.columns();
        assert_eq!(all.price, Column::LatestPrice);
        assert_eq!(all.points, Column::PointsPerRoundAllRounds);
    }

    #[test]
    fn parse_accepts_closed_set() {
        assert_eq!(RoundLabel::parse("Round 1").unwrap(), RoundLabel::Round1);
        assert_eq!(RoundLabel::parse("Round 5").unwrap(), RoundLabel::Round5);
        assert_eq!(RoundLabel::parse("All Rounds").unwrap(), RoundLabel::AllRounds);
        assert_eq!(" Round 2 ".parse::<RoundLabel>().unwrap(), RoundLabel::Round2);
    }

    #[test]
    fn parse_rejects_unknown_label() {
        let err = RoundLabel::parse("Round 6").unwrap_err();
        assert_eq!(err, RoundError::UnknownLabel("Round 6".into()));
        assert!(RoundLabel::parse("round 1").is_err());
        assert!(RoundLabel::parse("").is_err());
    }

    #[test]
    fn label_roundtrips_through_display() {
        for round in RoundLabel::ALL {
            assert_eq!(RoundLabel::parse(&round.to_string()).unwrap(), round);
        }
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(RoundLabel::Round1.next(), RoundLabel::Round2);
        assert_eq!(RoundLabel::AllRounds.next(), RoundLabel::Round1);
        assert_eq!(RoundLabel::Round1.prev(), RoundLabel::AllRounds);
        assert_eq!(RoundLabel::Round3.prev(), RoundLabel::Round2);
    }

    #[test]
    fn column_from_name() {
        assert_eq!(Column::from_name("price_round_3").unwrap(), Column::PriceRound(3));
        assert_eq!(Column::from_name("points_round_5").unwrap(), Column::PointsRound(5));
        assert_eq!(Column::from_name("latest_price").unwrap(), Column::LatestPrice);
        assert_eq!(
            Column::from_name("points_per_round_all_rounds").unwrap(),
            Column::PointsPerRoundAllRounds
        );
    }

    #[test]
    fn column_from_name_rejects_unknown() {
        assert_eq!(
            Column::from_name("points_round_6").unwrap_err(),
            RoundError::UnknownColumn("points_round_6".into())
        );
        assert!(Column::from_name("points_round_0").is_err());
        assert!(Column::from_name("price").is_err());
    }
}
