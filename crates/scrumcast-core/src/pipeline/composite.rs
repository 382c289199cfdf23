// Composite skill scores: five weighted sums of raw counters, each
// normalized by its population maximum.
//
// Scores are always computed against the full dataset, never the current
// selection, so a player's radar shape does not change with the filters.

use serde::Serialize;
use tracing::warn;

use crate::config::CompositeWeights;
use crate::dataset::{PlayerRecord, SkillCounters};

/// Number of composite attributes.
pub const NUM_COMPOSITES: usize = 5;

/// The five composite attributes, in radar axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Composite {
    Kicking,
    Tackling,
    TriesAssists,
    CarriesLinebreaks,
    Steals,
}

impl Composite {
    pub const ALL: [Composite; NUM_COMPOSITES] = [
        Composite::Kicking,
        Composite::Tackling,
        Composite::TriesAssists,
        Composite::CarriesLinebreaks,
        Composite::Steals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Composite::Kicking => "Kicking",
            Composite::Tackling => "Tackling",
            Composite::TriesAssists => "Tries+Assists",
            Composite::CarriesLinebreaks => "Carries+Linebreaks",
            Composite::Steals => "Breakdown+Lineout Steals",
        }
    }

    /// Weighted sum of this attribute's counters.
    pub fn score(&self, c: &SkillCounters, w: &CompositeWeights) -> f64 {
        match self {
            Composite::Kicking => {
                w.conversions * c.conversions
                    + w.penalties * c.penalties
                    + w.drop_goals * c.drop_goals
                    + w.fifty_22s * c.fifty_22s
            }
            Composite::Tackling => w.tackles * c.tackles,
            Composite::TriesAssists => w.tries * c.tries + w.assists * c.assists,
            Composite::CarriesLinebreaks => {
                w.carries * c.carries
                    + w.metres_carried * c.metres_carried
                    + w.defenders_beaten * c.defenders_beaten
                    + w.linebreaks * c.linebreaks
            }
            Composite::Steals => {
                w.breakdown_steals * c.breakdown_steals + w.lineout_steals * c.lineout_steals
            }
        }
    }
}

/// All five raw composite scores for one player, in [`Composite::ALL`] order.
pub fn composite_raw(counters: &SkillCounters, weights: &CompositeWeights) -> [f64; NUM_COMPOSITES] {
    Composite::ALL.map(|c| c.score(counters, weights))
}

/// Divide each value by the column maximum.
///
/// A column whose maximum is not positive (all zero, or empty) normalizes
/// to all zeros rather than NaN.
pub fn normalize_by_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max).collect()
}

/// Raw and normalized composite scores for every player, index-aligned
/// with the base table.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeTable {
    raw: Vec<[f64; NUM_COMPOSITES]>,
    normalized: Vec<[f64; NUM_COMPOSITES]>,
}

impl CompositeTable {
    pub fn compute(players: &[PlayerRecord], weights: &CompositeWeights) -> Self {
        let raw: Vec<[f64; NUM_COMPOSITES]> = players
            .iter()
            .map(|p| composite_raw(&p.counters, weights))
            .collect();

        let mut normalized = vec![[0.0; NUM_COMPOSITES]; raw.len()];
        for (col, composite) in Composite::ALL.iter().enumerate() {
            let column: Vec<f64> = raw.iter().map(|r| r[col]).collect();
            if !players.is_empty() && column.iter().all(|v| *v == 0.0) {
                warn!(
                    "composite '{}' is zero for every player; normalized scores set to 0",
                    composite.label()
                );
            }
            for (row, v) in normalize_by_max(&column).into_iter().enumerate() {
                normalized[row][col] = v;
            }
        }

        CompositeTable { raw, normalized }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn raw(&self, index: usize) -> Option<[f64; NUM_COMPOSITES]> {
        self.raw.get(index).copied()
    }

    /// Normalized scores in [0, 1] for the player at `index`.
    pub fn normalized(&self, index: usize) -> Option<[f64; NUM_COMPOSITES]> {
        self.normalized.get(index).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Position, Team};

    #[test]
    fn normalize_worked_example() {
        assert_eq!(normalize_by_max(&[0.0, 5.0, 10.0]), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn normalize_all_zero_is_zero_not_nan() {
        let out = normalize_by_max(&[0.0, 0.0, 0.0]);
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
        assert!(out.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn normalize_ties_at_max() {
        assert_eq!(normalize_by_max(&[4.0, 4.0, 2.0]), vec![1.0, 1.0, 0.5]);
    }

    #[test]
    fn normalize_empty() {
        assert!(normalize_by_max(&[]).is_empty());
    }

    #[test]
    fn raw_scores_apply_weights() {
        let counters = SkillCounters {
            conversions: 3.0,
            penalties: 2.0,
            tackles: 11.0,
            tries: 1.0,
            assists: 2.0,
            metres_carried: 50.0,
            defenders_beaten: 1.0,
            lineout_steals: 1.0,
            ..SkillCounters::default()
        };
        let raw = composite_raw(&counters, &CompositeWeights::default());
        assert!((raw[0] - 12.0).abs() < 1e-9); // 3*2 + 2*3
        assert!((raw[1] - 11.0).abs() < 1e-9);
        assert!((raw[2] - 18.0).abs() < 1e-9); // 10 + 2*4
        assert!((raw[3] - 7.0).abs() < 1e-9); // 50*0.1 + 2
        assert!((raw[4] - 7.0).abs() < 1e-9);
    }

    #[test]
    fn table_normalizes_per_column_over_population() {
        let mut kicker = PlayerRecord::new("Kicker", Team::Ireland, Position::FlyHalf);
        kicker.counters.conversions = 10.0;
        kicker.counters.tackles = 5.0;
        let mut tackler = PlayerRecord::new("Tackler", Team::Ireland, Position::BackRow);
        tackler.counters.tackles = 20.0;
        let players = vec![kicker, tackler];

        let table = CompositeTable::compute(&players, &CompositeWeights::default());
        assert_eq!(table.len(), 2);

        let k = table.normalized(0).unwrap();
        let t = table.normalized(1).unwrap();
        assert_eq!(k[0], 1.0);
        assert_eq!(t[0], 0.0);
        assert_eq!(k[1], 0.25);
        assert_eq!(t[1], 1.0);
        // Nobody steals: column stays at zero.
        assert_eq!(k[4], 0.0);
        assert_eq!(t[4], 0.0);
        assert!(table.normalized(2).is_none());
    }

    #[test]
    fn normalized_scores_stay_in_unit_range() {
        let players: Vec<PlayerRecord> = (0..6)
            .map(|i| {
                let mut p = PlayerRecord::new(format!("P{i}"), Team::Italy, Position::Centre);
                p.counters.tries = i as f64;
                p.counters.metres_carried = (i * 37) as f64;
                p
            })
            .collect();
        let table = CompositeTable::compute(&players, &CompositeWeights::default());
        for i in 0..players.len() {
            for v in table.normalized(i).unwrap() {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn labels_match_axis_order() {
        let labels: Vec<&str> = Composite::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Kicking",
                "Tackling",
                "Tries+Assists",
                "Carries+Linebreaks",
                "Breakdown+Lineout Steals"
            ]
        );
    }
}
