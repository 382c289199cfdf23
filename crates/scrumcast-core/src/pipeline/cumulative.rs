// Cumulative round points: running totals from round 0 through round 5.
//
// A missing round contributes nothing; the running total carries forward
// from the last known round and the round is listed in `missing_rounds`.

use serde::Serialize;

use crate::dataset::{ColumnValue, PlayerRecord, Team};
use crate::rounds::{Column, NUM_ROUNDS};

/// One player's running total across rounds 0..=5.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeCurve {
    pub name: String,
    pub team: Team,
    /// `values[0]` is always 0 (before round 1).
    pub values: Vec<f64>,
    /// 1-based rounds with no recorded points.
    pub missing_rounds: Vec<u8>,
}

impl CumulativeCurve {
    pub fn total(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }
}

/// The per-round points sequence with a leading round-0 entry of zero.
pub fn round_sequence(record: &PlayerRecord) -> Vec<ColumnValue> {
    std::iter::once(ColumnValue::Present(0.0))
        .chain((1..=NUM_ROUNDS as u8).map(|n| record.value(Column::PointsRound(n))))
        .collect()
}

/// Running sum over [`round_sequence`], treating missing rounds as zero.
pub fn cumulative_curve(record: &PlayerRecord) -> CumulativeCurve {
    let mut running = 0.0;
    let mut values = Vec::with_capacity(NUM_ROUNDS + 1);
    let mut missing_rounds = Vec::new();

    for (round, value) in round_sequence(record).into_iter().enumerate() {
        if value.is_missing() {
            missing_rounds.push(round as u8);
        }
        running += value.or_zero();
        values.push(running);
    }

    CumulativeCurve {
        name: record.name.clone(),
        team: record.team,
        values,
        missing_rounds,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
