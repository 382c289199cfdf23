// Group-wise means over the played subset (by team, by position).

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::{PlayerRecord, Position, Team};
use crate::rounds::{Column, RoundLabel};

/// Mean points for one group. Groups with no rows never appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean<K> {
    pub key: K,
    /// Rounded to one decimal place.
    pub mean: f64,
    pub count: usize,
}

/// Round to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn group_means<K, F>(rows: &[&PlayerRecord], points: Column, key: F) -> Vec<GroupMean<K>>
where
    K: Ord + Copy,
    F: Fn(&PlayerRecord) -> K,
{
    let mut groups: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(key(row)).or_insert((0.0, 0));
        entry.0 += row.value(points).or_zero();
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key,
            mean: round_one_decimal(sum / count as f64),
            count,
        })
        .collect()
}

/// Mean round points per team, sorted ascending. Ties keep team order.
pub fn team_means(rows: &[&PlayerRecord], round: RoundLabel) -> Vec<GroupMean<Team>> {
    let mut means = group_means(rows, round.columns().points, |p| p.team);
    means.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    means
}

/// Mean round points per position, sorted descending. Ties keep position order.
pub fn position_means(rows: &[&PlayerRecord], round: RoundLabel) -> Vec<GroupMean<Position>> {
    let mut means = group_means(rows, round.columns().points, |p| p.position);
    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    means
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
