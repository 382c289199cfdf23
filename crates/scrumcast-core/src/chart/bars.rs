// Mean-points bar charts by team and by position.

use serde::Serialize;

use super::AxisRange;
use crate::dataset::PlayerRecord;
use crate::pipeline::aggregate::{position_means, team_means};
use crate::rounds::RoundLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Group name (team or position).
    pub category: String,
    /// Text drawn on or beside the bar.
    pub label: String,
    /// Mean points, one decimal.
    pub value: f64,
    /// Rows behind the mean.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub value_label: String,
    pub order: BarOrder,
    pub value_range: AxisRange,
    pub bars: Vec<Bar>,
}

fn value_range(bars: &[Bar]) -> AxisRange {
    let lo = bars.iter().map(|b| b.value).fold(0.0, f64::min);
    let hi = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    AxisRange::new(lo, hi)
}

/// Team bars over an already-filtered played subset, lowest mean first.
/// Each label is the team glyph followed by the mean.
pub fn team_bar_chart(rows: &[&PlayerRecord], round: RoundLabel) -> BarChart {
    let bars: Vec<Bar> = team_means(rows, round)
        .into_iter()
        .map(|g| Bar {
            category: g.key.name().to_string(),
            label: format!("{} {:.1}", g.key.glyph(), g.mean),
            value: g.mean,
            count: g.count,
        })
        .collect();

    BarChart {
        title: format!("Mean points by team, {round}"),
        value_label: round.columns().points.name(),
        order: BarOrder::Ascending,
        value_range: value_range(&bars),
        bars,
    }
}

/// Position bars over an already-filtered played subset, highest mean first.
pub fn position_bar_chart(rows: &[&PlayerRecord], round: RoundLabel) -> BarChart {
    let bars: Vec<Bar> = position_means(rows, round)
        .into_iter()
        .map(|g| Bar {
            category: g.key.display_str().to_string(),
            label: format!("{:.1}", g.mean),
            value: g.mean,
            count: g.count,
        })
        .collect();

    BarChart {
        title: format!("Mean points by position, {round}"),
        value_label: round.columns().points.name(),
        order: BarOrder::Descending,
        value_range: value_range(&bars),
        bars,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
