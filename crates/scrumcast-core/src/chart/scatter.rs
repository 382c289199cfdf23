// Price vs points scatter with constant value-ratio guide lines.
//
// Guide lines and axis ranges come from the whole round column, not the
// filtered subset, so they stay put while the user toggles filters.

use serde::Serialize;

use super::{Annotation, AxisRange, Point};
use crate::dataset::{PlayerRecord, Position, Team};
use crate::pipeline::filter::{filter_played, Selection};
use crate::rounds::RoundLabel;

/// Integer ratios that get a labelled guide line.
pub const MAJOR_RATIOS: [u32; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Offsets above each integer ratio that get a faint sub-line.
pub const MINOR_OFFSETS: [f64; 3] = [0.25, 0.5, 0.75];

const X_PAD: f64 = 3.0;
const Y_PAD_BELOW: f64 = 5.0;
const Y_PAD_ABOVE: f64 = 7.0;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Extremes of a round's price and points columns over the full table.
///
/// `min_x`/`min_y` ignore zero cells and fall back to 0 when the column
/// has no nonzero entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueBounds {
    pub max_x: f64,
    pub min_x: f64,
    pub max_y: f64,
    pub min_y: f64,
}

impl ValueBounds {
    pub fn from_population(players: &[PlayerRecord], round: RoundLabel) -> Self {
        let cols = round.columns();
        let prices: Vec<f64> = players.iter().map(|p| p.value(cols.price).or_zero()).collect();
        let points: Vec<f64> = players.iter().map(|p| p.value(cols.points).or_zero()).collect();

        ValueBounds {
            max_x: max_of(&prices),
            min_x: min_nonzero(&prices),
            max_y: max_of(&points),
            min_y: min_nonzero(&points),
        }
    }

    pub fn x_range(&self) -> AxisRange {
        AxisRange::new(self.min_x - X_PAD, self.max_x + X_PAD)
    }

    pub fn y_range(&self) -> AxisRange {
        AxisRange::new(self.min_y - Y_PAD_BELOW, self.max_y + Y_PAD_ABOVE)
    }
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

fn min_nonzero(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| *v != 0.0)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Guide lines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideKind {
    /// Integer ratio, labelled.
    Major,
    /// Fractional sub-line, unlabelled.
    Minor,
}

/// A segment of constant points-per-price slope from the origin to `max_x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideLine {
    pub ratio: f64,
    pub kind: GuideKind,
    pub from: Point,
    pub to: Point,
    pub label: Option<Annotation>,
}

/// Major lines for ratios 0..=6, each followed by its three sub-lines.
pub fn guide_lines(max_x: f64) -> Vec<GuideLine> {
    let mut lines = Vec::with_capacity(MAJOR_RATIOS.len() * (1 + MINOR_OFFSETS.len()));
    let origin = Point::new(0.0, 0.0);

    for value in MAJOR_RATIOS {
        let ratio = f64::from(value);
        lines.push(GuideLine {
            ratio,
            kind: GuideKind::Major,
            from: origin,
            to: Point::new(max_x, ratio * max_x),
            label: Some(Annotation {
                at: Point::new(max_x + 1.0, ratio * max_x),
                text: format!("{value} points per price unit"),
            }),
        });

        for offset in MINOR_OFFSETS {
            let sub = ratio + offset;
            lines.push(GuideLine {
                ratio: sub,
                kind: GuideKind::Minor,
                from: origin,
                to: Point::new(max_x, sub * max_x),
                label: None,
            });
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// One filtered player plotted at (price, points).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub team: Team,
    pub position: Position,
    pub at: Point,
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub bounds: ValueBounds,
    pub guides: Vec<GuideLine>,
    pub points: Vec<ScatterPoint>,
}

/// Build the scatter with bounds computed on the fly.
pub fn scatter_chart(all_players: &[PlayerRecord], selection: &Selection) -> ScatterChart {
    let bounds = ValueBounds::from_population(all_players, selection.round);
    scatter_chart_with_bounds(all_players, selection, bounds)
}

/// Build the scatter against precomputed population bounds.
pub fn scatter_chart_with_bounds(
    all_players: &[PlayerRecord],
    selection: &Selection,
    bounds: ValueBounds,
) -> ScatterChart {
    let cols = selection.round.columns();
    let points = filter_played(all_players, selection)
        .into_iter()
        .map(|p| ScatterPoint {
            name: p.name.clone(),
            team: p.team,
            position: p.position,
            at: Point::new(p.value(cols.price).or_zero(), p.value(cols.points).or_zero()),
            glyph: p.team.glyph().to_string(),
        })
        .collect();

    ScatterChart {
        title: format!("Price vs points, {}", selection.round),
        x_label: cols.price.name(),
        y_label: cols.points.name(),
        x_range: bounds.x_range(),
        y_range: bounds.y_range(),
        bounds,
        guides: guide_lines(bounds.max_x),
        points,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
