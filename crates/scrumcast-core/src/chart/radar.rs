// Radar comparison: one closed polygon per player over the five
// normalized composite axes.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use super::{AxisRange, Point};
use crate::dataset::Team;
use crate::pipeline::composite::{Composite, NUM_COMPOSITES};

/// Input row for [`radar_chart`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadarEntry {
    pub name: String,
    pub team: Team,
    /// Normalized scores in [`Composite::ALL`] order.
    pub scores: [f64; NUM_COMPOSITES],
}

/// A closed polygon: the first value/vertex is repeated at the end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPolygon {
    pub name: String,
    pub team: Team,
    /// Axis values in [0, 1], length `NUM_COMPOSITES + 1`.
    pub values: Vec<f64>,
    /// Cartesian vertices on the unit disc, length `NUM_COMPOSITES + 1`.
    pub vertices: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<String>,
    pub radial_range: AxisRange,
    pub polygons: Vec<RadarPolygon>,
}

/// Angle of axis `k`: the first axis points straight up, the rest follow
/// clockwise.
pub fn axis_angle(k: usize) -> f64 {
    FRAC_PI_2 - k as f64 * TAU / NUM_COMPOSITES as f64
}

/// Position of value `v` on axis `k`.
pub fn vertex(k: usize, v: f64) -> Point {
    let theta = axis_angle(k);
    Point::new(v * theta.cos(), v * theta.sin())
}

pub fn radar_chart(entries: &[RadarEntry]) -> RadarChart {
    let polygons = entries
        .iter()
        .map(|e| {
            let mut values: Vec<f64> = e.scores.iter().map(|v| v.clamp(0.0, 1.0)).collect();
            values.push(values[0]);
            let vertices = values
                .iter()
                .enumerate()
                .map(|(k, v)| vertex(k % NUM_COMPOSITES, *v))
                .collect();
            RadarPolygon {
                name: e.name.clone(),
                team: e.team,
                values,
                vertices,
            }
        })
        .collect();

    RadarChart {
        title: "Player comparison".to_string(),
        axes: Composite::ALL.iter().map(|c| c.label().to_string()).collect(),
        radial_range: AxisRange::new(0.0, 1.0),
        polygons,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
