// Cumulative points-over-rounds line chart.

use serde::Serialize;

use super::{AxisRange, Point};
use crate::dataset::Team;
use crate::pipeline::cumulative::CumulativeCurve;
use crate::rounds::NUM_ROUNDS;

/// One player's curve on the shared round axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub team: Team,
    pub points: Vec<Point>,
    pub missing_rounds: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub series: Vec<Series>,
}

pub fn cumulative_line_chart(curves: &[CumulativeCurve]) -> LineChart {
    let series: Vec<Series> = curves
        .iter()
        .map(|c| Series {
            name: c.name.clone(),
            team: c.team,
            points: c
                .values
                .iter()
                .enumerate()
                .map(|(round, v)| Point::new(round as f64, *v))
                .collect(),
            missing_rounds: c.missing_rounds.clone(),
        })
        .collect();

    let all = curves.iter().flat_map(|c| c.values.iter().copied());
    let (lo, hi) = all.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    // A flat chart still needs a drawable span.
    let hi = if hi > lo { hi } else { lo + 1.0 };

    LineChart {
        title: "Cumulative points by round".to_string(),
        x_label: "Round".to_string(),
        y_label: "Cumulative points".to_string(),
        x_range: AxisRange::new(0.0, NUM_ROUNDS as f64),
        y_range: AxisRange::new(lo, hi),
        series,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(name: &str, values: [f64; 6]) -> CumulativeCurve {
        CumulativeCurve {
            name: name.to_string(),
            team: Team::Ireland,
            values: values.to_vec(),
            missing_rounds: vec![],
        }
    }

    #[test]
    fn series_share_round_axis() {
        let chart = cumulative_line_chart(&[
            curve("Sheehan", [0.0, 5.0, 5.0, 8.0, 8.0, 8.0]),
            curve("Keenan", [0.0, 12.0, 30.0, 41.0, 41.0, 60.0]),
        ]);
        assert_eq!(chart.series.len(), 2);
        for s in &chart.series {
            let xs: Vec<f64> = s.points.iter().map(|p| p.x).collect();
            assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        }
        assert_eq!(chart.series[1].points[5], Point::new(5.0, 60.0));
        assert_eq!(chart.x_range, AxisRange::new(0.0, 5.0));
        assert_eq!(chart.y_range, AxisRange::new(0.0, 60.0));
    }

    #[test]
    fn negative_totals_extend_the_range() {
        let chart = cumulative_line_chart(&[curve("Prop", [0.0, -2.0, -1.0, 3.0, 3.0, 3.0])]);
        assert_eq!(chart.y_range, AxisRange::new(-2.0, 3.0));
    }

    #[test]
    fn no_curves_is_empty_but_drawable() {
        let chart = cumulative_line_chart(&[]);
        assert!(chart.series.is_empty());
        assert!(chart.y_range.span() > 0.0);
    }
}
