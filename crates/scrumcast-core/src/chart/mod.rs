// Declarative chart specifications.
//
// Builders return plain geometry (points, segments, bars, polygons) plus
// annotations and axis ranges. Nothing here knows how a chart is drawn;
// the terminal UI and the JSON export both consume these types.

pub mod bars;
pub mod lines;
pub mod radar;
pub mod scatter;

use serde::Serialize;

pub use bars::{position_bar_chart, team_bar_chart, Bar, BarChart, BarOrder};
pub use lines::{cumulative_line_chart, LineChart, Series};
pub use radar::{radar_chart, RadarChart, RadarEntry, RadarPolygon};
pub use scatter::{guide_lines, scatter_chart, GuideKind, GuideLine, ScatterChart, ScatterPoint, ValueBounds};

// ---------------------------------------------------------------------------
// Shared primitives
// ---------------------------------------------------------------------------

/// Inclusive axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        AxisRange { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Text placed at a data coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub at: Point,
    pub text: String,
}

// ---------------------------------------------------------------------------
// ChartSpec
// ---------------------------------------------------------------------------

/// Any chart the dashboard can produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Scatter(ScatterChart),
    Bar(BarChart),
    Line(LineChart),
    Radar(RadarChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Scatter(c) => &c.title,
            ChartSpec::Bar(c) => &c.title,
            ChartSpec::Line(c) => &c.title,
            ChartSpec::Radar(c) => &c.title,
        }
    }

    /// Short kind name used in export file names.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartSpec::Scatter(_) => "scatter",
            ChartSpec::Bar(_) => "bar",
            ChartSpec::Line(_) => "line",
            ChartSpec::Radar(_) => "radar",
        }
    }

    /// True when the chart has no data marks (guide lines and axes aside).
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Scatter(c) => c.points.is_empty(),
            ChartSpec::Bar(c) => c.bars.is_empty(),
            ChartSpec::Line(c) => c.series.is_empty(),
            ChartSpec::Radar(c) => c.polygons.is_empty(),
        }
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(c: ScatterChart) -> Self {
        ChartSpec::Scatter(c)
    }
}

impl From<BarChart> for ChartSpec {
    fn from(c: BarChart) -> Self {
        ChartSpec::Bar(c)
    }
}

impl From<LineChart> for ChartSpec {
    fn from(c: LineChart) -> Self {
        ChartSpec::Line(c)
    }
}

impl From<RadarChart> for ChartSpec {
    fn from(c: RadarChart) -> Self {
        ChartSpec::Radar(c)
    }
}
