// Dashboard facade: holds the immutable base table and the derived columns
// computed once per session, and builds a chart for each view on request.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::chart::{
    cumulative_line_chart, position_bar_chart, radar_chart, scatter::scatter_chart_with_bounds,
    team_bar_chart, BarChart, ChartSpec, LineChart, RadarChart, RadarEntry, ScatterChart,
    ValueBounds,
};
use crate::config::CompositeWeights;
use crate::dataset::{PlayerRecord, Position, Team};
use crate::pipeline::composite::CompositeTable;
use crate::pipeline::cumulative::cumulative_curve;
use crate::pipeline::filter::{filter_played, Selection};
use crate::rounds::RoundLabel;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown player `{0}`")]
    UnknownPlayer(String),
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// The five dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Value,
    Teams,
    Positions,
    Progress,
    Compare,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Value,
        View::Teams,
        View::Positions,
        View::Progress,
        View::Compare,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Value => "Value",
            View::Teams => "Teams",
            View::Positions => "Positions",
            View::Progress => "Progress",
            View::Compare => "Compare",
        }
    }

    /// Views driven by the player multi-select rather than the filters.
    pub fn uses_players(&self) -> bool {
        matches!(self, View::Progress | View::Compare)
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard {
    players: Vec<PlayerRecord>,
    composites: CompositeTable,
    bounds: Vec<(RoundLabel, ValueBounds)>,
}

impl Dashboard {
    pub fn new(players: Vec<PlayerRecord>, weights: &CompositeWeights) -> Self {
        let composites = CompositeTable::compute(&players, weights);
        let bounds = RoundLabel::ALL
            .iter()
            .map(|r| (*r, ValueBounds::from_population(&players, *r)))
            .collect();
        info!(
            "dashboard ready: {} players, composite scores for {}",
            players.len(),
            composites.len()
        );
        Dashboard {
            players,
            composites,
            bounds,
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn composites(&self) -> &CompositeTable {
        &self.composites
    }

    /// Population bounds for a round (precomputed).
    pub fn bounds(&self, round: RoundLabel) -> ValueBounds {
        self.bounds
            .iter()
            .find(|(r, _)| *r == round)
            .map(|(_, b)| *b)
            .unwrap_or_else(|| ValueBounds::from_population(&self.players, round))
    }

    // --- lookups -----------------------------------------------------------

    /// Unique player names in dataset order.
    pub fn player_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.players
            .iter()
            .map(|p| p.name.as_str())
            .filter(|n| seen.insert(*n))
            .collect()
    }

    /// Positions present in the dataset, in first-seen order.
    pub fn positions(&self) -> Vec<Position> {
        let mut seen = HashSet::new();
        self.players
            .iter()
            .map(|p| p.position)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Teams present in the dataset, in first-seen order.
    pub fn teams(&self) -> Vec<Team> {
        let mut seen = HashSet::new();
        self.players
            .iter()
            .map(|p| p.team)
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Index of the first record with this name.
    pub fn find(&self, name: &str) -> Result<usize, LookupError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| LookupError::UnknownPlayer(name.to_string()))
    }

    /// Resolve every name before anything is built, failing on the first
    /// unknown one.
    fn resolve(&self, names: &[String]) -> Result<Vec<usize>, LookupError> {
        names.iter().map(|n| self.find(n)).collect()
    }

    // --- views -------------------------------------------------------------

    pub fn scatter(&self, selection: &Selection) -> ScatterChart {
        let chart = scatter_chart_with_bounds(&self.players, selection, self.bounds(selection.round));
        debug!("scatter {}: {} points", selection.round, chart.points.len());
        chart
    }

    pub fn team_bars(&self, selection: &Selection) -> BarChart {
        let rows = filter_played(&self.players, selection);
        debug!("team bars {}: {} rows", selection.round, rows.len());
        team_bar_chart(&rows, selection.round)
    }

    pub fn position_bars(&self, selection: &Selection) -> BarChart {
        let rows = filter_played(&self.players, selection);
        debug!("position bars {}: {} rows", selection.round, rows.len());
        position_bar_chart(&rows, selection.round)
    }

    pub fn cumulative(&self, names: &[String]) -> Result<LineChart, LookupError> {
        let indices = self.resolve(names)?;
        let curves: Vec<_> = indices
            .into_iter()
            .map(|i| cumulative_curve(&self.players[i]))
            .collect();
        debug!("cumulative: {} curves", curves.len());
        Ok(cumulative_line_chart(&curves))
    }

    pub fn radar(&self, names: &[String]) -> Result<RadarChart, LookupError> {
        let indices = self.resolve(names)?;
        let entries: Vec<RadarEntry> = indices
            .into_iter()
            .filter_map(|i| {
                let p = &self.players[i];
                self.composites.normalized(i).map(|scores| RadarEntry {
                    name: p.name.clone(),
                    team: p.team,
                    scores,
                })
            })
            .collect();
        debug!("radar: {} polygons", entries.len());
        Ok(radar_chart(&entries))
    }

    /// Build whichever view is active.
    pub fn chart(
        &self,
        view: View,
        selection: &Selection,
        names: &[String],
    ) -> Result<ChartSpec, LookupError> {
        Ok(match view {
            View::Value => self.scatter(selection).into(),
            View::Teams => self.team_bars(selection).into(),
            View::Positions => self.position_bars(selection).into(),
            View::Progress => self.cumulative(names)?.into(),
            View::Compare => self.radar(names)?.into(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
