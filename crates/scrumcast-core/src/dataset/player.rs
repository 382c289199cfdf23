// Player records and the closed team/position enums they reference.

use serde::Serialize;
use std::fmt;

use crate::rounds::{Column, NUM_ROUNDS};

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// The six national sides in the competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Team {
    England,
    France,
    Ireland,
    Italy,
    Scotland,
    Wales,
}

impl Team {
    pub const ALL: [Team; 6] = [
        Team::England,
        Team::France,
        Team::Ireland,
        Team::Italy,
        Team::Scotland,
        Team::Wales,
    ];

    /// Parse the dataset's team name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        let needle = s.trim();
        Team::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(needle))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Team::England => "England",
            Team::France => "France",
            Team::Ireland => "Ireland",
            Team::Italy => "Italy",
            Team::Scotland => "Scotland",
            Team::Wales => "Wales",
        }
    }

    /// Three-letter code for narrow displays.
    pub fn code(&self) -> &'static str {
        match self {
            Team::England => "ENG",
            Team::France => "FRA",
            Team::Ireland => "IRE",
            Team::Italy => "ITA",
            Team::Scotland => "SCO",
            Team::Wales => "WAL",
        }
    }

    /// Flag glyph used to mark the team on charts.
    ///
    /// England, Scotland and Wales use the black-flag tag sequences.
    pub fn glyph(&self) -> &'static str {
        match self {
            Team::England => "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}",
            Team::France => "\u{1F1EB}\u{1F1F7}",
            Team::Ireland => "\u{1F1EE}\u{1F1EA}",
            Team::Italy => "\u{1F1EE}\u{1F1F9}",
            Team::Scotland => "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}",
            Team::Wales => "\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Fantasy playing positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    BackThree,
    Centre,
    FlyHalf,
    ScrumHalf,
    BackRow,
    SecondRow,
    Prop,
    Hooker,
}

impl Position {
    pub const ALL: [Position; 8] = [
        Position::BackThree,
        Position::Centre,
        Position::FlyHalf,
        Position::ScrumHalf,
        Position::BackRow,
        Position::SecondRow,
        Position::Prop,
        Position::Hooker,
    ];

    /// Parse the dataset's kebab-case label ("back-row", "fly-half").
    pub fn from_label(s: &str) -> Option<Self> {
        let needle = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(needle))
    }

    /// Dataset label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::BackThree => "back-three",
            Position::Centre => "centre",
            Position::FlyHalf => "fly-half",
            Position::ScrumHalf => "scrum-half",
            Position::BackRow => "back-row",
            Position::SecondRow => "second-row",
            Position::Prop => "prop",
            Position::Hooker => "hooker",
        }
    }

    /// Human-readable name for axis labels.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::BackThree => "Back Three",
            Position::Centre => "Centre",
            Position::FlyHalf => "Fly-half",
            Position::ScrumHalf => "Scrum-half",
            Position::BackRow => "Back Row",
            Position::SecondRow => "Second Row",
            Position::Prop => "Prop",
            Position::Hooker => "Hooker",
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            Position::BackRow | Position::SecondRow | Position::Prop | Position::Hooker
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Column values
// ---------------------------------------------------------------------------

/// A single cell read through a [`Column`] reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue {
    Present(f64),
    /// The cell was empty in the dataset.
    Missing,
}

impl ColumnValue {
    fn from_option(v: Option<f64>) -> Self {
        match v {
            Some(x) => ColumnValue::Present(x),
            None => ColumnValue::Missing,
        }
    }

    /// The value, with a missing cell read as zero.
    pub fn or_zero(&self) -> f64 {
        match self {
            ColumnValue::Present(x) => *x,
            ColumnValue::Missing => 0.0,
        }
    }

    /// The value if present and nonzero.
    pub fn nonzero(&self) -> Option<f64> {
        match self {
            ColumnValue::Present(x) if *x != 0.0 => Some(*x),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ColumnValue::Missing)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Price and points for one round. `None` marks an empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundEntry {
    pub price: Option<f64>,
    pub points: Option<f64>,
}

/// Raw per-player skill counters, inputs to the composite scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkillCounters {
    pub tackles: f64,
    pub conversions: f64,
    pub penalties: f64,
    pub drop_goals: f64,
    pub fifty_22s: f64,
    pub tries: f64,
    pub assists: f64,
    pub carries: f64,
    pub metres_carried: f64,
    pub defenders_beaten: f64,
    pub linebreaks: f64,
    pub breakdown_steals: f64,
    pub lineout_steals: f64,
}

/// One player's row in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: Team,
    pub position: Position,
    pub rounds: [RoundEntry; NUM_ROUNDS],
    pub latest_price: f64,
    pub points_all_rounds: f64,
    pub points_per_round_all_rounds: f64,
    pub num_matches: u32,
    pub counters: SkillCounters,
}

impl PlayerRecord {
    /// A record with no round data and zeroed aggregates.
    pub fn new(name: impl Into<String>, team: Team, position: Position) -> Self {
        PlayerRecord {
            name: name.into(),
            team,
            position,
            rounds: [RoundEntry::default(); NUM_ROUNDS],
            latest_price: 0.0,
            points_all_rounds: 0.0,
            points_per_round_all_rounds: 0.0,
            num_matches: 0,
            counters: SkillCounters::default(),
        }
    }

    /// Read a numeric column.
    ///
    /// Round-indexed columns outside 1..=5 read as `Missing`.
    pub fn value(&self, column: Column) -> ColumnValue {
        match column {
            Column::PriceRound(n) => {
                ColumnValue::from_option(self.round(n).and_then(|r| r.price))
            }
            Column::PointsRound(n) => {
                ColumnValue::from_option(self.round(n).and_then(|r| r.points))
            }
            Column::LatestPrice => ColumnValue::Present(self.latest_price),
            Column::PointsAllRounds => ColumnValue::Present(self.points_all_rounds),
            Column::PointsPerRoundAllRounds => {
                ColumnValue::Present(self.points_per_round_all_rounds)
            }
        }
    }

    fn round(&self, n: u8) -> Option<&RoundEntry> {
        (n as usize).checked_sub(1).and_then(|i| self.rounds.get(i))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
