// Player dataset loading and validation.
//
// Reads the flat player CSV (one row per player, header row required).
// Unlike per-row data quality issues in a projection feed, every problem here
// is fatal: the dashboard never renders from a partially-understood table.

use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use super::player::{PlayerRecord, Position, RoundEntry, SkillCounters, Team};
use crate::rounds::{Column, NUM_ROUNDS};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("line {line}: unknown team `{value}`")]
    UnknownTeam { line: usize, value: String },

    #[error("line {line}: unknown position `{value}`")]
    UnknownPosition { line: usize, value: String },

    #[error("line {line}: {message}")]
    InvalidValue { line: usize, message: String },

    #[error("dataset contains no players")]
    Empty,
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Non-round columns every dataset must carry.
const REQUIRED_COLUMNS: &[&str] = &[
    "name",
    "team",
    "position",
    "latest_price",
    "points_all_rounds",
    "points_per_round_all_rounds",
    "num_matches",
    "tackles",
    "conversions",
    "penalties",
    "drop_goals",
    "fifty_22s",
    "tries",
    "assists",
    "carries",
    "metres_carried",
    "defenders_beaten",
    "linebreaks",
    "breakdown_steals",
    "lineout_steals",
];

/// Every header the loader expects, round columns included.
pub fn required_headers() -> Vec<String> {
    let mut headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
    for n in 1..=NUM_ROUNDS as u8 {
        headers.push(Column::PriceRound(n).name());
        headers.push(Column::PointsRound(n).name());
    }
    headers
}

/// Raw CSV row. Round cells may be empty (deserialized as `None`); every
/// other numeric cell must hold a number.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    name: String,
    team: String,
    position: String,
    price_round_1: Option<f64>,
    points_round_1: Option<f64>,
    price_round_2: Option<f64>,
    points_round_2: Option<f64>,
    price_round_3: Option<f64>,
    points_round_3: Option<f64>,
    price_round_4: Option<f64>,
    points_round_4: Option<f64>,
    price_round_5: Option<f64>,
    points_round_5: Option<f64>,
    latest_price: f64,
    points_all_rounds: f64,
    points_per_round_all_rounds: f64,
    num_matches: f64,
    tackles: f64,
    conversions: f64,
    penalties: f64,
    drop_goals: f64,
    fifty_22s: f64,
    tries: f64,
    assists: f64,
    carries: f64,
    metres_carried: f64,
    defenders_beaten: f64,
    linebreaks: f64,
    breakdown_steals: f64,
    lineout_steals: f64,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

fn check_finite(line: usize, field: &str, value: f64) -> Result<f64, DatasetError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DatasetError::InvalidValue {
            line,
            message: format!("non-finite value in `{field}`"),
        })
    }
}

fn check_non_negative(line: usize, field: &str, value: f64) -> Result<f64, DatasetError> {
    let value = check_finite(line, field, value)?;
    if value < 0.0 {
        return Err(DatasetError::InvalidValue {
            line,
            message: format!("negative value {value} in `{field}`"),
        });
    }
    Ok(value)
}

fn round_entry(
    line: usize,
    n: usize,
    price: Option<f64>,
    points: Option<f64>,
) -> Result<RoundEntry, DatasetError> {
    let price = price
        .map(|v| check_non_negative(line, &format!("price_round_{n}"), v))
        .transpose()?;
    let points = points
        .map(|v| check_finite(line, &format!("points_round_{n}"), v))
        .transpose()?;
    Ok(RoundEntry { price, points })
}

fn convert_row(line: usize, raw: RawPlayerRow) -> Result<PlayerRecord, DatasetError> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(DatasetError::InvalidValue {
            line,
            message: "empty player name".into(),
        });
    }

    let team = Team::from_name(&raw.team).ok_or_else(|| DatasetError::UnknownTeam {
        line,
        value: raw.team.trim().to_string(),
    })?;
    let position =
        Position::from_label(&raw.position).ok_or_else(|| DatasetError::UnknownPosition {
            line,
            value: raw.position.trim().to_string(),
        })?;

    let rounds = [
        round_entry(line, 1, raw.price_round_1, raw.points_round_1)?,
        round_entry(line, 2, raw.price_round_2, raw.points_round_2)?,
        round_entry(line, 3, raw.price_round_3, raw.points_round_3)?,
        round_entry(line, 4, raw.price_round_4, raw.points_round_4)?,
        round_entry(line, 5, raw.price_round_5, raw.points_round_5)?,
    ];

    let counters = SkillCounters {
        tackles: check_non_negative(line, "tackles", raw.tackles)?,
        conversions: check_non_negative(line, "conversions", raw.conversions)?,
        penalties: check_non_negative(line, "penalties", raw.penalties)?,
        drop_goals: check_non_negative(line, "drop_goals", raw.drop_goals)?,
        fifty_22s: check_non_negative(line, "fifty_22s", raw.fifty_22s)?,
        tries: check_non_negative(line, "tries", raw.tries)?,
        assists: check_non_negative(line, "assists", raw.assists)?,
        carries: check_non_negative(line, "carries", raw.carries)?,
        metres_carried: check_non_negative(line, "metres_carried", raw.metres_carried)?,
        defenders_beaten: check_non_negative(line, "defenders_beaten", raw.defenders_beaten)?,
        linebreaks: check_non_negative(line, "linebreaks", raw.linebreaks)?,
        breakdown_steals: check_non_negative(line, "breakdown_steals", raw.breakdown_steals)?,
        lineout_steals: check_non_negative(line, "lineout_steals", raw.lineout_steals)?,
    };

    Ok(PlayerRecord {
        name,
        team,
        position,
        rounds,
        latest_price: check_non_negative(line, "latest_price", raw.latest_price)?,
        points_all_rounds: check_finite(line, "points_all_rounds", raw.points_all_rounds)?,
        points_per_round_all_rounds: check_finite(
            line,
            "points_per_round_all_rounds",
            raw.points_per_round_all_rounds,
        )?,
        num_matches: check_non_negative(line, "num_matches", raw.num_matches)?.round() as u32,
        counters,
    })
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Load players from any reader. Exposed for tests that feed inline CSV.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, DatasetError> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers = reader.headers()?.clone();
    let present: HashSet<&str> = headers.iter().map(str::trim).collect();
    for column in required_headers() {
        if !present.contains(column.as_str()) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut players = Vec::new();
    let mut seen = HashSet::new();
    for (i, result) in reader.deserialize::<RawPlayerRow>().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let record = convert_row(line, result?)?;
        if !seen.insert(record.name.clone()) {
            warn!("duplicate player name '{}' on line {}", record.name, line);
        }
        players.push(record);
    }

    if players.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(players)
}

/// Load the player dataset from a CSV file.
pub fn load_players(path: &Path) -> Result<Vec<PlayerRecord>, DatasetError> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_players_from_reader(file)?;
    info!("loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,team,position,price_round_1,points_round_1,price_round_2,points_round_2,price_round_3,points_round_3,price_round_4,points_round_4,price_round_5,points_round_5,latest_price,points_all_rounds,points_per_round_all_rounds,num_matches,tackles,conversions,penalties,drop_goals,fifty_22s,tries,assists,carries,metres_carried,defenders_beaten,linebreaks,breakdown_steals,lineout_steals";

    fn csv_with(rows: &[&str]) -> String {
        let mut s = String::from(HEADER);
        for row in rows {
            s.push('\n');
            s.push_str(row);
        }
        s
    }

    #[test]
    fn loads_full_row() {
        let data = csv_with(&[
            "Antoine Dupont,France,scrum-half,20,45,20,38,20.5,52,21,30,21,41,21,206,41.2,5,22,0,0,0,1,4,6,40,310,12,5,1,0",
        ]);
        let players = load_players_from_reader(data.as_bytes()).unwrap();
        assert_eq!(players.len(), 1);
        let p = &players[0];
        assert_eq!(p.name, "Antoine Dupont");
        assert_eq!(p.team, Team::France);
        assert_eq!(p.position, Position::ScrumHalf);
        assert_eq!(p.rounds[2].price, Some(20.5));
        assert_eq!(p.rounds[2].points, Some(52.0));
        assert_eq!(p.num_matches, 5);
        assert!((p.points_per_round_all_rounds - 41.2).abs() < f64::EPSILON);
        assert_eq!(p.counters.tries, 4.0);
        assert_eq!(p.counters.metres_carried, 310.0);
    }

    #[test]
    fn empty_round_cells_are_none() {
        let data = csv_with(&[
            "Bench Prop,Italy,prop,8,4,,,8,0,,,8,6,8,10,3.3,3,12,0,0,0,0,0,0,5,20,0,0,0,0",
        ]);
        let players = load_players_from_reader(data.as_bytes()).unwrap();
        let p = &players[0];
        assert_eq!(p.rounds[1], RoundEntry::default());
        assert_eq!(p.rounds[2].points, Some(0.0));
        assert_eq!(p.rounds[3].price, None);
    }

    #[test]
    fn names_and_labels_trimmed() {
        let data = csv_with(&[
            "  Finn Russell  , Scotland , fly-half ,15,30,15,22,15,18,15,25,15,20,15,115,23,5,10,9,6,0,3,1,2,10,80,3,1,0,0",
        ]);
        let players = load_players_from_reader(data.as_bytes()).unwrap();
        assert_eq!(players[0].name, "Finn Russell");
        assert_eq!(players[0].team, Team::Scotland);
        assert_eq!(players[0].position, Position::FlyHalf);
    }

    #[test]
    fn unknown_team_is_fatal() {
        let data = csv_with(&[
            "Some Player,Georgia,prop,8,4,8,4,8,4,8,4,8,4,8,20,4,5,10,0,0,0,0,0,0,5,20,0,0,0,0",
        ]);
        let err = load_players_from_reader(data.as_bytes()).unwrap_err();
        match err {
            DatasetError::UnknownTeam { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "Georgia");
            }
            other => panic!("expected UnknownTeam, got: {other}"),
        }
    }

    #[test]
    fn unknown_position_is_fatal() {
        let data = csv_with(&[
            "Some Player,Wales,wing,8,4,8,4,8,4,8,4,8,4,8,20,4,5,10,0,0,0,0,0,0,5,20,0,0,0,0",
        ]);
        let err = load_players_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::UnknownPosition { line: 2, .. }));
    }

    #[test]
    fn missing_column_is_fatal() {
        let data = HEADER.replace(",lineout_steals", "");
        let err = load_players_from_reader(data.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumn(col) => assert_eq!(col, "lineout_steals"),
            other => panic!("expected MissingColumn, got: {other}"),
        }
    }

    #[test]
    fn missing_round_column_is_fatal() {
        let data = HEADER.replace("price_round_4,points_round_4,", "");
        let err = load_players_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "price_round_4"));
    }

    #[test]
    fn malformed_number_is_fatal() {
        let data = csv_with(&[
            "Some Player,Wales,prop,8,4,8,4,8,4,8,4,8,4,eight,20,4,5,10,0,0,0,0,0,0,5,20,0,0,0,0",
        ]);
        let err = load_players_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn negative_counter_is_fatal() {
        let data = csv_with(&[
            "Some Player,Wales,prop,8,4,8,4,8,4,8,4,8,4,8,20,4,5,-1,0,0,0,0,0,0,5,20,0,0,0,0",
        ]);
        let err = load_players_from_reader(data.as_bytes()).unwrap_err();
        match err {
            DatasetError::InvalidValue { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("tackles"));
            }
            other => panic!("expected InvalidValue, got: {other}"),
        }
    }

    #[test]
    fn nan_points_is_fatal() {
        let data = csv_with(&[
            "Some Player,Wales,prop,8,NaN,8,4,8,4,8,4,8,4,8,20,4,5,1,0,0,0,0,0,0,5,20,0,0,0,0",
        ]);
        let err = load_players_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn negative_points_are_allowed() {
        let data = csv_with(&[
            "Carded Lock,England,second-row,10,-3,10,12,10,8,10,5,10,9,10,31,6.2,5,40,0,0,0,0,0,0,20,60,1,0,2,3",
        ]);
        let players = load_players_from_reader(data.as_bytes()).unwrap();
        assert_eq!(players[0].rounds[0].points, Some(-3.0));
    }

    #[test]
    fn header_only_is_empty_error() {
        let err = load_players_from_reader(HEADER.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn duplicate_names_are_kept() {
        let row = "Dan Sheehan,Ireland,hooker,10,30,10,25,10,20,10,15,10,10,10,100,20,5,30,0,0,0,0,3,1,25,90,4,2,1,1";
        let data = csv_with(&[row, row]);
        let players = load_players_from_reader(data.as_bytes()).unwrap();
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn extra_columns_ignored() {
        let data = format!(
            "{HEADER},club\nDan Sheehan,Ireland,hooker,10,30,10,25,10,20,10,15,10,10,10,100,20,5,30,0,0,0,0,3,1,25,90,4,2,1,1,Leinster"
        );
        let players = load_players_from_reader(data.as_bytes()).unwrap();
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_players(Path::new("/nonexistent/players.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
