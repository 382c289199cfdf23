// Configuration loading and parsing (config/dashboard.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rounds::RoundLabel;

/// Name of the config file under `config/` (and `defaults/`).
pub const CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub data_paths: DataPaths,
    pub default_round: RoundLabel,
    pub export_dir: String,
    pub weights: CompositeWeights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
}

/// Per-counter weights for the five composite skill scores.
///
/// Each counter feeds exactly one composite:
/// - Kicking: conversions, penalties, drop_goals, fifty_22s
/// - Tackling: tackles
/// - Tries+Assists: tries, assists
/// - Carries+Linebreaks: carries, metres_carried, defenders_beaten, linebreaks
/// - Breakdown+Lineout Steals: breakdown_steals, lineout_steals
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CompositeWeights {
    pub conversions: f64,
    pub penalties: f64,
    pub drop_goals: f64,
    pub fifty_22s: f64,
    pub tackles: f64,
    pub tries: f64,
    pub assists: f64,
    pub carries: f64,
    pub metres_carried: f64,
    pub defenders_beaten: f64,
    pub linebreaks: f64,
    pub breakdown_steals: f64,
    pub lineout_steals: f64,
}

impl Default for CompositeWeights {
    /// Fantasy scoring values for each counted event.
    fn default() -> Self {
        CompositeWeights {
            conversions: 2.0,
            penalties: 3.0,
            drop_goals: 5.0,
            fifty_22s: 7.0,
            tackles: 1.0,
            tries: 10.0,
            assists: 4.0,
            carries: 0.5,
            metres_carried: 0.1,
            defenders_beaten: 2.0,
            linebreaks: 3.0,
            breakdown_steals: 5.0,
            lineout_steals: 7.0,
        }
    }
}

impl CompositeWeights {
    fn named(&self) -> [(&'static str, f64); 13] {
        [
            ("composite_weights.conversions", self.conversions),
            ("composite_weights.penalties", self.penalties),
            ("composite_weights.drop_goals", self.drop_goals),
            ("composite_weights.fifty_22s", self.fifty_22s),
            ("composite_weights.tackles", self.tackles),
            ("composite_weights.tries", self.tries),
            ("composite_weights.assists", self.assists),
            ("composite_weights.carries", self.carries),
            ("composite_weights.metres_carried", self.metres_carried),
            ("composite_weights.defenders_beaten", self.defenders_beaten),
            ("composite_weights.linebreaks", self.linebreaks),
            ("composite_weights.breakdown_steals", self.breakdown_steals),
            ("composite_weights.lineout_steals", self.lineout_steals),
        ]
    }
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire dashboard.toml file.
#[derive(Debug, Clone, Deserialize)]
struct DashboardFile {
    data: DataPaths,
    dashboard: DashboardSection,
    composite_weights: CompositeWeights,
}

#[derive(Debug, Clone, Deserialize)]
struct DashboardSection {
    default_round: String,
    export_dir: String,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/dashboard.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config()` does that first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = std::fs::read_to_string(&path).map_err(|_| ConfigError::FileNotFound {
        path: path.clone(),
    })?;
    let file: DashboardFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let default_round = RoundLabel::parse(&file.dashboard.default_round).map_err(|e| {
        ConfigError::ValidationError {
            field: "dashboard.default_round".into(),
            message: e.to_string(),
        }
    })?;

    let config = Config {
        data_paths: file.data,
        default_round,
        export_dir: file.dashboard.export_dir,
        weights: file.composite_weights,
    };

    validate(&config)?;

    Ok(config)
}

/// Copy every file in `defaults/` into `config/` unless a file of the same
/// name is already there. Returns the copied paths. `.example` files are
/// skipped.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.is_dir() {
        if config_dir.is_dir() {
            return Ok(vec![]);
        }
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither defaults/ nor config/ directory found in {}",
                base_dir.display()
            ),
        });
    }

    let copy_err = |message: String| ConfigError::DefaultsCopyError { message };

    std::fs::create_dir_all(&config_dir)
        .map_err(|e| copy_err(format!("failed to create config directory: {e}")))?;
    let entries = std::fs::read_dir(&defaults_dir)
        .map_err(|e| copy_err(format!("failed to read defaults directory: {e}")))?;

    let mut copied = Vec::new();
    for entry in entries {
        let source = entry
            .map_err(|e| copy_err(format!("failed to read defaults entry: {e}")))?
            .path();
        let Some(file_name) = source.file_name() else {
            continue;
        };
        if !source.is_file() || file_name.to_string_lossy().ends_with(".example") {
            continue;
        }

        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }
        std::fs::copy(&source, &target).map_err(|e| {
            copy_err(format!(
                "failed to copy {} to {}: {e}",
                source.display(),
                target.display()
            ))
        })?;
        copied.push(target);
    }

    Ok(copied)
}

/// Load config relative to the current working directory, copying defaults
/// into place first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data_paths.players.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.players".into(),
            message: "must not be empty".into(),
        });
    }

    if config.export_dir.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "dashboard.export_dir".into(),
            message: "must not be empty".into(),
        });
    }

    // Weights may be zero (the counter is ignored) but never negative.
    for (name, val) in config.weights.named() {
        if !val.is_finite() || val < 0.0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be a finite value >= 0, got {val}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
