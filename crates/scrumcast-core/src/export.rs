// Chart export: writes a chart specification as pretty JSON so an external
// renderer can draw it.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::chart::ChartSpec;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize chart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File stem derived from the chart kind and title, e.g.
/// `bar-mean-points-by-team-round-2`.
pub fn default_stem(spec: &ChartSpec) -> String {
    let mut stem = String::from(spec.kind());
    let mut pending_dash = true;
    for ch in spec.title().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash {
                stem.push('-');
                pending_dash = false;
            }
            stem.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    stem
}

/// Write `spec` to `<dir>/<stem>.json`, creating `dir` when needed.
pub fn write_chart(spec: &ChartSpec, dir: &Path, stem: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{stem}.json"));
    let json = serde_json::to_string_pretty(spec)?;
    fs::write(&path, json).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!("exported {} chart to {}", spec.kind(), path.display());
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
