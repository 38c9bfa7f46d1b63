//! Reading and writing layout configs as JSON files.
//!
//! The file holds a `config` object and, optionally, the `optimization_log`
//! of the pass that produced it.

use crate::error::OptimizerError;
use crate::record::OptimizationRecord;
use chrono::{DateTime, Utc};
use quire_types::{LayoutConfig, RawLayoutConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct LayoutFileRef<'a> {
    config: &'a LayoutConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    optimization_log: Option<&'a OptimizationRecord>,
}

#[derive(Deserialize)]
struct LayoutFile {
    config: Option<RawLayoutConfig>,
    #[serde(default)]
    optimization_log: Option<serde_json::Value>,
}

/// A config read back from disk together with its audit record, if one was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedLayout {
    pub config: LayoutConfig,
    pub record: Option<OptimizationRecord>,
}

/// Writes `config` (and `record`, when given) to `path`, creating parent directories.
pub fn save_layout(
    path: &Path,
    config: &LayoutConfig,
    record: Option<&OptimizationRecord>,
) -> Result<(), OptimizerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OptimizerError::io(parent, e))?;
    }

    let file = LayoutFileRef {
        config,
        optimization_log: record,
    };
    let mut json = serde_json::to_string_pretty(&file).map_err(|e| OptimizerError::json(path, e))?;
    json.push('\n');
    fs::write(path, json).map_err(|e| OptimizerError::io(path, e))?;

    log::info!("Layout config saved: {}", path.display());
    Ok(())
}

/// Reads a layout file. Returns `Ok(None)` when `path` does not exist.
///
/// A missing sub-record or an invalid value is an error; missing switches
/// default to `true`. An unreadable `optimization_log` is dropped with a warning
/// since it is informational only.
pub fn load_layout(path: &Path) -> Result<Option<LoadedLayout>, OptimizerError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(OptimizerError::io(path, e)),
    };

    let file: LayoutFile = serde_json::from_str(&text).map_err(|e| OptimizerError::json(path, e))?;
    let raw = file
        .config
        .ok_or_else(|| OptimizerError::MissingConfig(path.to_path_buf()))?;
    let config = LayoutConfig::try_from(raw)?;
    config.validate()?;

    let record = file
        .optimization_log
        .filter(|v| !v.is_null())
        .and_then(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable optimization log in {}: {}",
                    path.display(),
                    e
                );
                None
            }
        });

    log::info!("Layout config loaded: {}", path.display());
    Ok(Some(LoadedLayout { config, record }))
}

/// Audit file location for a pass run at `timestamp`: `dir/layout_YYYYmmdd_HHMMSS.json`.
pub fn layout_log_path(dir: &Path, timestamp: DateTime<Utc>) -> PathBuf {
    dir.join(format!("layout_{}.json", timestamp.format("%Y%m%d_%H%M%S")))
}
