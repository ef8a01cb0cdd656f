//! Configuration file support for eol-check.
//!
//! Provides YAML-based configuration through `eol-check.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! flags take precedence over every value read here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::application::dto::ReportFormat;
use crate::shared::duration::parse_duration;
use crate::shared::security::{read_regular_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "eol-check.config.yml";

/// A duration written either as seconds (`3600`) or as a string (`"1d12h"`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DurationSetting {
    Seconds(u64),
    Text(String),
}

impl DurationSetting {
    pub fn to_duration(&self) -> Result<Duration> {
        match self {
            DurationSetting::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationSetting::Text(text) => Ok(parse_duration(text)?),
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub threshold_days: Option<i64>,
    pub offline: Option<bool>,
    pub cache_ttl: Option<DurationSetting>,
    pub cache_dir: Option<PathBuf>,
    pub max_workers: Option<usize>,
    pub ignore: Option<Vec<String>>,
    pub timeout: Option<DurationSetting>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn report_format(&self) -> Result<Option<ReportFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<ReportFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }

    pub fn cache_ttl(&self) -> Result<Option<Duration>> {
        self.cache_ttl.as_ref().map(DurationSetting::to_duration).transpose()
    }

    pub fn timeout(&self) -> Result<Option<Duration>> {
        self.timeout.as_ref().map(DurationSetting::to_duration).transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file", MAX_INPUT_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.report_format()?;
    config.cache_ttl()?;
    config.timeout()?;

    if let Some(days) = config.threshold_days {
        if days < 0 {
            bail!(
                "threshold_days must not be negative (got {}).\n\n\
                 💡 Hint: Use 0 to disable warnings, or a number of days such as 90.",
                days
            );
        }
    }

    if config.max_workers == Some(0) {
        bail!("max_workers must be at least 1.\n\n💡 Hint: Remove the field to use twice the number of CPUs.");
    }

    if let Some(ref ignore) = config.ignore {
        for (i, name) in ignore.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "ignore[{}] must not be empty.\n\n💡 Hint: Each entry is a dependency name (e.g., \"django\").",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored.", key);
    }
}
