//! Configuration management.
//!
//! Handles:
//! - Default format file
//! - Default output format
//! - Log level
//!
//! Only values set through `stock config` are stored. Flags and environment
//! variables override them for a single run and are never written back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    ProjectDirs::from("com", "stockroom", "stock")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format file used when `--format-file` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_file: Option<PathBuf>,

    /// Output format used when `--output` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,

    /// Log filter used when neither `RUST_LOG` nor `--log-level` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Resolve the log filter, preferring flag/env over config.
    pub fn resolve_log_level<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.log_level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Resolve the output format, preferring the flag over config.
    pub fn resolve_output(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output).unwrap_or_default()
    }

    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load config from `path`, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))
    }
}
