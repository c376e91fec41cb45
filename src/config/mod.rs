//! Configuration for a protosplit run
//!
//! Settings are resolved in layers, each overriding the previous one:
//! built-in defaults, a TOML file, `PROTOSPLIT_*` environment variables,
//! and finally command line flags.

use crate::document::OutputMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_INPUT: &str = "SwiftUI.swift";
pub const DEFAULT_OUTPUT: &str = "tempData.txt";
pub const CONFIG_FILE_NAME: &str = "protosplit.toml";

pub const ENV_INPUT: &str = "PROTOSPLIT_INPUT";
pub const ENV_OUTPUT: &str = "PROTOSPLIT_OUTPUT";
pub const ENV_MODE: &str = "PROTOSPLIT_MODE";

/// Contents of a `protosplit.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub mode: Option<OutputMode>,
}

impl FileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            Error::config(format!("invalid config file {}: {e}", path.display()))
        })
    }
}

/// Locate and load the config file, if any
///
/// An explicit path must exist. Otherwise `protosplit.toml` in `dir` is
/// used when present.
pub fn discover_config_file(explicit: Option<&Path>, dir: &Path) -> Result<Option<FileConfig>> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return FileConfig::load(path).map(Some);
    }

    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        debug!("Loading config from {}", candidate.display());
        return FileConfig::load(&candidate).map(Some);
    }

    Ok(None)
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub mode: Option<OutputMode>,
}

/// Fully resolved settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: OutputMode::default(),
        }
    }
}

impl Settings {
    pub fn merge_file(&mut self, file: FileConfig) {
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(mode) = file.mode {
            self.mode = mode;
        }
    }

    /// Merge environment values obtained through `lookup`
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_INPUT) {
            self.input = PathBuf::from(input);
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = PathBuf::from(output);
        }
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = mode.parse()?;
        }
        Ok(())
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
    }

    /// Resolve settings from every layer, reading the real environment
    pub fn resolve(config: Option<&Path>, dir: &Path, overrides: Overrides) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(file) = discover_config_file(config, dir)? {
            settings.merge_file(file);
        }
        settings.merge_env_vars()?;
        settings.apply_overrides(overrides);
        debug!(?settings, "Resolved settings");
        Ok(settings)
    }
}
