//! Configuration types for Umbra

use crate::UmbraError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub digest: DigestConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub checkpoint: CheckpointConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Label substrings marking an uninformative (placeholder) annotation
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
    /// Discard label text from digested annotation sets
    #[serde(default)]
    pub simplify: bool,
    /// Drop placeholder-labelled groups from digested annotation sets
    #[serde(default)]
    pub exclude_placeholder: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Emit a progress report every N processed entries
    #[serde(default = "default_progress_every")]
    pub progress_every: u64,
    /// Write a checkpoint snapshot every N stored entries (0 = never)
    #[serde(default = "default_checkpoint_every")]
    pub checkpoint_every: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckpointConfig {
    /// Directory for checkpoint snapshots and accession indexes
    #[serde(default)]
    pub directory: Option<String>,
}

// Default value functions
fn default_ignore_patterns() -> Vec<String> {
    ["Putative", "DUF", "Uncharacter", "nknown"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_progress_every() -> u64 {
    10_000
}
fn default_checkpoint_every() -> u64 {
    100_000
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: default_ignore_patterns(),
            simplify: false,
            exclude_placeholder: false,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            progress_every: default_progress_every(),
            checkpoint_every: default_checkpoint_every(),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config, UmbraError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| UmbraError::Configuration(e.to_string()))
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &Path) -> Result<(), UmbraError> {
    let content =
        toml::to_string_pretty(config).map_err(|e| UmbraError::Configuration(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}
