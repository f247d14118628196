mod defaults;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AgroError;
use defaults::*;

/// Top-level AgroLens configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agrolens: AgroLensConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgroLensConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Language selected when a session starts or is reset.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for AgroLensConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            default_language: default_language(),
        }
    }
}

/// Simulated latency of the mock analyzers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_crop_delay_ms")]
    pub crop_delay_ms: u64,
    #[serde(default = "default_soil_delay_ms")]
    pub soil_delay_ms: u64,
}

impl AnalysisConfig {
    pub fn crop_delay(&self) -> Duration {
        Duration::from_millis(self.crop_delay_ms)
    }

    pub fn soil_delay(&self) -> Duration {
        Duration::from_millis(self.soil_delay_ms)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            crop_delay_ms: default_crop_delay_ms(),
            soil_delay_ms: default_soil_delay_ms(),
        }
    }
}

/// How the keyword responder picks between several contained triggers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Longest contained trigger wins; ties go to table order.
    #[default]
    Longest,
    /// First contained trigger in table order wins.
    First,
}

/// Keyword assistant settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    /// The file was absent; every value is a default.
    Defaults(PathBuf),
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, AgroError> {
    load_with_source(path).map(|(cfg, _)| cfg)
}

/// Like [`load`], also reporting whether the file was found. Nothing is
/// logged here: callers usually load config before tracing is installed.
pub fn load_with_source(path: &str) -> Result<(Config, Source), AgroError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok((Config::default(), Source::Defaults(path.to_path_buf())));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| AgroError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    Ok((parse(&content)?, Source::File(path.to_path_buf())))
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, AgroError> {
    toml::from_str(content).map_err(|e| AgroError::Config(format!("failed to parse config: {e}")))
}
