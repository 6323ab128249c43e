//! YAML configuration file support for the retrieval pipeline.
//!
//! All stage settings live in a single YAML document so deployments can
//! pin extraction and query behavior in one place and load it at startup.
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! name: "archive-reindex"
//!
//! extract:
//!   grid_size: 5
//!
//! query:
//!   options:
//!     k: 100
//!     metric: "l2"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use extract::{QueryConfig, SubdivMotionHistogram};

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ShotmatchConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Feature-extraction stage configuration.
    #[serde(default)]
    pub extract: ExtractSection,

    /// Query stage configuration.
    #[serde(default)]
    pub query: QuerySection,
}

/// Extraction stage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ExtractSection {
    /// Subdivision grid size of the motion-histogram feature.
    #[serde(default = "ExtractSection::default_grid_size")]
    pub grid_size: usize,
}

impl ExtractSection {
    fn default_grid_size() -> usize {
        5
    }
}

impl Default for ExtractSection {
    fn default() -> Self {
        Self {
            grid_size: Self::default_grid_size(),
        }
    }
}

/// Query stage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct QuerySection {
    /// Backend-specific options, passed through unmodified.
    #[serde(default)]
    pub options: serde_json::Value,
}

impl ShotmatchConfig {
    /// The built-in default configuration (format version 1.0).
    pub fn default_v1() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            extract: ExtractSection::default(),
            query: QuerySection::default(),
        }
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigLoadError> {
        let config: ShotmatchConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse, and validate a YAML configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "version must not be empty".into(),
            ));
        }
        if self.version != "1" && !self.version.starts_with("1.") {
            return Err(ConfigLoadError::UnsupportedVersion(self.version.clone()));
        }
        if self.extract.grid_size == 0 {
            return Err(ConfigLoadError::Validation(
                "extract.grid_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Build the motion-histogram extractor described by this config.
    pub fn extractor(&self) -> SubdivMotionHistogram {
        SubdivMotionHistogram::with_grid(self.extract.grid_size)
    }

    /// Build the opaque per-query configuration.
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig::with_options(self.query.options.clone())
    }
}

impl Default for ShotmatchConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}
