//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, ObservabilityConfig, ValidationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HSN_*`)
/// 2. Config file passed to [`HsnConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HsnConfig {
    pub validation: ValidationConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl HsnConfig {
    /// Load configuration: defaults, then the optional TOML file, then env.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.cache_capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "validation.cache_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.validation.batch_chunk_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "validation.batch_chunk_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.catalog.code_column.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.code_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.catalog.description_column.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.description_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer is kept.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HSN_CACHE_CAPACITY") {
            if let Ok(v) = val.parse::<u64>() {
                self.validation.cache_capacity = v;
            }
        }
        if let Ok(val) = std::env::var("HSN_PARALLEL_BATCH") {
            if let Ok(v) = val.parse::<bool>() {
                self.validation.parallel_batch = v;
            }
        }
        if let Ok(val) = std::env::var("HSN_BATCH_CHUNK_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                self.validation.batch_chunk_size = v;
            }
        }
        if let Ok(val) = std::env::var("HSN_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
