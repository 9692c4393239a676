// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Plugin configuration
//!
//! Layers, lowest priority first: defaults, TOML file, environment, host
//! mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::value::{as_f64, as_string, as_string_list, as_usize};
use crate::fetch::FetchConfig;
use crate::search::SearchConfig;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// Host mapping is not an object
    #[error("Configuration must be a mapping, got {0}")]
    NotAMapping(String),
    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete plugin configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Search pipeline settings
    pub search: SearchConfig,
    /// Fetch pipeline settings
    pub fetch: FetchConfig,
}

impl PluginConfig {
    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Defaults overridden by a host mapping
    pub fn from_host_mapping(mapping: &Value) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge_host_mapping(mapping)?;
        Ok(config)
    }

    /// Load a TOML file
    ///
    /// Keys are read from a `[sousuo]` table when present, otherwise from the
    /// top level. Key names match the host mapping.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let toml_value: toml::Value = toml::from_str(content)?;
        let table = toml_value.get("sousuo").cloned().unwrap_or(toml_value);
        let mapping = serde_json::to_value(table)
            .map_err(|e| ConfigError::Invalid(format!("unrepresentable TOML value: {}", e)))?;
        Self::from_host_mapping(&mapping)
    }

    /// Override fields from `SOUSUO_*` environment variables
    pub fn apply_env(&mut self) {
        self.search.apply_env();
        self.fetch.apply_env();
    }

    /// Merge a host-supplied mapping
    ///
    /// Unparseable values keep their current setting and log a warning;
    /// unknown keys are ignored.
    pub fn merge_host_mapping(&mut self, mapping: &Value) -> Result<(), ConfigError> {
        let map = match mapping {
            Value::Object(map) => map,
            Value::Null => return Ok(()),
            other => return Err(ConfigError::NotAMapping(type_name(other).to_string())),
        };

        for (key, value) in map {
            let applied = match key.as_str() {
                "max_results" => set(&mut self.search.max_results, as_usize(value)),
                "fetch_timeout_seconds" => set(&mut self.fetch.timeout_seconds, as_f64(value)),
                "region" => set(&mut self.search.region, as_string(value)),
                "safesearch" => set(&mut self.search.safesearch, as_string(value)),
                "backend" => set(
                    &mut self.search.backend,
                    as_string(value).map(|s| s.to_lowercase()),
                ),
                "retry_attempts" => set(
                    &mut self.search.retry_attempts,
                    as_usize(value).and_then(|v| u32::try_from(v).ok()),
                ),
                "retry_delay_seconds" => {
                    set(&mut self.search.retry_delay_seconds, as_f64(value))
                }
                "search_timeout_seconds" => {
                    set(&mut self.search.request_timeout_seconds, as_f64(value))
                }
                "display_limit" => set(&mut self.search.display_limit, as_usize(value)),
                "description_max_chars" => {
                    set(&mut self.search.description_max_chars, as_usize(value))
                }
                "priority_domains" => {
                    set(&mut self.search.priority_domains, as_string_list(value))
                }
                "fetch_max_chars" => set(&mut self.fetch.max_chars, as_usize(value)),
                "user_agent" => set(&mut self.fetch.user_agent, as_string(value)),
                _ => {
                    debug!("Ignoring unknown config key: {}", key);
                    true
                }
            };

            if !applied {
                warn!("Ignoring invalid value for config key '{}': {}", key, value);
            }
        }

        Ok(())
    }

    /// Validate both pipelines
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate().map_err(ConfigError::Invalid)?;
        self.fetch.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

fn set<T>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
