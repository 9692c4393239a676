// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Plugin entry point
//!
//! Builds both tools from configuration and activates them in the host's
//! registry.

use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::config::{ConfigError, PluginConfig};
use crate::tools::{
    SousuoFetchTool, SousuoSearchTool, ToolError, ToolRegistry, FETCH_TOOL_NAME,
    SEARCH_TOOL_NAME,
};

/// The search plugin: a search tool and a fetch tool
pub struct SousuoPlugin {
    config: PluginConfig,
    search: Arc<SousuoSearchTool>,
    fetch: Arc<SousuoFetchTool>,
}

impl SousuoPlugin {
    /// Validate configuration and probe both collaborators
    pub fn new(config: PluginConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let search = Arc::new(SousuoSearchTool::from_config(config.search.clone()));
        let fetch = Arc::new(SousuoFetchTool::from_config(config.fetch.clone()));

        Ok(Self {
            config,
            search,
            fetch,
        })
    }

    /// Build from the host's configuration mapping
    ///
    /// The mapping is applied over defaults and `SOUSUO_*` environment
    /// variables.
    pub fn from_host_mapping(mapping: &Value) -> Result<Self, ConfigError> {
        let mut config = PluginConfig::from_env();
        config.merge_host_mapping(mapping)?;
        Self::new(config)
    }

    /// Register and activate both tools
    pub fn initialize(&self, registry: &mut ToolRegistry) -> Result<(), ToolError> {
        registry.register(self.search.clone());
        registry.register(self.fetch.clone());

        for name in [SEARCH_TOOL_NAME, FETCH_TOOL_NAME] {
            registry.activate(name)?;
            info!("[{}] 函数工具已启用", name);
        }

        Ok(())
    }

    /// Whether the search backend probe succeeded
    pub fn search_available(&self) -> bool {
        self.search.is_available()
    }

    /// Whether the HTTP client probe succeeded
    pub fn fetch_available(&self) -> bool {
        self.fetch.is_available()
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }
}
