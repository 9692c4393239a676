// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod config;
pub mod fetch;
pub mod plugin;
pub mod search;
pub mod tools;
pub mod version;

pub use config::{ConfigError, PluginConfig};
pub use fetch::{FetchConfig, FetchError, PageFetcher};
pub use plugin::SousuoPlugin;
pub use search::{SearchBackend, SearchConfig, SearchError, SearchHit, SearchResult, SearchService};
pub use tools::{Tool, ToolCall, ToolDefinition, ToolRegistry};
