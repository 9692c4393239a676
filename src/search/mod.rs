// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search pipeline
//!
//! query -> backend (with retry) -> domain-priority sort -> ranking ->
//! plain-text summary.
//!
//! Key features:
//! - HTML-scraping backends (Bing, DuckDuckGo), no API keys
//! - Fixed back-off between empty or failed attempts
//! - Static priority-domain list surfaced first

pub mod bing;
pub mod config;
pub mod duckduckgo;
pub mod format;
pub mod priority;
pub mod provider;
pub mod scrape;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::SearchConfig;
pub use format::{format_search_results, truncate_description, FormatOptions};
pub use priority::{sort_by_priority, DEFAULT_PRIORITY_DOMAINS};
pub use provider::{create_backend, SearchBackend};
pub use service::SearchService;
pub use types::{SearchError, SearchHit, SearchParams, SearchResult};
