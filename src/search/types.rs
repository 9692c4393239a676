// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for web search functionality

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw hit as returned by a search backend, before ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Title of the hit
    pub title: String,
    /// Target URL of the hit
    pub href: String,
    /// Snippet text shown under the title
    pub body: String,
    /// Backend that produced the hit (e.g., "bing", "duckduckgo")
    #[serde(default)]
    pub source: String,
}

/// A ranked search result handed to the formatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 1-based position after priority sorting
    pub rank: usize,
    /// Title of the search result
    pub title: String,
    /// URL of the search result
    pub url: String,
    /// Snippet/description of the search result
    pub description: String,
    /// Source backend
    pub source: String,
}

impl SearchResult {
    /// Build a ranked result from a backend hit
    pub fn from_hit(rank: usize, hit: SearchHit) -> Self {
        Self {
            rank,
            title: hit.title,
            url: hit.href,
            description: hit.body,
            source: hit.source,
        }
    }
}

/// Parameters passed to a backend on every attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Region code in `<country>-<lang>` form, e.g. "cn-zh"
    pub region: String,
    /// Safe search level: "on", "moderate" or "off"
    pub safesearch: String,
    /// Maximum number of hits to request
    pub max_results: usize,
    /// Backend selector ("bing", "duckduckgo")
    pub backend: String,
}

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure talking to the backend
    #[error("Search request failed: {0}")]
    Http(String),

    /// Backend answered with a non-success status
    #[error("Search backend returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Backend page could not be understood
    #[error("Failed to parse search response: {0}")]
    Parse(String),

    /// Search request timed out
    #[error("Search timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Backend selector does not name a known backend
    #[error("Unknown search backend: {name}")]
    UnknownBackend {
        /// The selector that was configured
        name: String,
    },

    /// Invalid search query
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Reason the query is invalid
        reason: String,
    },

    /// Every attempt failed; carries the last failure
    #[error("{source} (after {attempts} attempts)")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Failure of the final attempt
        #[source]
        source: Box<SearchError>,
    },
}

impl SearchError {
    /// Map a reqwest error into the matching search error
    pub fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            SearchError::Timeout { timeout_ms }
        } else {
            SearchError::Http(err.to_string())
        }
    }
}
