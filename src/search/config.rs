// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for web search functionality

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use super::format::FormatOptions;
use super::priority::DEFAULT_PRIORITY_DOMAINS;
use super::types::SearchParams;

/// Configuration for web search functionality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum hits requested from the backend per attempt
    pub max_results: usize,
    /// Region code passed to the backend
    pub region: String,
    /// Safe search level passed to the backend
    pub safesearch: String,
    /// Backend selector ("bing" or "duckduckgo")
    pub backend: String,
    /// Attempts before giving up
    pub retry_attempts: u32,
    /// Back-off between attempts in seconds
    pub retry_delay_seconds: f64,
    /// Per-request timeout for the backend in seconds
    pub request_timeout_seconds: f64,
    /// Entries rendered in the summary
    pub display_limit: usize,
    /// Description length before truncation
    pub description_max_chars: usize,
    /// URLs containing one of these sort first
    pub priority_domains: Vec<String>,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `SOUSUO_*` environment variables when present
    pub fn apply_env(&mut self) {
        if let Some(v) = env_parse("SOUSUO_MAX_RESULTS") {
            self.max_results = v;
        }
        if let Ok(v) = env::var("SOUSUO_REGION") {
            self.region = v;
        }
        if let Ok(v) = env::var("SOUSUO_SAFESEARCH") {
            self.safesearch = v;
        }
        if let Ok(v) = env::var("SOUSUO_BACKEND") {
            self.backend = v.to_lowercase();
        }
        if let Some(v) = env_parse("SOUSUO_RETRY_ATTEMPTS") {
            self.retry_attempts = v;
        }
        if let Some(v) = env_parse("SOUSUO_RETRY_DELAY_SECONDS") {
            self.retry_delay_seconds = v;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 {
            return Err("max_results must be at least 1".to_string());
        }
        if self.retry_attempts == 0 {
            return Err("retry_attempts must be at least 1".to_string());
        }
        if !self.retry_delay_seconds.is_finite() || self.retry_delay_seconds < 0.0 {
            return Err("retry_delay_seconds must be a non-negative number".to_string());
        }
        if !self.request_timeout_seconds.is_finite() || self.request_timeout_seconds <= 0.0 {
            return Err("request_timeout_seconds must be greater than 0".to_string());
        }
        if self.display_limit == 0 {
            return Err("display_limit must be at least 1".to_string());
        }
        if self.backend.trim().is_empty() {
            return Err("backend cannot be empty".to_string());
        }
        Ok(())
    }

    /// Parameters sent to the backend on every attempt
    pub fn params(&self) -> SearchParams {
        SearchParams {
            region: self.region.clone(),
            safesearch: self.safesearch.clone(),
            max_results: self.max_results,
            backend: self.backend.clone(),
        }
    }

    /// Rendering limits for the summary
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            display_limit: self.display_limit,
            description_max_chars: self.description_max_chars,
        }
    }

    /// Back-off between attempts
    pub fn retry_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.retry_delay_seconds).unwrap_or(Duration::from_secs(6))
    }

    /// Per-request backend timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_timeout_seconds)
            .unwrap_or(Duration::from_secs(10))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            region: "cn-zh".to_string(),
            safesearch: "off".to_string(),
            backend: "bing".to_string(),
            retry_attempts: 3,
            retry_delay_seconds: 6.0,
            request_timeout_seconds: 10.0,
            display_limit: 5,
            description_max_chars: 200,
            priority_domains: DEFAULT_PRIORITY_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
