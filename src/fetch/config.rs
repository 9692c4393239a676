// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for page fetching
//!
//! Defines settings for HTTP fetching and output limits.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Configuration for page fetching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds (default: 20)
    pub timeout_seconds: f64,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Maximum characters returned (default: 20000)
    pub max_chars: usize,
    /// Redirect hops followed before giving up (default: 10)
    pub max_redirects: usize,
}

impl FetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `SOUSUO_*` environment variables when present
    pub fn apply_env(&mut self) {
        if let Some(v) = env::var("SOUSUO_FETCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            self.timeout_seconds = v;
        }
        if let Ok(v) = env::var("SOUSUO_USER_AGENT") {
            self.user_agent = v;
        }
        if let Some(v) = env::var("SOUSUO_FETCH_MAX_CHARS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            self.max_chars = v;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.timeout_seconds.is_finite() || self.timeout_seconds <= 0.0 {
            return Err("fetch_timeout_seconds must be greater than 0".to_string());
        }
        if self.max_chars == 0 {
            return Err("fetch_max_chars must be at least 1".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }
        Ok(())
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_seconds).unwrap_or(Duration::from_secs(20))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 20.0,
            user_agent: "Mozilla/5.0 AstrBot".to_string(),
            max_chars: 20_000,
            max_redirects: 10,
        }
    }
}
