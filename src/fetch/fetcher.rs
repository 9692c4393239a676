// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching
//!
//! One GET per call: redirects followed, fixed timeout and User-Agent,
//! non-success status is an error.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::config::FetchConfig;
use super::extractor::{extract_text, truncate_chars};

/// Content fetch error types
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL did not parse
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// Parser message
        reason: String,
    },
    /// Only http and https are fetched
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(String),
    /// HTTP non-success status
    #[error("HTTP {status} for: {url}")]
    Status {
        /// Response status code
        status: u16,
        /// Final URL after redirects
        url: String,
    },
    /// Body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

/// Page fetcher returning scrubbed plain text
pub struct PageFetcher {
    client: Client,
    config: FetchConfig,
}

impl PageFetcher {
    /// Create a new page fetcher
    ///
    /// Fails when the HTTP client cannot be built (e.g. no TLS backend).
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Fetch a page and return its text, truncated to `max_chars`
    ///
    /// An empty string means the page had no visible text.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Self::parse_url(url)?;

        debug!("Fetching content from: {}", parsed);

        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        let text = extract_text(&html);
        let text = truncate_chars(&text, self.config.max_chars).to_string();

        info!("Fetched {} chars from: {}", text.chars().count(), url);

        Ok(text)
    }

    /// Parse and check a URL before any network access
    pub fn parse_url(url: &str) -> Result<Url, FetchError> {
        let url = url.trim();
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
