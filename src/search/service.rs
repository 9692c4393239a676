// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search service orchestration
//!
//! Drives the backend through the retry loop, then orders and ranks hits.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

use super::config::SearchConfig;
use super::format::format_search_results;
use super::priority::sort_by_priority;
use super::provider::{create_backend, SearchBackend};
use super::types::{SearchError, SearchHit, SearchResult};

/// Retrying search over a single backend
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
    config: SearchConfig,
}

impl SearchService {
    /// Create a new search service from configuration
    ///
    /// Fails when the configured backend cannot be constructed.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let backend = create_backend(&config.backend, config.request_timeout())?;
        Ok(Self::with_backend(backend, config))
    }

    /// Create a service around an existing backend
    pub fn with_backend(backend: Arc<dyn SearchBackend>, config: SearchConfig) -> Self {
        Self { backend, config }
    }

    /// Search with retries
    ///
    /// Up to `retry_attempts` attempts; an empty or failed attempt that is not
    /// the last one is followed by `retry_delay`. The first attempt with hits
    /// wins.
    ///
    /// # Returns
    /// * `Ok(results)` - ranked results, priority domains first
    /// * `Ok(vec![])` - the final attempt came back empty
    /// * `Err(RetriesExhausted)` - the final attempt failed
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery {
                reason: "query is empty".to_string(),
            });
        }

        let params = self.config.params();
        let attempts = self.config.retry_attempts.max(1);
        let delay = self.config.retry_delay();
        let start = Instant::now();
        let mut last_error = None;

        for attempt in 1..=attempts {
            debug!(
                "Searching '{}' via {} (attempt {}/{})",
                query,
                self.backend.name(),
                attempt,
                attempts
            );

            match self.backend.text(query, &params).await {
                Ok(hits) if !hits.is_empty() => {
                    let results = self.rank(hits);
                    info!(
                        "Search complete: {} results for '{}' from {} in {}ms",
                        results.len(),
                        query,
                        self.backend.name(),
                        start.elapsed().as_millis()
                    );
                    return Ok(results);
                }
                Ok(_) => {
                    debug!("Attempt {} for '{}' returned no hits", attempt, query);
                    last_error = None;
                }
                Err(e) => {
                    error!(
                        "Search for '{}' failed on attempt {}: {}",
                        query, attempt, e
                    );
                    last_error = Some(e);
                }
            }

            if attempt < attempts {
                tokio::time::sleep(delay).await;
            }
        }

        match last_error {
            Some(e) => Err(SearchError::RetriesExhausted {
                attempts,
                source: Box::new(e),
            }),
            None => {
                info!("All {} attempts for '{}' returned 0 results", attempts, query);
                Ok(Vec::new())
            }
        }
    }

    /// Sort hits by domain priority and assign 1-based ranks
    pub fn rank(&self, mut hits: Vec<SearchHit>) -> Vec<SearchResult> {
        sort_by_priority(&mut hits, &self.config.priority_domains);
        hits.into_iter()
            .enumerate()
            .map(|(idx, hit)| SearchResult::from_hit(idx + 1, hit))
            .collect()
    }

    /// Render results with the configured limits
    pub fn format(&self, results: &[SearchResult]) -> String {
        format_search_results(results, &self.config.format_options())
    }

    /// Name of the backend in use
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Get the configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
