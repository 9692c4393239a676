// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search backend trait definition

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::bing::BingBackend;
use super::duckduckgo::DuckDuckGoBackend;
use super::types::{SearchError, SearchHit, SearchParams};

/// Trait for implementing search backends
///
/// A backend performs exactly one search attempt per call. Retrying,
/// sorting and formatting happen in [`SearchService`](super::SearchService).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Perform a text search
    ///
    /// # Arguments
    /// * `query` - The search query string
    /// * `params` - Region, safe search level and result cap
    ///
    /// # Returns
    /// The hits in backend order (possibly empty) or an error
    async fn text(&self, query: &str, params: &SearchParams)
        -> Result<Vec<SearchHit>, SearchError>;

    /// Get the backend name for logging
    fn name(&self) -> &'static str;
}

/// Construct the backend named by `selector`
///
/// This is the capability probe for search: an unknown selector or an HTTP
/// client that cannot be built both surface here, at startup.
pub fn create_backend(
    selector: &str,
    timeout: Duration,
) -> Result<Arc<dyn SearchBackend>, SearchError> {
    let backend: Arc<dyn SearchBackend> = match selector.trim().to_lowercase().as_str() {
        "bing" => Arc::new(BingBackend::new(timeout)?),
        "duckduckgo" | "ddg" => Arc::new(DuckDuckGoBackend::new(timeout)?),
        other => {
            return Err(SearchError::UnknownBackend {
                name: other.to_string(),
            })
        }
    };
    debug!("Search backend enabled: {}", backend.name());
    Ok(backend)
}
