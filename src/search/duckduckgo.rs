// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo search backend
//!
//! Implements web search using DuckDuckGo's HTML interface.
//! No API key required.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::provider::SearchBackend;
use super::scrape::{element_text, http_client};
use super::types::{SearchError, SearchHit, SearchParams};

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo search backend (no API key required)
pub struct DuckDuckGoBackend {
    client: Client,
    timeout_ms: u64,
}

impl DuckDuckGoBackend {
    /// Create a new DuckDuckGo backend
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        Ok(Self {
            client: http_client(timeout)?,
            timeout_ms: timeout.as_millis() as u64,
        })
    }
}

#[async_trait]
impl SearchBackend for DuckDuckGoBackend {
    async fn text(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let response = self
            .client
            .post(DDG_HTML_URL)
            .form(&[
                ("q", query),
                ("kl", params.region.as_str()),
                ("kp", ddg_safesearch(&params.safesearch)),
            ])
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest(e, self.timeout_ms))?;

        if !response.status().is_success() {
            return Err(SearchError::Status {
                status: response.status().as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest(e, self.timeout_ms))?;

        // Parse HTML for results
        let hits = parse_ddg_html(&html, params.max_results)?;
        debug!("DuckDuckGo returned {} hits for '{}'", hits.len(), query);

        Ok(hits)
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}

/// DuckDuckGo's `kp` parameter: 1 strict, -1 moderate, -2 off
fn ddg_safesearch(level: &str) -> &'static str {
    match level {
        "on" | "strict" => "1",
        "moderate" => "-1",
        _ => "-2",
    }
}

/// Parse DuckDuckGo HTML response to extract search hits
///
/// Results are `div.result` blocks; sponsored ones carry `result--ad`.
fn parse_ddg_html(html: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
    let parse = |css: &str| {
        Selector::parse(css).map_err(|e| SearchError::Parse(format!("{:?}", e)))
    };
    let result_selector = parse("div.result")?;
    let link_selector = parse("a.result__a")?;
    let snippet_selector = parse(".result__snippet")?;

    let document = Html::parse_document(html);
    let mut hits = Vec::new();

    for block in document.select(&result_selector) {
        if hits.len() >= max_results {
            break;
        }
        if block.value().classes().any(|c| c == "result--ad") {
            continue;
        }

        let Some(link) = block.select(&link_selector).next() else {
            continue;
        };
        let href = link
            .value()
            .attr("href")
            .map(extract_ddg_url)
            .unwrap_or_default();
        let title = element_text(&link);

        if href.is_empty() || title.is_empty() {
            continue;
        }

        let body = block
            .select(&snippet_selector)
            .next()
            .map(|s| element_text(&s))
            .unwrap_or_default();

        hits.push(SearchHit {
            title,
            href,
            body,
            source: "duckduckgo".to_string(),
        });
    }

    Ok(hits)
}

/// Extract actual URL from DuckDuckGo's redirect URL
fn extract_ddg_url(redirect_url: &str) -> String {
    // DDG URLs look like: //duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&...
    if redirect_url.starts_with("http") && !redirect_url.contains("duckduckgo.com/l/") {
        return redirect_url.to_string();
    }

    let absolute = if redirect_url.starts_with("//") {
        format!("https:{}", redirect_url)
    } else if redirect_url.starts_with('/') {
        format!("https://duckduckgo.com{}", redirect_url)
    } else {
        redirect_url.to_string()
    };

    Url::parse(&absolute)
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}
