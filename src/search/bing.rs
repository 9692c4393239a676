// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bing search backend
//!
//! Scrapes the public bing.com results page. No API key required.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::provider::SearchBackend;
use super::scrape::{element_text, http_client, split_region};
use super::types::{SearchError, SearchHit, SearchParams};

const BING_SEARCH_URL: &str = "https://www.bing.com/search";

/// Bing caps a results page at 50 entries
const BING_MAX_COUNT: usize = 50;

/// Bing HTML search backend
pub struct BingBackend {
    client: Client,
    timeout_ms: u64,
}

impl BingBackend {
    /// Create a new Bing backend
    ///
    /// # Arguments
    /// * `timeout` - Per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        Ok(Self {
            client: http_client(timeout)?,
            timeout_ms: timeout.as_millis() as u64,
        })
    }
}

#[async_trait]
impl SearchBackend for BingBackend {
    async fn text(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let count = params.max_results.min(BING_MAX_COUNT).to_string();
        let mut query_params = vec![
            ("q", query.to_string()),
            ("count", count),
            ("adlt", bing_safesearch(&params.safesearch).to_string()),
        ];

        if let Some((country, lang)) = split_region(&params.region) {
            query_params.push(("cc", country.to_uppercase()));
            query_params.push(("setlang", lang.to_string()));
            query_params.push((
                "mkt",
                format!("{}-{}", lang.to_lowercase(), country.to_uppercase()),
            ));
        }

        let response = self
            .client
            .get(BING_SEARCH_URL)
            .query(&query_params)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest(e, self.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest(e, self.timeout_ms))?;

        let hits = parse_bing_html(&html, params.max_results)?;
        debug!("Bing returned {} hits for '{}'", hits.len(), query);

        Ok(hits)
    }

    fn name(&self) -> &'static str {
        "bing"
    }
}

/// Map the common safe search levels onto Bing's `adlt` values
fn bing_safesearch(level: &str) -> &str {
    match level {
        "on" | "strict" => "strict",
        "moderate" => "moderate",
        _ => "off",
    }
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("{:?}", e)))
}

/// Parse a Bing results page
///
/// Organic results live in `<li class="b_algo">`; the title link is the
/// `h2 > a` and the snippet is the first caption paragraph.
fn parse_bing_html(html: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
    let document = Html::parse_document(html);
    let item_selector = selector("li.b_algo")?;
    let link_selector = selector("h2 a")?;
    let snippet_selectors = [selector(".b_caption p")?, selector("p")?];

    let mut hits = Vec::new();

    for item in document.select(&item_selector) {
        if hits.len() >= max_results {
            break;
        }

        let Some(link) = item.select(&link_selector).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let href = decode_bing_href(href);
        if !href.starts_with("http") {
            continue;
        }

        let title = element_text(&link);
        let body = snippet_selectors
            .iter()
            .find_map(|s| item.select(s).next())
            .map(|p| element_text(&p))
            .unwrap_or_default();

        hits.push(SearchHit {
            title,
            href,
            body,
            source: "bing".to_string(),
        });
    }

    Ok(hits)
}

/// Unwrap Bing's click-tracking links
///
/// Tracked links look like `https://www.bing.com/ck/a?...&u=a1<base64url>`.
/// Anything that does not decode is returned unchanged.
fn decode_bing_href(href: &str) -> String {
    let Ok(parsed) = Url::parse(href) else {
        return href.to_string();
    };

    let is_tracker = parsed
        .host_str()
        .map(|host| host.ends_with("bing.com"))
        .unwrap_or(false)
        && parsed.path() == "/ck/a";
    if !is_tracker {
        return href.to_string();
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == "u")
        .and_then(|(_, value)| {
            let payload = value.strip_prefix("a1")?.trim_end_matches('=').to_string();
            let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
            String::from_utf8(bytes).ok()
        })
        .unwrap_or_else(|| href.to_string())
}
