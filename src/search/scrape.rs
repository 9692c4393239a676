// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Helpers shared by the HTML-scraping backends

use reqwest::Client;
use scraper::ElementRef;
use std::time::Duration;

use super::types::SearchError;

/// Browser User-Agent sent to result pages; plain clients get blocked
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the HTTP client used by a backend
pub fn http_client(timeout: Duration) -> Result<Client, SearchError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(BROWSER_USER_AGENT)
        .build()
        .map_err(|e| SearchError::Http(format!("failed to create HTTP client: {}", e)))
}

/// Visible text of an element with whitespace collapsed
pub fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join("")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a `<country>-<lang>` region code, e.g. "cn-zh" -> ("cn", "zh")
///
/// "wt-wt" (no region) yields `None`.
pub fn split_region(region: &str) -> Option<(&str, &str)> {
    let (country, lang) = region.split_once('-')?;
    if country.is_empty() || lang.is_empty() || country.eq_ignore_ascii_case("wt") {
        return None;
    }
    Some((country, lang))
}
