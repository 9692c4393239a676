// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! `sousuo_fetch` tool

use async_trait::async_trait;
use tracing::{error, warn};

use super::messages;
use super::{Capability, Tool, FETCH_TOOL_NAME};
use crate::fetch::{FetchConfig, PageFetcher};

const DESCRIPTION: &str = "抓取网页文本内容（去标签纯文本）。\
返回提取的纯文本（前 20,000 字符内），失败时返回错误信息。";

/// Page text extraction tool
pub struct SousuoFetchTool {
    fetcher: Capability<PageFetcher>,
}

impl SousuoFetchTool {
    /// Wrap a probed fetcher
    pub fn new(fetcher: Capability<PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Build the HTTP client and the tool
    pub fn from_config(config: FetchConfig) -> Self {
        let fetcher = Capability::probe(PageFetcher::new(config));
        if let Capability::Missing { reason } = &fetcher {
            warn!("[{}] HTTP client unavailable: {}", FETCH_TOOL_NAME, reason);
        }
        Self::new(fetcher)
    }

    pub fn is_available(&self) -> bool {
        self.fetcher.is_available()
    }
}

#[async_trait]
impl Tool for SousuoFetchTool {
    fn name(&self) -> &str {
        FETCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn argument(&self) -> &str {
        "url"
    }

    fn argument_description(&self) -> &str {
        "需要抓取内容的网页 URL"
    }

    async fn call(&self, url: &str) -> String {
        let fetcher = match self.fetcher.get() {
            Ok(fetcher) => fetcher,
            Err(reason) => return messages::http_client_missing(reason),
        };

        if url.trim().is_empty() {
            return messages::EMPTY_URL.to_string();
        }

        match fetcher.fetch_text(url).await {
            Ok(text) if text.is_empty() => messages::NO_PAGE_TEXT.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!("[{}] fetch of {} failed: {}", FETCH_TOOL_NAME, url, e);
                messages::fetch_failed(e)
            }
        }
    }
}
