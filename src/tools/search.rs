// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! `sousuo_search` tool

use async_trait::async_trait;
use tracing::{error, warn};

use super::messages;
use super::{Capability, Tool, SEARCH_TOOL_NAME};
use crate::search::{SearchConfig, SearchService};

const DESCRIPTION: &str = "这是一个“联网搜索”的函数工具（工具名：sousuo_search）。\
当需要获取互联网上的实时/最新信息时，你必须调用本工具进行搜索。\
返回要点摘要与引用来源。";

/// Web search tool
pub struct SousuoSearchTool {
    service: Capability<SearchService>,
}

impl SousuoSearchTool {
    /// Wrap a probed search service
    pub fn new(service: Capability<SearchService>) -> Self {
        Self { service }
    }

    /// Probe the configured backend and build the tool
    ///
    /// A failed probe still yields a tool; calling it reports the problem.
    pub fn from_config(config: SearchConfig) -> Self {
        let service = Capability::probe(SearchService::new(config));
        if let Capability::Missing { reason } = &service {
            warn!("[{}] search backend unavailable: {}", SEARCH_TOOL_NAME, reason);
        }
        Self::new(service)
    }

    pub fn is_available(&self) -> bool {
        self.service.is_available()
    }
}

#[async_trait]
impl Tool for SousuoSearchTool {
    fn name(&self) -> &str {
        SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn argument(&self) -> &str {
        "query"
    }

    fn argument_description(&self) -> &str {
        "简要说明用户希望检索的查询内容"
    }

    async fn call(&self, query: &str) -> String {
        let service = match self.service.get() {
            Ok(service) => service,
            Err(reason) => return messages::search_backend_missing(reason),
        };

        if query.trim().is_empty() {
            return messages::EMPTY_QUERY.to_string();
        }

        match service.search(query).await {
            Ok(results) if results.is_empty() => messages::NO_SEARCH_RESULTS.to_string(),
            Ok(results) => service.format(&results),
            Err(e) => {
                error!("[{}] search failed: {}", SEARCH_TOOL_NAME, e);
                messages::search_failed(e)
            }
        }
    }
}
