// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use async_trait::async_trait;
use serde_json::json;
use sousuo_plugin::search::{
    SearchBackend, SearchConfig, SearchError, SearchHit, SearchParams, SearchService,
};
use sousuo_plugin::tools::{Capability, SousuoSearchTool, Tool, ToolRegistry};
use std::sync::Arc;

/// Backend answering every query the same way
struct FixedBackend {
    hits: Vec<SearchHit>,
    fail: bool,
}

#[async_trait]
impl SearchBackend for FixedBackend {
    async fn text(&self, _query: &str, _params: &SearchParams) -> Result<Vec<SearchHit>, SearchError> {
        if self.fail {
            return Err(SearchError::Timeout { timeout_ms: 10_000 });
        }
        Ok(self.hits.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn tool(hits: Vec<SearchHit>, fail: bool) -> SousuoSearchTool {
    let config = SearchConfig {
        retry_delay_seconds: 0.0,
        ..SearchConfig::default()
    };
    let service = SearchService::with_backend(Arc::new(FixedBackend { hits, fail }), config);
    SousuoSearchTool::new(Capability::Available(service))
}

fn hit(title: &str, href: &str, body: &str) -> SearchHit {
    SearchHit {
        title: title.to_string(),
        href: href.to_string(),
        body: body.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_lists_priority_domains_first() {
        let tool = tool(
            vec![
                hit("Blog", "https://blog.example/rust", "A blog post"),
                hit("Rust 百科", "https://baike.baidu.com/item/Rust", "百科词条"),
            ],
            false,
        );

        let text = tool.call("Rust").await;
        assert!(text.starts_with("搜索结果摘要："));
        let baike = text.find("1. Rust 百科").unwrap();
        let blog = text.find("2. Blog").unwrap();
        assert!(baike < blog);
        assert!(text.contains("   描述: 百科词条"));
        assert!(text.contains("共找到 2 条结果，显示前 2 条。"));
    }

    #[tokio::test]
    async fn test_no_results_message() {
        let tool = tool(vec![], false);
        assert_eq!(tool.call("nothing at all").await, "未找到相关搜索结果。");
    }

    #[tokio::test]
    async fn test_backend_failure_message() {
        let tool = tool(vec![], true);
        let text = tool.call("Rust").await;
        assert!(text.starts_with("搜索失败："));
    }

    #[tokio::test]
    async fn test_empty_query_message() {
        let tool = tool(vec![hit("A", "https://a.example", "a")], false);
        assert_eq!(tool.call("  ").await, "搜索关键词不能为空。");
    }

    #[tokio::test]
    async fn test_missing_backend_message() {
        let tool = SousuoSearchTool::new(Capability::Missing {
            reason: "unknown backend".to_string(),
        });
        assert_eq!(
            tool.call("Rust").await,
            "插件缺少可用的搜索后端（unknown backend），请检查插件配置后重启。"
        );
    }

    #[tokio::test]
    async fn test_invoked_through_registry() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(tool(
            vec![hit("X", "http://a", "d")],
            false,
        )));
        registry.activate("sousuo_search").unwrap();

        let text = registry
            .invoke("sousuo_search", &json!({"query": "X"}))
            .await;
        assert!(text.contains("1. X"));
        assert!(text.contains("链接: http://a"));
        assert!(text.contains("共找到 1 条结果，显示前 1 条。"));
    }
}
