// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use sousuo_plugin::search::{
    format_search_results, sort_by_priority, FormatOptions, SearchConfig, SearchHit,
    SearchResult, DEFAULT_PRIORITY_DOMAINS,
};

fn hit(href: &str) -> SearchHit {
    SearchHit {
        title: href.to_string(),
        href: href.to_string(),
        body: String::new(),
        ..Default::default()
    }
}

fn result(rank: usize, title: &str, url: &str, description: &str) -> SearchResult {
    SearchResult {
        rank,
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        source: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_hits_move_first_in_stable_order() {
        let mut hits = vec![
            hit("https://a.example/1"),
            hit("https://www.zhihu.com/question/1"),
            hit("https://b.example/2"),
            hit("https://baike.baidu.com/item/rust"),
        ];
        sort_by_priority(&mut hits, &DEFAULT_PRIORITY_DOMAINS);

        let order: Vec<&str> = hits.iter().map(|h| h.href.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "https://www.zhihu.com/question/1",
                "https://baike.baidu.com/item/rust",
                "https://a.example/1",
                "https://b.example/2",
            ]
        );
    }

    #[test]
    fn test_default_config_uses_builtin_domains() {
        let config = SearchConfig::default();
        assert_eq!(config.priority_domains.len(), DEFAULT_PRIORITY_DOMAINS.len());
        assert!(config
            .priority_domains
            .iter()
            .any(|d| d == "store.steampowered.com"));
    }

    #[test]
    fn test_single_result_summary() {
        let text = format_search_results(
            &[result(1, "X", "http://a", "d")],
            &FormatOptions::default(),
        );
        assert!(text.contains("1. X"));
        assert!(text.contains("链接: http://a"));
        assert!(text.contains("共找到 1 条结果，显示前 1 条。"));
    }

    #[test]
    fn test_summary_caps_display_count() {
        let results: Vec<SearchResult> = (1..=8)
            .map(|i| result(i, &format!("T{}", i), &format!("http://{}", i), "d"))
            .collect();
        let text = format_search_results(&results, &FormatOptions::default());

        assert!(text.contains("5. T5"));
        assert!(!text.contains("6. T6"));
        assert!(text.contains("共找到 8 条结果，显示前 5 条。"));
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "字".repeat(250);
        let text = format_search_results(
            &[result(1, "X", "http://a", &long)],
            &FormatOptions::default(),
        );
        let expected = format!("{}...", "字".repeat(200));
        assert!(text.contains(&expected));
        assert!(!text.contains(&"字".repeat(201)));
    }
}
