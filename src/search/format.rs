// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Plain-text rendering of ranked results for the chat model

use super::types::SearchResult;

/// Marker appended to cut descriptions
pub const ELLIPSIS: &str = "...";

/// Limits applied when rendering results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum entries rendered
    pub display_limit: usize,
    /// Descriptions longer than this many characters are cut
    pub description_max_chars: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            display_limit: 5,
            description_max_chars: 200,
        }
    }
}

/// Cut `text` to `max_chars` characters plus [`ELLIPSIS`] when longer
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Render results as a numbered summary followed by a count footer
pub fn format_search_results(results: &[SearchResult], options: &FormatOptions) -> String {
    if results.is_empty() {
        return "未找到相关结果。".to_string();
    }

    let shown = results.len().min(options.display_limit);
    let mut formatted = String::from("搜索结果摘要：\n\n");

    for result in &results[..shown] {
        let title = non_empty_or(result.title.trim(), "无标题");
        let url = result.url.trim();
        let description = truncate_description(
            non_empty_or(result.description.trim(), "无描述"),
            options.description_max_chars,
        );

        formatted.push_str(&format!("{}. {}\n", result.rank, title));
        formatted.push_str(&format!("   描述: {}\n", description));
        formatted.push_str(&format!("   链接: {}\n\n", url));
    }

    formatted.push_str(&format!(
        "共找到 {} 条结果，显示前 {} 条。",
        results.len(),
        shown
    ));
    formatted
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
