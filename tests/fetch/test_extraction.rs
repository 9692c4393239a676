// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use sousuo_plugin::fetch::{extract_text, truncate_chars};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_and_style_removed_before_tags() {
        let html = r#"<html><head><STYLE>p { color: red }</STYLE>
            <script type="text/javascript">var hidden = "<b>secret</b>";</script></head>
            <body><h1>Title</h1><p>First   paragraph</p>
            <p>Second
            paragraph</p></body></html>"#;

        let text = extract_text(html);
        assert_eq!(text, "Title First paragraph Second paragraph");
        assert!(!text.contains("secret"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_markup_only_page_is_empty() {
        assert_eq!(extract_text("<div><span> </span></div>"), "");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "网页内容".repeat(10);
        assert_eq!(truncate_chars(&text, 5), "网页内容网");
        assert_eq!(truncate_chars("short", 20_000), "short");
    }
}
