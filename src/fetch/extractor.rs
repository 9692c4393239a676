// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML to plain text
//!
//! Regex scrubbing, not parsing: script and style blocks go first, then every
//! remaining tag, then whitespace is collapsed.

use regex::Regex;
use std::sync::OnceLock;

fn script_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"))
}

fn style_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex"))
}

fn any_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Extract visible text from HTML
///
/// Tags become a single space so adjacent block elements do not glue their
/// words together.
pub fn extract_text(html: &str) -> String {
    let html = script_block().replace_all(html, "");
    let html = style_block().replace_all(&html, "");
    let text = any_tag().replace_all(&html, " ");
    whitespace_run().replace_all(&text, " ").trim().to_string()
}

/// Truncate to at most `max_chars` characters, never splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
