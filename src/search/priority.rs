// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Domain-priority ordering of search hits

use super::types::SearchHit;

/// Hosts whose results are surfaced first
pub const DEFAULT_PRIORITY_DOMAINS: [&str; 9] = [
    "baike.baidu.com",
    "baike.sogou.com",
    "www.wikipedia.org",
    "www.zhihu.com",
    "mzh.moegirl.org.cn",
    "www.3dmgame.com",
    "news.163.com",
    "www.gamersky.com",
    "store.steampowered.com",
];

/// 0 when the URL contains any priority domain, 1 otherwise
///
/// Matching is substring containment on the whole URL, so a path or query
/// that mentions a domain counts as a match too.
pub fn priority_score<S: AsRef<str>>(url: &str, domains: &[S]) -> u8 {
    if domains.iter().any(|domain| url.contains(domain.as_ref())) {
        0
    } else {
        1
    }
}

/// Move priority-domain hits ahead of the rest, keeping relative order
pub fn sort_by_priority<S: AsRef<str>>(hits: &mut [SearchHit], domains: &[S]) {
    // sort_by_key is stable
    hits.sort_by_key(|hit| priority_score(&hit.href, domains));
}
