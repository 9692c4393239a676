// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! User-facing messages returned across the tool boundary

use std::fmt::Display;

pub const NO_SEARCH_RESULTS: &str = "未找到相关搜索结果。";
pub const EMPTY_QUERY: &str = "搜索关键词不能为空。";
pub const EMPTY_URL: &str = "网页 URL 不能为空。";
pub const NO_PAGE_TEXT: &str = "未能从页面中提取到有效文本。";

pub fn search_backend_missing(reason: &str) -> String {
    format!("插件缺少可用的搜索后端（{}），请检查插件配置后重启。", reason)
}

pub fn http_client_missing(reason: &str) -> String {
    format!("插件缺少可用的 HTTP 客户端（{}），请检查插件配置后重启。", reason)
}

pub fn search_failed(error: impl Display) -> String {
    format!("搜索失败：{}", error)
}

pub fn fetch_failed(error: impl Display) -> String {
    format!("抓取失败：{}", error)
}

pub fn unknown_tool(name: &str) -> String {
    format!("未找到可用的工具：{}", name)
}

pub fn missing_argument(name: &str) -> String {
    format!("缺少参数：{}", name)
}
