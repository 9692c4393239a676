// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use sousuo_plugin::fetch::{FetchConfig, FetchError, PageFetcher};
use sousuo_plugin::tools::{SousuoFetchTool, Tool};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one HTTP response on a local port and return the page URL
async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let response = format!(
            "{}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/page", addr)
}

fn fast_config() -> FetchConfig {
    FetchConfig {
        timeout_seconds: 5.0,
        ..FetchConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_plain_text() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            "<html><script>x()</script><body><p>Hello</p><p>world</p></body></html>".to_string(),
        )
        .await;

        let fetcher = PageFetcher::new(fast_config()).unwrap();
        let text = fetcher.fetch_text(&url).await.unwrap();
        assert_eq!(text, "Hello world");
    }

    #[tokio::test]
    async fn test_long_page_truncated_to_limit() {
        let body = format!("<html><body><p>{}</p></body></html>", "字".repeat(25_000));
        let url = serve_once("HTTP/1.1 200 OK", body).await;

        let tool = SousuoFetchTool::from_config(fast_config());
        let text = tool.call(&url).await;
        assert_eq!(text.chars().count(), 20_000);
    }

    #[tokio::test]
    async fn test_error_status_reported() {
        let url = serve_once("HTTP/1.1 404 Not Found", "<p>missing</p>".to_string()).await;

        let fetcher = PageFetcher::new(fast_config()).unwrap();
        let err = fetcher.fetch_text(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));

        let url = serve_once("HTTP/1.1 500 Internal Server Error", String::new()).await;
        let tool = SousuoFetchTool::from_config(fast_config());
        assert!(tool.call(&url).await.starts_with("抓取失败："));
    }

    #[tokio::test]
    async fn test_page_without_text() {
        let url = serve_once("HTTP/1.1 200 OK", "<html><body></body></html>".to_string()).await;

        let tool = SousuoFetchTool::from_config(fast_config());
        assert_eq!(tool.call(&url).await, "未能从页面中提取到有效文本。");
    }

    #[tokio::test]
    async fn test_unreachable_host_becomes_message() {
        let tool = SousuoFetchTool::from_config(fast_config());
        let text = tool.call("http://127.0.0.1:9/").await;
        assert!(text.starts_with("抓取失败："));
    }
}
