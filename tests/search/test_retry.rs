// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use async_trait::async_trait;
use sousuo_plugin::search::{
    SearchBackend, SearchConfig, SearchError, SearchHit, SearchParams, SearchService,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Backend that replays a fixed script of answers
struct ScriptedBackend {
    script: Mutex<VecDeque<Result<Vec<SearchHit>, SearchError>>>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    fn new(script: Vec<Result<Vec<SearchHit>, SearchError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchBackend for ScriptedBackend {
    async fn text(&self, _query: &str, _params: &SearchParams) -> Result<Vec<SearchHit>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

fn hit(title: &str, href: &str) -> SearchHit {
    SearchHit {
        title: title.to_string(),
        href: href.to_string(),
        body: format!("{} body", title),
        ..Default::default()
    }
}

fn service(backend: Arc<ScriptedBackend>) -> SearchService {
    SearchService::with_backend(backend, SearchConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_empty_empty_then_hit_waits_between_attempts() {
        let backend = ScriptedBackend::new(vec![
            Ok(vec![]),
            Ok(vec![]),
            Ok(vec![hit("Found", "https://example.com/found")]),
        ]);
        let service = service(backend.clone());

        let start = Instant::now();
        let results = service.search("rust").await.unwrap();

        assert_eq!(backend.calls(), 3);
        assert!(start.elapsed() >= Duration::from_secs(12));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[0].title, "Found");
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_makes_one_call() {
        let backend = ScriptedBackend::new(vec![Ok(vec![hit("A", "https://a.example")])]);
        let service = service(backend.clone());

        let start = Instant::now();
        let results = service.search("rust").await.unwrap();

        assert_eq!(backend.calls(), 1);
        assert!(start.elapsed() < Duration::from_secs(6));
        assert_eq!(results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_empty_returns_no_results() {
        let backend = ScriptedBackend::new(vec![]);
        let service = service(backend.clone());

        let start = Instant::now();
        let results = service.search("nothing").await.unwrap();

        assert!(results.is_empty());
        assert_eq!(backend.calls(), 3);
        // No sleep after the final attempt
        assert!(start.elapsed() >= Duration::from_secs(12));
        assert!(start.elapsed() < Duration::from_secs(18));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_then_hit_recovers() {
        let backend = ScriptedBackend::new(vec![
            Err(SearchError::Status { status: 503 }),
            Ok(vec![hit("Back", "https://b.example")]),
        ]);
        let service = service(backend.clone());

        let results = service.search("rust").await.unwrap();
        assert_eq!(backend.calls(), 2);
        assert_eq!(results[0].title, "Back");
    }

    #[tokio::test(start_paused = true)]
    async fn test_final_error_is_reported() {
        let backend = ScriptedBackend::new(vec![
            Ok(vec![]),
            Ok(vec![]),
            Err(SearchError::Http("connection reset".to_string())),
        ]);
        let service = service(backend.clone());

        let err = service.search("rust").await.unwrap_err();
        assert!(matches!(err, SearchError::RetriesExhausted { attempts: 3, .. }));
        assert_eq!(backend.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_attempts_and_delay() {
        let backend = ScriptedBackend::new(vec![]);
        let config = SearchConfig {
            retry_attempts: 2,
            retry_delay_seconds: 1.5,
            ..SearchConfig::default()
        };
        let service = SearchService::with_backend(backend.clone(), config);

        let start = Instant::now();
        assert!(service.search("rust").await.unwrap().is_empty());
        assert_eq!(backend.calls(), 2);
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_blank_query_never_reaches_backend() {
        let backend = ScriptedBackend::new(vec![]);
        let service = service(backend.clone());

        let err = service.search("   ").await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery { .. }));
        assert_eq!(backend.calls(), 0);
    }
}
