// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page fetching pipeline
//!
//! ```text
//! URL → PageFetcher (GET) → HTML → extract_text → truncate → plain text
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = PageFetcher::new(FetchConfig::from_env())?;
//! let text = fetcher.fetch_text("https://example.com").await?;
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::FetchConfig;
pub use extractor::{extract_text, truncate_chars};
pub use fetcher::{FetchError, PageFetcher};
