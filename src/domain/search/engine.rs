// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Http(u16),
    #[error("Blocked by engine: {0}")]
    Blocked(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid proxy format: {0}")]
    InvalidProxy(String),
    #[error("Invalid engine address: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Submit a query and collect results from the first `pages` result pages.
    async fn search(&self, query: &str, pages: u32) -> Result<Vec<SearchResult>, SearchError>;

    /// Display name, e.g. `DuckDuckGo`
    fn name(&self) -> &'static str;

    /// Short tag prepended to result titles, e.g. `DDG`
    fn tag(&self) -> &'static str;

    /// User agent string this engine sends for the current run
    fn user_agent(&self) -> &str;
}
