// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 各搜索引擎共用的会话与翻页结果收集

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::SearchError;
use crate::infrastructure::http_client::{HttpClient, HttpResponse};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Elements of anti-bot interstitials served instead of a result page.
///
/// Page text is not inspected; it echoes the search term.
static BLOCK_PAGE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "#captcha, .captcha, form[action*=captcha], \
         [id*=anomaly-modal], [class*=anomaly-modal], \
         .g-recaptcha, .h-captcha, iframe[src*=recaptcha], iframe[src*=hcaptcha]",
    )
    .unwrap()
});

/// 搜索引擎会话：HTTP会话、基础地址以及本次运行使用的 User-Agent
pub struct EngineSession {
    pub http: HttpClient,
    pub base_url: Url,
    pub user_agent: String,
}

impl EngineSession {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        proxy: Option<&str>,
    ) -> Result<Self, SearchError> {
        let base_url =
            Url::parse(base_url).map_err(|_| SearchError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Self {
            http: HttpClient::new(user_agent, timeout, proxy)?,
            base_url,
            user_agent: user_agent.to_string(),
        })
    }

    /// Absolute endpoint under the engine base, e.g. `html/` or `sp/search`.
    pub fn endpoint(&self, path: &str) -> Result<Url, SearchError> {
        self.base_url
            .join(path)
            .map_err(|_| SearchError::InvalidBaseUrl(format!("{}{}", self.base_url, path)))
    }
}

/// Maps rate limiting and other error statuses to errors.
pub fn check_status(engine: &str, response: HttpResponse) -> Result<HttpResponse, SearchError> {
    match response.status {
        403 | 429 => Err(SearchError::Blocked(format!(
            "{} answered HTTP {}",
            engine, response.status
        ))),
        _ if response.is_success() => Ok(response),
        status => Err(SearchError::Http(status)),
    }
}

pub fn is_block_page(body: &str) -> bool {
    Html::parse_document(body).select(&BLOCK_PAGE).next().is_some()
}

/// 翻页结果收集器
///
/// 跳过同一引擎在前几页已返回过的URL；首页失败时返回错误，
/// 之后的页面失败时保留已收集的结果
pub struct PageCollector {
    engine: &'static str,
    seen: HashSet<String>,
    results: Vec<SearchResult>,
}

impl PageCollector {
    pub fn new(engine: &'static str) -> Self {
        Self {
            engine,
            seen: HashSet::new(),
            results: Vec::new(),
        }
    }

    /// Adds one parsed page and returns how many new results it contributed.
    pub fn add_page(&mut self, page: Vec<SearchResult>, body: &str) -> Result<usize, SearchError> {
        if page.is_empty() && is_block_page(body) {
            return self
                .give_up(SearchError::Blocked(format!(
                    "{} served a captcha page",
                    self.engine
                )))
                .map(|_| 0);
        }

        let before = self.results.len();
        for result in page {
            if self.seen.insert(result.url.clone()) {
                self.results.push(result);
            }
        }
        let added = self.results.len() - before;
        debug!("{}: {} new results on page", self.engine, added);
        Ok(added)
    }

    /// Ends pagination after `error`: keeps earlier pages if there are any.
    pub fn give_up(&self, error: SearchError) -> Result<(), SearchError> {
        if self.results.is_empty() {
            return Err(error);
        }
        warn!(
            "{}: stopping after {} results: {}",
            self.engine,
            self.results.len(),
            error
        );
        Ok(())
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}
