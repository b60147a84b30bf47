// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::search::common::{check_status, EngineSession, PageCollector};
use crate::utils::text_processing::element_text;
use crate::utils::url_utils::resolve_url;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;

const RESULTS_PER_PAGE: u32 = 10;

static RESULT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ul.results-standard > li").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("h2 a[href], a.ob[href]").unwrap());
static SNIPPET: Lazy<Selector> = Lazy::new(|| Selector::parse("p.s").unwrap());

/// Mojeek 搜索引擎
///
/// 每页 10 条结果，翻页通过 `s` 参数指定起始序号（第2页为 11）
pub struct MojeekSearchEngine {
    session: EngineSession,
}

impl MojeekSearchEngine {
    pub const NAME: &'static str = "Mojeek";
    pub const TAG: &'static str = "Moj";

    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        proxy: Option<&str>,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            session: EngineSession::new(base_url, user_agent, timeout, proxy)?,
        })
    }

    /// 构建指定页码的查询参数，页码从1开始
    pub fn build_params(query: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.to_string())];
        if page > 1 {
            params.push(("s", (1 + RESULTS_PER_PAGE * (page - 1)).to_string()));
        }
        params
    }

    /// 解析Mojeek HTML结果（用于单元测试）
    pub fn parse_search_results(&self, html: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for element in document.select(&RESULT) {
            let title = element
                .select(&TITLE)
                .next()
                .map(|e| element_text(&e))
                .unwrap_or_default();
            let url = element
                .select(&LINK)
                .next()
                .and_then(|e| e.value().attr("href"))
                .and_then(|href| resolve_url(&self.session.base_url, href).ok());

            if let Some(url) = url.filter(|_| !title.is_empty()) {
                let description = element
                    .select(&SNIPPET)
                    .next()
                    .map(|e| element_text(&e))
                    .filter(|d| !d.is_empty());
                results.push(SearchResult::new(
                    url.to_string(),
                    title,
                    description,
                    Self::TAG.to_string(),
                ));
            }
        }

        results
    }
}

#[async_trait]
impl SearchEngine for MojeekSearchEngine {
    async fn search(&self, query: &str, pages: u32) -> Result<Vec<SearchResult>, SearchError> {
        let endpoint = self.session.endpoint("search")?;
        let mut collector = PageCollector::new(Self::NAME);

        for page in 1..=pages.max(1) {
            let params = Self::build_params(query, page);
            let response = match self
                .session
                .http
                .get(endpoint.as_str(), &params)
                .await
                .and_then(|r| check_status(Self::NAME, r))
            {
                Ok(response) => response,
                Err(e) => {
                    collector.give_up(e)?;
                    break;
                }
            };

            let results = self.parse_search_results(&response.body);
            let full_page = results.len() >= RESULTS_PER_PAGE as usize;
            if collector.add_page(results, &response.body)? == 0 || !full_page {
                break;
            }
        }

        Ok(collector.into_results())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn user_agent(&self) -> &str {
        &self.session.user_agent
    }
}
