// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::http_client::NO_PARAMS;
use crate::infrastructure::search::common::{check_status, EngineSession, PageCollector};
use crate::utils::text_processing::element_text;
use crate::utils::url_utils::resolve_url;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

static RESULT: Lazy<Selector> = Lazy::new(|| Selector::parse("div.result").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h2.result-title").unwrap());
static TITLE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2.result-title a[href], a.result-link[href]").unwrap());
static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.result-description").unwrap());
static NEXT: Lazy<Selector> = Lazy::new(|| Selector::parse("a#next-search-link[href]").unwrap());

/// MetaGer 结果页解析结果
#[derive(Debug, Default)]
pub struct MetaGerPage {
    pub results: Vec<SearchResult>,
    pub next_url: Option<Url>,
}

/// MetaGer 搜索引擎
///
/// 通过 `/meta/meta.ger3?eingabe=...` 获取网页结果，下一页地址取自 `#next-search-link`
pub struct MetaGerSearchEngine {
    session: EngineSession,
}

impl MetaGerSearchEngine {
    pub const NAME: &'static str = "MetaGer";
    pub const TAG: &'static str = "MG";

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

    /// 解析MetaGer HTML结果（用于单元测试）
    pub fn parse_search_results(&self, html: &str, page_url: &Url) -> MetaGerPage {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for element in document.select(&RESULT) {
            let title = element
                .select(&TITLE)
                .next()
                .map(|e| element_text(&e))
                .unwrap_or_default();
            let url = element
                .select(&TITLE_LINK)
                .next()
                .and_then(|e| e.value().attr("href"))
                .and_then(|href| resolve_url(page_url, href).ok());

            let Some(url) = url else {
                continue;
            };
            if title.is_empty() {
                continue;
            }

            let description = element
                .select(&DESCRIPTION)
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

        let next_url = document
            .select(&NEXT)
            .next()
            .and_then(|e| e.value().attr("href"))
            .and_then(|href| resolve_url(page_url, href).ok());

        MetaGerPage { results, next_url }
    }
}

#[async_trait]
impl SearchEngine for MetaGerSearchEngine {
    async fn search(&self, query: &str, pages: u32) -> Result<Vec<SearchResult>, SearchError> {
        let endpoint = self.session.endpoint("meta/meta.ger3")?;
        let first_page = [("eingabe", query), ("focus", "web")];
        let mut collector = PageCollector::new(Self::NAME);
        let mut next_url: Option<Url> = None;

        for page in 1..=pages.max(1) {
            let request = match &next_url {
                Some(url) => self.session.http.get(url.as_str(), NO_PARAMS).await,
                None => self.session.http.get(endpoint.as_str(), &first_page).await,
            };
            let response = match request.and_then(|r| check_status(Self::NAME, r)) {
                Ok(response) => response,
                Err(e) => {
                    collector.give_up(e)?;
                    break;
                }
            };

            let page_url = Url::parse(&response.url).unwrap_or_else(|_| endpoint.clone());
            let parsed = self.parse_search_results(&response.body, &page_url);
            let added = collector.add_page(parsed.results, &response.body)?;
            match parsed.next_url {
                Some(url) if added > 0 && page < pages => next_url = Some(url),
                _ => break,
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
