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
use tracing::{debug, warn};

static RESULT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.w-gl__result, div.result").unwrap());
static LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.w-gl__result-url[href], a.result-link[href]").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.w-gl__description, p.description").unwrap());
static SC_TOKEN: Lazy<Selector> = Lazy::new(|| Selector::parse("input[name=sc]").unwrap());

/// Startpage search engine.
///
/// The home page carries an `sc` session token that Startpage expects on the
/// search form; it is fetched once per search and included when present.
pub struct StartpageSearchEngine {
    session: EngineSession,
}

impl StartpageSearchEngine {
    pub const NAME: &'static str = "Startpage";
    pub const TAG: &'static str = "SP";

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

    /// Extract the `sc` form token from the Startpage home page.
    pub fn parse_sc_token(html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        document
            .select(&SC_TOKEN)
            .next()
            .and_then(|e| e.value().attr("value"))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn parse_search_results(&self, html: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for element in document.select(&RESULT) {
            let Some(link) = element.select(&LINK).next() else {
                continue;
            };
            let Some(url) = link
                .value()
                .attr("href")
                .and_then(|href| resolve_url(&self.session.base_url, href).ok())
            else {
                continue;
            };

            let title = element
                .select(&TITLE)
                .next()
                .map(|e| element_text(&e))
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| element_text(&link));
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

        results
    }

    async fn fetch_sc_token(&self) -> Option<String> {
        match self
            .session
            .http
            .get(self.session.base_url.as_str(), NO_PARAMS)
            .await
            .and_then(|r| check_status(Self::NAME, r))
        {
            Ok(response) => Self::parse_sc_token(&response.body),
            Err(e) => {
                warn!("Startpage home page unavailable, searching without token: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl SearchEngine for StartpageSearchEngine {
    async fn search(&self, query: &str, pages: u32) -> Result<Vec<SearchResult>, SearchError> {
        let endpoint = self.session.endpoint("sp/search")?;
        let sc = self.fetch_sc_token().await;
        debug!("Startpage sc token present: {}", sc.is_some());

        let mut collector = PageCollector::new(Self::NAME);

        for page in 1..=pages.max(1) {
            let mut form = vec![
                ("query", query.to_string()),
                ("cat", "web".to_string()),
                ("page", page.to_string()),
            ];
            if let Some(sc) = &sc {
                form.push(("sc", sc.clone()));
            }

            let response = match self
                .session
                .http
                .post(endpoint.as_str(), &form)
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
            if collector.add_page(results, &response.body)? == 0 {
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
