// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::search::common::{check_status, EngineSession, PageCollector};
use crate::utils::text_processing::element_text;
use crate::utils::url_utils::unwrap_redirect;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

static RESULT: Lazy<Selector> = Lazy::new(|| Selector::parse("div.result").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.result__a").unwrap());
static SNIPPET: Lazy<Selector> = Lazy::new(|| Selector::parse(".result__snippet").unwrap());
static NAV_FORM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.nav-link form").unwrap());
static SUBMIT: Lazy<Selector> = Lazy::new(|| Selector::parse("input[type=submit]").unwrap());
static NAMED_INPUT: Lazy<Selector> = Lazy::new(|| Selector::parse("input[name]").unwrap());

/// Parsed DuckDuckGo result page.
#[derive(Debug, Default)]
pub struct DuckDuckGoPage {
    pub results: Vec<SearchResult>,
    /// Hidden fields of the "Next" form, posted to fetch the following page
    pub next_form: Option<Vec<(String, String)>>,
}

/// DuckDuckGo search via its JavaScript-free HTML endpoint.
///
/// Queries are POSTed to `/html/`; result links are wrapped in
/// `//duckduckgo.com/l/?uddg=...` redirects which are unwrapped here. Further
/// pages are requested by re-posting the hidden fields of the "Next" form.
pub struct DuckDuckGoSearchEngine {
    session: EngineSession,
}

impl DuckDuckGoSearchEngine {
    pub const NAME: &'static str = "DuckDuckGo";
    pub const TAG: &'static str = "DDG";

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

    /// Parse a DuckDuckGo HTML result page. Ads are skipped.
    pub fn parse_search_results(&self, html: &str) -> DuckDuckGoPage {
        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for element in document.select(&RESULT) {
            if element.value().classes().any(|c| c == "result--ad") {
                continue;
            }
            let Some(link) = element.select(&LINK).next() else {
                continue;
            };
            let title = element_text(&link);
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if title.is_empty() {
                continue;
            }

            let url = match unwrap_redirect(&self.session.base_url, href, "uddg") {
                Ok(url) => url,
                Err(e) => {
                    debug!("DuckDuckGo: skipping link {}: {}", href, e);
                    continue;
                }
            };

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

        let next_form = document
            .select(&NAV_FORM)
            .find(|form| {
                form.select(&SUBMIT)
                    .any(|input| input.value().attr("value") == Some("Next"))
            })
            .map(|form| {
                form.select(&NAMED_INPUT)
                    .filter(|input| input.value().attr("type") != Some("submit"))
                    .filter_map(|input| {
                        let name = input.value().attr("name")?;
                        let value = input.value().attr("value").unwrap_or_default();
                        Some((name.to_string(), value.to_string()))
                    })
                    .collect::<Vec<_>>()
            });

        DuckDuckGoPage { results, next_form }
    }
}

#[async_trait]
impl SearchEngine for DuckDuckGoSearchEngine {
    async fn search(&self, query: &str, pages: u32) -> Result<Vec<SearchResult>, SearchError> {
        let endpoint = self.session.endpoint("html/")?;
        let mut form = vec![
            ("q".to_string(), query.to_string()),
            ("b".to_string(), String::new()),
            ("kl".to_string(), "us-en".to_string()),
        ];
        let mut collector = PageCollector::new(Self::NAME);

        for page in 1..=pages.max(1) {
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

            let parsed = self.parse_search_results(&response.body);
            let added = collector.add_page(parsed.results, &response.body)?;
            match parsed.next_form {
                Some(next) if added > 0 && page < pages => form = next,
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
