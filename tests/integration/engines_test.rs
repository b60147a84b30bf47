// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::fixtures::*;
use aggsearch::domain::search::engine::{SearchEngine, SearchError};
use aggsearch::infrastructure::search::duckduckgo::DuckDuckGoSearchEngine;
use aggsearch::infrastructure::search::metager::MetaGerSearchEngine;
use aggsearch::infrastructure::search::mojeek::MojeekSearchEngine;
use aggsearch::infrastructure::search::startpage::StartpageSearchEngine;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AGENT: &str = "aggsearch-test/1.0";

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

fn urls(results: &[aggsearch::domain::models::search_result::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.url.as_str()).collect()
}

#[tokio::test]
async fn test_duckduckgo_follows_next_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/html/"))
        .and(body_string_contains("s=30"))
        .respond_with(html(duckduckgo_page(&["https://c.example/"], None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/html/"))
        .and(header("user-agent", AGENT))
        .and(body_string_contains("kl=us-en"))
        .respond_with(html(duckduckgo_page(
            &["https://a.example/", "https://b.example/"],
            Some(30),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let engine =
        DuckDuckGoSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust", 2).await.unwrap();

    assert_eq!(
        urls(&results),
        vec!["https://a.example/", "https://b.example/", "https://c.example/"]
    );
    assert_eq!(results[0].title, "Title of https://a.example/");
    assert_eq!(
        results[0].description.as_deref(),
        Some("Snippet for https://a.example/")
    );
    assert!(results.iter().all(|r| r.engine == "DDG"));
}

#[tokio::test]
async fn test_duckduckgo_captcha_page_is_blocked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(html(CAPTCHA_PAGE.to_string()))
        .mount(&server)
        .await;

    let engine =
        DuckDuckGoSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let result = engine.search("rust", 1).await;

    assert!(matches!(result, Err(SearchError::Blocked(_))));
}

#[tokio::test]
async fn test_metager_follows_next_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meta/meta.ger3"))
        .and(query_param("next", "2"))
        .respond_with(html(metager_page(&["https://c.example/"], None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/meta/meta.ger3"))
        .and(query_param("eingabe", "rust lang"))
        .and(query_param("focus", "web"))
        .respond_with(html(metager_page(
            &["https://a.example/", "https://b.example/"],
            Some("/meta/meta.ger3?eingabe=rust&amp;next=2"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let engine =
        MetaGerSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust lang", 2).await.unwrap();

    assert_eq!(
        urls(&results),
        vec!["https://a.example/", "https://b.example/", "https://c.example/"]
    );
    assert!(results.iter().all(|r| r.engine == "MG"));
}

#[tokio::test]
async fn test_metager_single_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meta/meta.ger3"))
        .respond_with(html(metager_page(
            &["https://a.example/"],
            Some("/meta/meta.ger3?next=2"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let engine =
        MetaGerSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust", 1).await.unwrap();

    assert_eq!(urls(&results), vec!["https://a.example/"]);
}

#[tokio::test]
async fn test_startpage_sends_session_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(startpage_home("Tok123")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sp/search"))
        .and(body_string_contains("page=2"))
        .and(body_string_contains("sc=Tok123"))
        .respond_with(html(startpage_page(&["https://c.example/"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sp/search"))
        .and(body_string_contains("sc=Tok123"))
        .and(body_string_contains("cat=web"))
        .respond_with(html(startpage_page(&[
            "https://a.example/",
            "https://b.example/",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let engine =
        StartpageSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust", 2).await.unwrap();

    assert_eq!(
        urls(&results),
        vec!["https://a.example/", "https://b.example/", "https://c.example/"]
    );
    assert_eq!(results[2].title, "Title of https://c.example/");
    assert!(results.iter().all(|r| r.engine == "SP"));
}

#[tokio::test]
async fn test_startpage_searches_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sp/search"))
        .respond_with(html(startpage_page(&["https://a.example/"])))
        .mount(&server)
        .await;

    let engine =
        StartpageSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust", 2).await.unwrap();

    // the repeated second page adds nothing new
    assert_eq!(urls(&results), vec!["https://a.example/"]);
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://{}{}.example/", prefix, i))
        .collect()
}

#[tokio::test]
async fn test_mojeek_requests_second_page_by_offset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("s", "11"))
        .respond_with(html(mojeek_page(&numbered("second", 3))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust"))
        .respond_with(html(mojeek_page(&numbered("first", 10))))
        .expect(1)
        .mount(&server)
        .await;

    let engine =
        MojeekSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust", 2).await.unwrap();

    assert_eq!(results.len(), 13);
    assert_eq!(results[0].url, "https://first1.example/");
    assert_eq!(results[12].url, "https://second3.example/");
    assert!(results.iter().all(|r| r.engine == "Moj"));
}

#[tokio::test]
async fn test_mojeek_stops_after_short_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html(mojeek_page(&numbered("only", 4))))
        .expect(1)
        .mount(&server)
        .await;

    let engine =
        MojeekSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust", 2).await.unwrap();

    assert_eq!(results.len(), 4);
}

#[tokio::test]
async fn test_mojeek_keeps_first_page_when_second_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("s", "11"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html(mojeek_page(&numbered("first", 10))))
        .mount(&server)
        .await;

    let engine =
        MojeekSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    let results = engine.search("rust", 2).await.unwrap();

    assert_eq!(results.len(), 10);
}

#[tokio::test]
async fn test_rate_limited_first_page_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/meta/meta.ger3"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mojeek =
        MojeekSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    assert!(matches!(
        mojeek.search("rust", 2).await,
        Err(SearchError::Blocked(_))
    ));

    let metager =
        MetaGerSearchEngine::new(&server.uri(), AGENT, Duration::from_secs(5), None).unwrap();
    assert_eq!(metager.search("rust", 1).await, Err(SearchError::Http(502)));
}
