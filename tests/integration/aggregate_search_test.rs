// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::fixtures::*;
use aggsearch::application::reporting::Reporter;
use aggsearch::application::use_cases::aggregate_search::AggregateSearch;
use aggsearch::config::settings::Settings;
use aggsearch::domain::search::query::Query;
use aggsearch::infrastructure::search::create_aggregator;
use aggsearch::infrastructure::storage::ResultsFile;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

/// All four engines answer from one mock server; their paths do not overlap.
fn settings_for(server: &MockServer, results_dir: &TempDir) -> Settings {
    let mut settings = Settings::default();
    settings.search.results_dir = results_dir.path().display().to_string();
    settings.search.pause_secs = 0;
    for engine in [
        &mut settings.duckduckgo,
        &mut settings.metager,
        &mut settings.startpage,
        &mut settings.mojeek,
    ] {
        engine.base_url = server.uri();
    }
    settings
}

async fn mount_engines(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(html(duckduckgo_page(
            &["https://www.rust-lang.org/", "https://doc.rust-lang.org/book/"],
            None,
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/meta/meta.ger3"))
        .respond_with(ResponseTemplate::new(503))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(startpage_home("Tok123")))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sp/search"))
        .respond_with(html(startpage_page(&["https://crates.io/"])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html(mojeek_page(&[
            "https://www.rust-lang.org/".to_string(),
            "https://lib.rs/".to_string(),
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_aggregate_search_end_to_end() {
    let server = MockServer::start().await;
    mount_engines(&server).await;
    let results_dir = TempDir::new().unwrap();
    let settings = settings_for(&server, &results_dir);

    let query = Query::parse("rust   programming").unwrap();
    let file = ResultsFile::for_term(&settings.search.results_dir, &query.file_term())
        .await
        .unwrap();
    let aggregator = create_aggregator(&settings).unwrap();
    let mut use_case = AggregateSearch::new(
        aggregator,
        Reporter::new(Vec::new(), file.clone(), false),
        settings.search.pause(),
    );

    let outcome = use_case.run(&query).await.unwrap();

    // DDG 2 + MG 0 + SP 1 + Moj 2, with rust-lang.org found twice
    assert_eq!(outcome.combined, 5);
    let unique: Vec<_> = outcome
        .unique_results
        .iter()
        .map(|r| (r.url.as_str(), r.engine.as_str()))
        .collect();
    assert_eq!(
        unique,
        vec![
            ("https://www.rust-lang.org/", "Moj"),
            ("https://doc.rust-lang.org/book/", "DDG"),
            ("https://crates.io/", "SP"),
            ("https://lib.rs/", "Moj"),
        ]
    );

    assert!(file.path().ends_with("Results_rust+programming.txt"));
    let saved = tokio::fs::read_to_string(file.path()).await.unwrap();
    assert!(saved.starts_with("SEARCH TERM: rust+programming    TIME: "));
    assert!(saved.contains("User agent for each engine of this search:"));
    assert!(saved.contains("Keeping the first 0 results from MetaGer\n"));
    assert!(saved.contains("MetaGer returned no results: HTTP status 503\n"));
    assert!(saved.contains("Kept 5 total results.\n\nThere are 4 unique results.\n"));
    assert!(saved.contains("1 unique results retained from DuckDuckGo (DDG)\n"));
    assert!(saved.contains("0 unique results retained from MetaGer (MG)\n"));
    assert!(saved.contains("1 unique results retained from Startpage (SP)\n"));
    assert!(saved.contains("2 unique results retained from Mojeek (Moj)\n"));
    assert!(saved.contains("\nhttps://crates.io/\n(SP) Title of https://crates.io/\nSnippet for https://crates.io/\n"));
    assert!(saved.contains("END of 4 results"));

    let console = String::from_utf8(use_case.reporter().console().clone()).unwrap();
    assert!(console.contains("Results were written or appended to"));
    assert!(!console.contains('\x1b'));
}

#[tokio::test]
async fn test_disabled_engines_are_not_queried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html(mojeek_page(&["https://lib.rs/".to_string()])))
        .expect(1)
        .mount(&server)
        .await;
    let results_dir = TempDir::new().unwrap();
    let mut settings = settings_for(&server, &results_dir);
    settings.duckduckgo.enabled = false;
    settings.metager.enabled = false;
    settings.startpage.enabled = false;

    let query = Query::parse("lib").unwrap();
    let file = ResultsFile::for_term(&settings.search.results_dir, &query.file_term())
        .await
        .unwrap();
    let mut use_case = AggregateSearch::new(
        create_aggregator(&settings).unwrap(),
        Reporter::new(Vec::new(), file, false),
        settings.search.pause(),
    );

    let outcome = use_case.run(&query).await.unwrap();

    assert_eq!(outcome.engines.len(), 1);
    assert_eq!(outcome.engines[0].name, "Mojeek");
    assert_eq!(outcome.unique_results.len(), 1);
}
