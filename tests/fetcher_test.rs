// ABOUTME: Integration tests for recipe fetcher URL building and response mapping
// ABOUTME: Covers query encoding, page windows, HTTP errors, decode failures, and empty results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(missing_docs)]

mod common;

use common::{empty_body, hits_body, ok, response, test_config, test_fetcher, MockTransport};
use recipe_finder::errors::{ErrorCode, FetchError};
use recipe_finder::external::{FetchOutcome, RecipeFetcher};
use recipe_finder::models::{Category, Diet, SearchQuery};
use recipe_finder::pagination::PageWindow;

#[tokio::test]
async fn test_default_query_url() {
    let transport = MockTransport::always(ok(&hits_body(&["Soup"])));
    let fetcher = test_fetcher(transport.clone());

    fetcher.fetch_recipes(&SearchQuery::default()).await.unwrap();

    assert_eq!(
        transport.last_url().unwrap(),
        "https://api.edamam.com/search?q=vegetarian+all+all&app_id=test-id&app_key=test-key&from=0&to=20"
    );
}

#[tokio::test]
async fn test_query_terms_are_encoded() {
    let transport = MockTransport::always(ok(&hits_body(&["Soup"])));
    let fetcher = test_fetcher(transport.clone());
    let query = SearchQuery::new("mac & cheese", Diet::GlutenFree, Category::Dinner).at_page(2);

    fetcher.fetch_recipes(&query).await.unwrap();

    let url = transport.last_url().unwrap();
    assert!(url.contains("q=mac%20%26%20cheese+gluten-free+dinner&"), "{url}");
    assert!(url.ends_with("&from=40&to=60"), "{url}");
}

#[test]
fn test_base_url_with_existing_query_string() {
    let config = test_config().with_base_url("https://proxy.example/search?type=public");
    let fetcher = RecipeFetcher::new(config, MockTransport::always(ok(&empty_body())));
    let window = PageWindow::for_page(0).unwrap();

    let url = fetcher.build_url(&SearchQuery::default(), window);

    assert!(url.starts_with("https://proxy.example/search?type=public&q=vegetarian+all+all&"));
}

#[test]
fn test_redacted_url_hides_key() {
    let fetcher = test_fetcher(MockTransport::always(ok(&empty_body())));
    let window = PageWindow::for_page(1).unwrap();

    let url = fetcher.redacted_url(&SearchQuery::default(), window);

    assert!(url.contains("app_key=***"));
    assert!(!url.contains("test-key"));
}

#[tokio::test]
async fn test_recipes_returned_in_response_order() {
    let transport = MockTransport::always(ok(&hits_body(&["Soup", "Stew", "Salad"])));
    let fetcher = test_fetcher(transport);

    let recipes = fetcher.fetch_recipes(&SearchQuery::default()).await.unwrap();

    let labels: Vec<_> = recipes.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Soup", "Stew", "Salad"]);
    assert_eq!(recipes[0].ingredient_lines, ["1 cup water"]);
}

#[tokio::test]
async fn test_server_error_message() {
    let transport = MockTransport::always(response(500, "Internal Server Error", "server error"));
    let fetcher = test_fetcher(transport.clone());

    let outcome = fetcher.fetch(&SearchQuery::default()).await;

    assert_eq!(
        outcome,
        FetchOutcome::Failure("API Error: Internal Server Error (500) - server error".to_owned())
    );
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_invalid_page_makes_no_request() {
    let transport = MockTransport::always(ok(&hits_body(&["Soup"])));
    let fetcher = test_fetcher(transport.clone());

    let outcome = fetcher.fetch(&SearchQuery::default().at_page(-1)).await;

    assert_eq!(
        outcome,
        FetchOutcome::Failure("'from' or 'to' is invalid".to_owned())
    );
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_empty_hits_is_empty_outcome() {
    let transport = MockTransport::always(ok(&empty_body()));
    let fetcher = test_fetcher(transport);

    assert_eq!(
        fetcher.fetch(&SearchQuery::default()).await,
        FetchOutcome::Empty
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let transport = MockTransport::always(ok("<html>not json</html>"));
    let fetcher = test_fetcher(transport);

    let err = fetcher
        .fetch_recipes(&SearchQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
    assert!(err.to_string().starts_with("Failed to parse recipe response"));
}

#[test]
fn test_from_config_rejects_non_http_base_url() {
    let err = RecipeFetcher::from_config(test_config().with_base_url("ftp://example.com"))
        .err()
        .unwrap();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}
