//! Query executor over real HTTP

use crate::common::{MockBuyersApi, TOKEN_DUNORTE, config_for, page_body, record};
use cnpj_validator_rs::core::query::{FetchOutcome, TOKEN_HEADER};
use cnpj_validator_rs::{DiagnosticKind, QueryExecutor, QueryRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn fetch_dunorte(api: &MockBuyersApi, identifier: &str) -> FetchOutcome {
    let config = config_for(&api.uri());
    let profile = config.registry().resolve("dunorte").unwrap();
    let executor = QueryExecutor::from_settings(&config.query).unwrap();
    executor
        .fetch(&QueryRequest::new(identifier, "1", "dunorte"), &profile)
        .await
}

#[tokio::test]
async fn test_sends_token_header_and_query_body() {
    let api = MockBuyersApi::start().await;
    Mock::given(method("POST"))
        .and(path("/dunorte/buyers/query"))
        .and(header(TOKEN_HEADER, TOKEN_DUNORTE))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "conditions": [
                {"key": "cnpj", "operator": "EQ", "value": "12345678000195"},
                {"key": "warehouse", "operator": "IN", "value": ["1"]}
            ],
            "page": 0,
            "size": 100,
            "sort": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![record(7, "Mercado Central")],
            Some(1),
        )))
        .expect(1)
        .mount(&api.server)
        .await;

    let outcome = fetch_dunorte(&api, "12345678000195").await;

    assert_eq!(outcome.requests, 1);
    assert!(outcome.diagnostic.is_none());
    assert_eq!(outcome.records.len(), 1);

    let record = &outcome.records[0];
    assert_eq!(record.identifier_queried(), "12345678000195");
    assert_eq!(record.warehouse_queried(), "1");
    assert_eq!(record.get("name"), Some(&json!("Mercado Central")));
}

#[tokio::test]
async fn test_follows_declared_pages_and_content_fallback() {
    let api = MockBuyersApi::start().await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        json!({"results": [], "content": [record(1, "a"), record(2, "b")], "totalPages": 2}),
    )
    .await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        1,
        page_body(vec![record(3, "c")], Some(2)),
    )
    .await;

    let outcome = fetch_dunorte(&api, "111").await;

    assert_eq!(outcome.requests, 2);
    let ids: Vec<_> = outcome
        .records
        .iter()
        .map(|r| r.get("id").cloned().unwrap())
        .collect();
    assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
}

#[tokio::test]
async fn test_empty_page_stops_before_declared_total() {
    let api = MockBuyersApi::start().await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        page_body(vec![record(1, "a")], Some(5)),
    )
    .await;
    api.json_page("dunorte", TOKEN_DUNORTE, "111", "1", 1, page_body(vec![], Some(5)))
        .await;

    let outcome = fetch_dunorte(&api, "111").await;

    assert_eq!(outcome.requests, 2);
    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.diagnostic.is_none());
}

#[tokio::test]
async fn test_unauthorized_is_auth_diagnostic() {
    let api = MockBuyersApi::start().await;
    api.page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        ResponseTemplate::new(401),
    )
    .await;

    let outcome = fetch_dunorte(&api, "111").await;

    assert!(outcome.records.is_empty());
    let diagnostic = outcome.diagnostic.unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::Auth);
    assert!(diagnostic.message.contains("dunorte"));
}

#[tokio::test]
async fn test_server_error_is_transport_diagnostic() {
    let api = MockBuyersApi::start().await;
    api.page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        ResponseTemplate::new(500).set_body_string("upstream unavailable"),
    )
    .await;

    let outcome = fetch_dunorte(&api, "111").await;

    let diagnostic = outcome.diagnostic.unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::Transport);
    assert!(diagnostic.message.contains("HTTP 500"));
    assert!(diagnostic.message.contains("upstream unavailable"));
}

#[tokio::test]
async fn test_invalid_json_is_transport_diagnostic() {
    let api = MockBuyersApi::start().await;
    api.page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let outcome = fetch_dunorte(&api, "111").await;

    assert_eq!(
        outcome.diagnostic.map(|d| d.kind),
        Some(DiagnosticKind::Transport)
    );
}

#[tokio::test]
async fn test_malformed_records_field_is_transport_diagnostic() {
    let api = MockBuyersApi::start().await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        json!({"results": "not a list"}),
    )
    .await;

    let outcome = fetch_dunorte(&api, "111").await;

    assert!(outcome.records.is_empty());
    assert_eq!(
        outcome.diagnostic.map(|d| d.kind),
        Some(DiagnosticKind::Transport)
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_diagnostic() {
    let uri = {
        let api = MockBuyersApi::start().await;
        api.uri()
    };

    let config = config_for(&uri);
    let profile = config.registry().resolve("dunorte").unwrap();
    let executor = QueryExecutor::from_settings(&config.query).unwrap();
    assert_eq!(executor.fetcher().settings().base_url, uri);

    let outcome = executor
        .fetch(&QueryRequest::new("111", "1", "dunorte"), &profile)
        .await;

    assert_eq!(outcome.requests, 1);
    assert_eq!(
        outcome.diagnostic.map(|d| d.kind),
        Some(DiagnosticKind::Transport)
    );
}

#[tokio::test]
async fn test_float_page_count_is_followed() {
    let api = MockBuyersApi::start().await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        json!({"results": [record(1, "a"), record(2, "b")], "totalPages": 2.0}),
    )
    .await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        1,
        json!({"results": [record(3, "c")], "totalPages": "two"}),
    )
    .await;

    let outcome = fetch_dunorte(&api, "111").await;

    assert_eq!(outcome.requests, 2);
    assert_eq!(outcome.records.len(), 3);
    let diagnostic = outcome.diagnostic.unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::Transport);
    assert_eq!(diagnostic.page, 1);
}
