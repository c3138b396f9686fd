//! Whole batches against the mock buyers API

use crate::common::{
    MockBuyersApi, TOKEN_DUNORTE, TOKEN_MULTIGIRO, config_for, page_body, pair_body, record,
};
use cnpj_validator_rs::core::batch::CollectingProgress;
use cnpj_validator_rs::{
    BatchOrchestrator, BatchStatus, DiagnosticKind, ExportRow, ValidatorError, reduce,
};
use serde_json::json;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn export_row(warehouse: &str, identifier: &str) -> ExportRow {
    ExportRow {
        warehouse_queried: warehouse.to_string(),
        identifier_queried: identifier.to_string(),
    }
}

#[tokio::test]
async fn test_single_warehouse_batch_exports_found_pairs() {
    let api = MockBuyersApi::start().await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "111",
        "1",
        0,
        page_body(vec![record(1, "Loja 1"), record(2, "Loja 2")], Some(1)),
    )
    .await;
    api.empty_pair("dunorte", TOKEN_DUNORTE, "222", "1").await;

    let config = config_for(&api.uri());
    let orchestrator = assert_ok!(BatchOrchestrator::from_config(&config));
    let records = assert_ok!(orchestrator.run(&["111", "222"], "dunorte").await);

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.identifier_queried() == "111"));
    assert_eq!(reduce(&records), vec![export_row("1", "111")]);
}

#[tokio::test]
async fn test_unknown_client_fails_without_requests() {
    let api = MockBuyersApi::start().await;
    let orchestrator = BatchOrchestrator::from_config(&config_for(&api.uri())).unwrap();

    let err = assert_err!(orchestrator.run(&["111"], "acme").await);

    assert!(matches!(err, ValidatorError::UnknownClient(ref id) if id == "acme"));
    assert!(err.is_config_error());
    assert_eq!(api.request_count().await, 0);
}

#[tokio::test]
async fn test_client_without_token_fails_without_requests() {
    let api = MockBuyersApi::start().await;
    let orchestrator = BatchOrchestrator::from_config(&config_for(&api.uri())).unwrap();
    assert!(!orchestrator.registry().has_token("cardeal"));

    let err = assert_err!(orchestrator.run(&["111"], "cardeal").await);

    assert!(matches!(err, ValidatorError::MissingToken(_)));
    assert_eq!(api.request_count().await, 0);
}

#[tokio::test]
async fn test_auth_failure_on_one_pair_does_not_stop_batch() {
    let api = MockBuyersApi::start().await;
    api.json_page(
        "multigiro",
        TOKEN_MULTIGIRO,
        "999",
        "4",
        0,
        page_body(vec![record(10, "Atacado")], None),
    )
    .await;
    api.page(
        "multigiro",
        TOKEN_MULTIGIRO,
        "999",
        "2",
        0,
        ResponseTemplate::new(401),
    )
    .await;
    api.empty_pair("multigiro", TOKEN_MULTIGIRO, "111", "4").await;
    api.json_page(
        "multigiro",
        TOKEN_MULTIGIRO,
        "111",
        "2",
        0,
        json!({"content": [record(11, "Varejo")]}),
    )
    .await;

    let progress = Arc::new(CollectingProgress::new());
    let orchestrator = BatchOrchestrator::from_config(&config_for(&api.uri()))
        .unwrap()
        .with_progress(progress.clone());

    let report = orchestrator
        .run_with_report(&["999", "111"], "multigiro")
        .await
        .unwrap();

    assert_eq!(report.status(), BatchStatus::Completed);
    assert_eq!(report.counts.total, 4);
    assert_eq!(report.counts.completed, 4);
    assert_eq!(report.counts.failed, 1);
    assert_eq!(report.counts.requests, 4);

    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::Auth);
    assert_eq!(diagnostic.identifier, "999");
    assert_eq!(diagnostic.warehouse, "2");

    assert_eq!(
        report.export_rows(),
        vec![export_row("4", "999"), export_row("2", "111")]
    );

    let pairs: Vec<_> = progress
        .updates()
        .into_iter()
        .map(|u| (u.completed, u.identifier, u.warehouse))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (1, "999".to_string(), "4".to_string()),
            (2, "999".to_string(), "2".to_string()),
            (3, "111".to_string(), "4".to_string()),
            (4, "111".to_string(), "2".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_batch_without_records_is_empty() {
    let api = MockBuyersApi::start().await;
    api.empty_pair("dunorte", TOKEN_DUNORTE, "111", "1").await;

    let orchestrator = BatchOrchestrator::from_config(&config_for(&api.uri())).unwrap();
    let report = orchestrator
        .run_with_report(&["111"], "dunorte")
        .await
        .unwrap();

    assert_eq!(report.status(), BatchStatus::Empty);
    assert!(report.export_rows().is_empty());
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn test_repeated_identifier_is_queried_twice_but_exported_once() {
    let api = MockBuyersApi::start().await;
    Mock::given(method("POST"))
        .and(path("/dunorte/buyers/query"))
        .and(body_partial_json(pair_body("111", "1", 0)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(vec![record(1, "Loja")], Some(1))),
        )
        .expect(2)
        .mount(&api.server)
        .await;

    let orchestrator = BatchOrchestrator::from_config(&config_for(&api.uri())).unwrap();
    let records = orchestrator.run(&["111", "111"], "dunorte").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(reduce(&records), vec![export_row("1", "111")]);
}
