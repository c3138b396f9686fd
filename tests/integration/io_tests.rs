//! From an input CSV to the export file

use crate::common::{MockBuyersApi, TOKEN_DUNORTE, config_for, page_body, record};
use cnpj_validator_rs::BatchOrchestrator;
use cnpj_validator_rs::io::{dump_records, export_to_dir, load_identifiers};
use std::fs;
use tempfile::tempdir;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_csv_to_export_file() {
    let api = MockBuyersApi::start().await;
    api.json_page(
        "dunorte",
        TOKEN_DUNORTE,
        "00111222000133",
        "1",
        0,
        page_body(vec![record(1, "Padaria")], Some(1)),
    )
    .await;
    api.empty_pair("dunorte", TOKEN_DUNORTE, "12345678000195", "1")
        .await;

    let dir = tempdir().unwrap();
    let input = dir.path().join("clientes.csv");
    fs::write(
        &input,
        "razao_social;CNPJ\nPadaria;00.111.222/0001-33\nMercado;12.345.678/0001-95\nPadaria;00111222000133\n",
    )
    .unwrap();

    let source = assert_ok!(load_identifiers(&input, b';'));
    assert_eq!(source.rows, 3);
    assert_eq!(source.identifiers, vec!["00111222000133", "12345678000195"]);

    let orchestrator = BatchOrchestrator::from_config(&config_for(&api.uri())).unwrap();
    let report = orchestrator
        .run_with_report(&source.identifiers, "dunorte")
        .await
        .unwrap();

    let out = dir.path().join("out");
    let export = assert_ok!(export_to_dir(&out, "dunorte", &report.export_rows()));
    assert_eq!(
        fs::read_to_string(&export).unwrap(),
        "\"warehouse_queried\",\"identifier_queried\"\n\"1\",\"00111222000133\"\n"
    );

    let dump = out.join("records.jsonl");
    assert_ok!(dump_records(&dump, &report.records));
    let line: serde_json::Value =
        serde_json::from_str(fs::read_to_string(&dump).unwrap().trim()).unwrap();
    assert_eq!(line["name"], "Padaria");
    assert_eq!(line["warehouse_queried"], "1");
}

#[tokio::test]
async fn test_loads_client_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clients.yaml");
    fs::write(
        &path,
        r#"
query:
  base_url: "http://127.0.0.1:9"
clients:
  - id: multigiro
    warehouses: ["4", "2"]
    token: "abc"
"#,
    )
    .unwrap();

    let config = assert_ok!(cnpj_validator_rs::Config::from_file(&path).await);
    let registry = config.registry();
    assert_eq!(registry.client_ids(), ["multigiro".to_string()]);
    assert_eq!(registry.warehouses("multigiro"), ["4", "2"]);
    assert_eq!(config.query.page_size, 100);
}
