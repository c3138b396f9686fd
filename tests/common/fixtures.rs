//! Configuration and response fixtures

use cnpj_validator_rs::Config;
use cnpj_validator_rs::config::{ClientConfig, QuerySettings};
use serde_json::{Value, json};

pub const TOKEN_DUNORTE: &str = "test-token-dunorte";
pub const TOKEN_MULTIGIRO: &str = "test-token-multigiro";

/// Clients pointing at a mock server
///
/// `cardeal` has warehouses but no token.
pub fn config_for(base_url: &str) -> Config {
    Config {
        query: QuerySettings {
            base_url: base_url.to_string(),
            timeout: 5,
            connect_timeout: 2,
            page_size: 100,
            max_pages: 10,
        },
        clients: vec![
            ClientConfig::new("dunorte", &["1"], Some(TOKEN_DUNORTE)),
            ClientConfig::new("cardeal", &["1"], None),
            ClientConfig::new("multigiro", &["4", "2"], Some(TOKEN_MULTIGIRO)),
        ],
    }
}

/// A response page under `results`
pub fn page_body(records: Vec<Value>, total_pages: Option<i64>) -> Value {
    match total_pages {
        Some(total) => json!({"results": records, "totalPages": total}),
        None => json!({"results": records}),
    }
}

/// A buyer record as the API returns it
pub fn record(id: u64, name: &str) -> Value {
    json!({"id": id, "name": name, "status": "ACTIVE"})
}
