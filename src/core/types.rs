//! Core data types
//!
//! A [`QueryRequest`] names one (identifier, warehouse) pair for a client.
//! Each remote record it yields becomes a [`Record`] tagged with the pair that
//! was asked for; [`ExportRow`] is the deduplicated projection that gets
//! exported.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Synthetic field carrying the identifier that was queried
pub const IDENTIFIER_QUERIED: &str = "identifier_queried";
/// Synthetic field carrying the warehouse that was queried
pub const WAREHOUSE_QUERIED: &str = "warehouse_queried";

/// One (identifier, warehouse) query on behalf of a client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryRequest {
    /// Digits-only CNPJ
    pub identifier: String,
    pub warehouse_code: String,
    pub client_id: String,
}

impl QueryRequest {
    pub fn new(
        identifier: impl Into<String>,
        warehouse_code: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            warehouse_code: warehouse_code.into(),
            client_id: client_id.into(),
        }
    }
}

/// A remote buyer record tagged with the pair that produced it
///
/// The tags always echo the request. Same-named keys in the remote payload
/// are dropped when the record is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    identifier_queried: String,
    warehouse_queried: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Record {
    /// Tag a remote payload with the request that produced it
    pub fn tagged(mut fields: Map<String, Value>, request: &QueryRequest) -> Self {
        fields.remove(IDENTIFIER_QUERIED);
        fields.remove(WAREHOUSE_QUERIED);
        Self {
            identifier_queried: request.identifier.clone(),
            warehouse_queried: request.warehouse_code.clone(),
            fields,
        }
    }

    pub fn identifier_queried(&self) -> &str {
        &self.identifier_queried
    }

    pub fn warehouse_queried(&self) -> &str {
        &self.warehouse_queried
    }

    /// Remote fields, without the synthetic tags
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Every record of a batch, in pair order then page order
pub type ResultSet = Vec<Record>;

/// One exported (warehouse, identifier) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportRow {
    pub warehouse_queried: String,
    pub identifier_queried: String,
}

impl From<&Record> for ExportRow {
    fn from(record: &Record) -> Self {
        Self {
            warehouse_queried: record.warehouse_queried.clone(),
            identifier_queried: record.identifier_queried.clone(),
        }
    }
}
