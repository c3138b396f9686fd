//! Wire format of the buyers query endpoint
//!
//! Request: `{conditions, page, size, sort}`. Response: a JSON object whose
//! records sit under `results` or, when that is missing or empty, `content`,
//! with an optional `totalPages`.

use crate::core::types::QueryRequest;
use serde::Serialize;
use serde_json::{Map, Value};

/// Comparison operator of a query condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionOperator {
    Eq,
    In,
}

/// One filter of the query body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryCondition {
    pub key: &'static str,
    pub operator: ConditionOperator,
    pub value: Value,
}

/// Request body for one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPayload {
    pub conditions: Vec<QueryCondition>,
    pub page: u32,
    pub size: u32,
    pub sort: bool,
}

impl QueryPayload {
    /// Exact CNPJ match, warehouse membership in a singleton set, unsorted
    pub fn for_page(request: &QueryRequest, page: u32, size: u32) -> Self {
        Self {
            conditions: vec![
                QueryCondition {
                    key: "cnpj",
                    operator: ConditionOperator::Eq,
                    value: Value::String(request.identifier.clone()),
                },
                QueryCondition {
                    key: "warehouse",
                    operator: ConditionOperator::In,
                    value: Value::Array(vec![Value::String(request.warehouse_code.clone())]),
                },
            ],
            page,
            size,
            sort: false,
        }
    }
}

/// A parsed response page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub records: Vec<Map<String, Value>>,
    /// Declared page count, 1 when the server omits it
    pub total_pages: i64,
    /// Set when `totalPages` was present but unusable; the records still count
    pub invalid_total: Option<String>,
}

impl Page {
    pub fn new(records: Vec<Map<String, Value>>, total_pages: i64) -> Self {
        Self {
            records,
            total_pages,
            invalid_total: None,
        }
    }

    /// Whether `page` is the last one the server declared
    pub fn is_last(&self, page: u32) -> bool {
        i64::from(page) >= self.total_pages.saturating_sub(1)
    }
}

fn record_list(body: &Map<String, Value>, key: &str) -> Result<Vec<Map<String, Value>>, String> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_object()
                    .cloned()
                    .ok_or_else(|| format!("'{}' contains a non-object record", key))
            })
            .collect(),
        Some(_) => Err(format!("'{}' is not an array", key)),
    }
}

/// Integral page count, saturating at the `i64` bounds
fn page_count(value: &Value) -> Option<i64> {
    if let Some(count) = value.as_i64() {
        return Some(count);
    }
    if value.as_u64().is_some() {
        return Some(i64::MAX);
    }
    value
        .as_f64()
        .filter(|count| count.is_finite() && count.fract() == 0.0)
        .map(|count| count as i64)
}

/// Normalize a response body into a [`Page`]
///
/// Only the record list can make the body unusable. A bad `totalPages` is
/// recorded in [`Page::invalid_total`] so the records are kept.
pub fn parse_page(body: Value) -> Result<Page, String> {
    let Value::Object(body) = body else {
        return Err("response body is not a JSON object".to_string());
    };

    let mut records = record_list(&body, "results")?;
    if records.is_empty() {
        records = record_list(&body, "content")?;
    }

    let mut page = Page::new(records, 1);
    match body.get("totalPages") {
        None | Some(Value::Null) => {}
        Some(value) => match page_count(value) {
            Some(count) => page.total_pages = count,
            None => {
                page.invalid_total = Some(format!("'totalPages' is not an integer: {}", value))
            }
        },
    }

    Ok(page)
}
