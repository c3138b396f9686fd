//! Result reducer
//!
//! Projects a result set onto unique (warehouse, identifier) pairs, in the
//! order each pair is first seen.

use crate::core::types::{ExportRow, Record};
use std::collections::HashSet;

/// Deduplicated export rows, first-seen order
pub fn reduce(records: &[Record]) -> Vec<ExportRow> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(ExportRow::from)
        .filter(|row| seen.insert(row.clone()))
        .collect()
}
