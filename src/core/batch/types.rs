//! Batch report types

use crate::core::query::Diagnostic;
use crate::core::reducer::reduce;
use crate::core::types::{ExportRow, ResultSet};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// How a finished batch turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// At least one record was found
    Completed,
    /// Every pair came back empty; informational, not an error
    Empty,
}

/// Pair and request counts for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchCounts {
    /// Pairs in the batch
    pub total: usize,
    /// Pairs processed
    pub completed: usize,
    /// Pairs that ended with a diagnostic
    pub failed: usize,
    /// HTTP requests sent
    pub requests: u64,
}

/// Everything a batch produced
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub client_id: String,
    /// Records in pair order, then page order
    pub records: ResultSet,
    pub diagnostics: Vec<Diagnostic>,
    pub counts: BatchCounts,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn status(&self) -> BatchStatus {
        if self.records.is_empty() {
            BatchStatus::Empty
        } else {
            BatchStatus::Completed
        }
    }

    /// Deduplicated (warehouse, identifier) pairs
    pub fn export_rows(&self) -> Vec<ExportRow> {
        reduce(&self.records)
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    pub fn into_records(self) -> ResultSet {
        self.records
    }
}
