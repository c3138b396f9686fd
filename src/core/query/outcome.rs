//! Per-page outcomes and per-pair diagnostics

use super::wire::Page;
use crate::core::types::QueryRequest;
use serde::Serialize;
use std::fmt;

/// Result of fetching a single page
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Page parsed
    Success(Page),
    /// HTTP 401
    AuthFailed,
    /// Network failure, non-success status or malformed body
    TransportFailed(String),
}

impl PageOutcome {
    /// Map a non-success HTTP status
    pub fn from_error_status(status: u16, body: &str) -> Self {
        match status {
            401 => PageOutcome::AuthFailed,
            _ => PageOutcome::TransportFailed(format!("HTTP {}: {}", status, snippet(body))),
        }
    }
}

fn snippet(body: &str) -> &str {
    const MAX: usize = 200;
    let body = body.trim();
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Why a pair stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Auth,
    Transport,
    PageCapReached,
}

/// Report of a pair that ended on a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub client_id: String,
    pub identifier: String,
    pub warehouse: String,
    /// Page that failed, or the cap that was hit
    pub page: u32,
    pub message: String,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, request: &QueryRequest, page: u32, message: String) -> Self {
        Self {
            kind,
            client_id: request.client_id.clone(),
            identifier: request.identifier.clone(),
            warehouse: request.warehouse_code.clone(),
            page,
            message,
        }
    }

    pub fn auth(request: &QueryRequest, page: u32) -> Self {
        let message = format!(
            "Invalid or expired token for client '{}'",
            request.client_id
        );
        Self::new(DiagnosticKind::Auth, request, page, message)
    }

    pub fn transport(request: &QueryRequest, page: u32, detail: &str) -> Self {
        let message = format!(
            "Query failed for CNPJ {} in warehouse {}: {}",
            request.identifier, request.warehouse_code, detail
        );
        Self::new(DiagnosticKind::Transport, request, page, message)
    }

    pub fn page_cap(request: &QueryRequest, max_pages: u32) -> Self {
        let message = format!(
            "Stopped CNPJ {} in warehouse {} after {} pages",
            request.identifier, request.warehouse_code, max_pages
        );
        Self::new(DiagnosticKind::PageCapReached, request, max_pages, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
