//! Paginated query executor
//!
//! - `wire`: request body and response normalization
//! - `outcome`: per-page outcome and per-pair diagnostics
//! - `fetcher`: the `PageFetcher` seam and its HTTP implementation
//! - `executor`: the page loop for one pair

pub mod executor;
pub mod fetcher;
pub mod outcome;
pub mod wire;

pub use executor::{FetchOutcome, QueryExecutor};
pub use fetcher::{HttpPageFetcher, PageFetcher, TOKEN_HEADER};
pub use outcome::{Diagnostic, DiagnosticKind, PageOutcome};
pub use wire::{Page, QueryPayload, parse_page};
