//! # cnpj-validator-rs
//!
//! Checks which CNPJs are registered against a client's warehouses by paging
//! through the client's buyers query API, then exports the matching
//! (warehouse, CNPJ) pairs.
//!
//! ## Features
//!
//! - **Paginated queries**: every (CNPJ, warehouse) pair is paged until an
//!   empty page or the declared `totalPages`
//! - **Failure isolation**: a bad token or a network error only ends its own
//!   pair; the batch always completes
//! - **Deterministic output**: records keep pair order then page order, and
//!   the export keeps first-seen order
//! - **Progress reporting**: pluggable sinks receive one update per pair
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cnpj_validator_rs::{BatchOrchestrator, Config, reduce};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/clients.yaml").await?;
//!     let orchestrator = BatchOrchestrator::from_config(&config)?;
//!
//!     let records = orchestrator
//!         .run(&["12345678000195", "00111222000133"], "dunorte")
//!         .await?;
//!
//!     for row in reduce(&records) {
//!         println!("{} {}", row.warehouse_queried, row.identifier_queried);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod io;
pub mod utils;

pub use config::Config;
pub use core::{
    BatchOrchestrator, BatchReport, BatchStatus, ClientProfile, ClientRegistry, Diagnostic,
    DiagnosticKind, ExportRow, ProgressSink, ProgressUpdate, QueryExecutor, QueryRequest, Record,
    ResultSet, reduce,
};
pub use utils::error::{Result, ValidatorError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("CNPJ_VALIDATOR_BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("CNPJ_VALIDATOR_GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
