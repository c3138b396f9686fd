//! Core query engine
//!
//! - `registry`: client id to warehouses and token
//! - `query`: paginated query for one (identifier, warehouse) pair
//! - `batch`: sequential orchestration over every pair of a client
//! - `reducer`: deduplicated (warehouse, identifier) projection

pub mod batch;
pub mod query;
pub mod reducer;
pub mod registry;
pub mod types;

pub use batch::{BatchOrchestrator, BatchReport, BatchStatus, ProgressSink, ProgressUpdate};
pub use query::{Diagnostic, DiagnosticKind, QueryExecutor};
pub use reducer::reduce;
pub use registry::{ClientProfile, ClientRegistry};
pub use types::{ExportRow, QueryRequest, Record, ResultSet};
