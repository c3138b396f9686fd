//! Batch orchestration
//!
//! Walks the identifier x warehouse product for one client, collects records
//! and diagnostics into a [`BatchReport`] and streams progress to a
//! [`ProgressSink`].

mod orchestrator;
pub mod progress;
mod types;

pub use orchestrator::BatchOrchestrator;
pub use progress::{CollectingProgress, NoopProgress, ProgressSink, ProgressUpdate, TracingProgress};
pub use types::{BatchCounts, BatchReport, BatchStatus};
