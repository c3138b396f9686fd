//! Progress reporting
//!
//! The orchestrator announces each pair before querying it and pushes one
//! [`ProgressUpdate`] once it is finished. Sinks are observers only: nothing
//! they do feeds back into the batch.

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

/// Progress after one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    /// Pairs finished so far, this one included
    pub completed: usize,
    pub total: usize,
    pub identifier: String,
    pub warehouse: String,
}

impl ProgressUpdate {
    /// Completion in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.completed as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Status line for a pair about to be queried
    ///
    /// `completed` counts the pairs finished before this one.
    pub fn querying_line(&self) -> String {
        format!(
            "Querying {}/{} - CNPJ: {}, Warehouse: {}",
            self.completed + 1,
            self.total,
            self.identifier,
            self.warehouse
        )
    }

    /// Human readable status line
    pub fn status_line(&self) -> String {
        format!(
            "Queried {}/{} - CNPJ: {}, Warehouse: {}",
            self.completed, self.total, self.identifier, self.warehouse
        )
    }
}

/// Receiver of progress updates
pub trait ProgressSink: Send + Sync {
    /// A pair is about to be queried
    fn on_pair_started(&self, _update: &ProgressUpdate) {}

    /// A pair is finished
    fn on_progress(&self, update: &ProgressUpdate);
}

impl<F> ProgressSink for F
where
    F: Fn(&ProgressUpdate) + Send + Sync,
{
    fn on_progress(&self, update: &ProgressUpdate) {
        self(update)
    }
}

/// Logs each update at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn on_pair_started(&self, update: &ProgressUpdate) {
        info!("{}", update.querying_line());
    }

    fn on_progress(&self, update: &ProgressUpdate) {
        debug!(
            progress = update.fraction(),
            "{}",
            update.status_line()
        );
    }
}

/// Discards updates
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

/// Keeps every update
#[derive(Debug, Default)]
pub struct CollectingProgress {
    started: Mutex<Vec<ProgressUpdate>>,
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl CollectingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair announcements, in order
    pub fn started(&self) -> Vec<ProgressUpdate> {
        self.started.lock().clone()
    }

    /// Finished pairs, in order
    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().clone()
    }
}

impl ProgressSink for CollectingProgress {
    fn on_pair_started(&self, update: &ProgressUpdate) {
        self.started.lock().push(update.clone());
    }

    fn on_progress(&self, update: &ProgressUpdate) {
        self.updates.lock().push(update.clone());
    }
}
