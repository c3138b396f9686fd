//! Batch orchestrator
//!
//! Runs every (identifier, warehouse) pair of a client, strictly in sequence:
//! identifiers in input order, warehouses in configured order. Only client
//! resolution can fail the batch; pair failures end up in the report.

use super::progress::{NoopProgress, ProgressSink, ProgressUpdate};
use super::types::{BatchCounts, BatchReport, BatchStatus};
use crate::config::Config;
use crate::core::query::{HttpPageFetcher, PageFetcher, QueryExecutor};
use crate::core::registry::ClientRegistry;
use crate::core::types::{QueryRequest, ResultSet};
use crate::utils::error::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Sequential batch runner
pub struct BatchOrchestrator<F = HttpPageFetcher> {
    registry: ClientRegistry,
    executor: QueryExecutor<F>,
    progress: Arc<dyn ProgressSink>,
}

impl BatchOrchestrator<HttpPageFetcher> {
    /// Orchestrator over HTTP for a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let executor = QueryExecutor::from_settings(&config.query)?;
        Ok(Self::new(config.registry(), executor))
    }
}

impl<F: PageFetcher> BatchOrchestrator<F> {
    pub fn new(registry: ClientRegistry, executor: QueryExecutor<F>) -> Self {
        Self {
            registry,
            executor,
            progress: Arc::new(NoopProgress),
        }
    }

    /// Attach a progress sink
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    /// Run a batch and return its records
    pub async fn run<S: AsRef<str>>(&self, identifiers: &[S], client_id: &str) -> Result<ResultSet> {
        Ok(self.run_with_report(identifiers, client_id).await?.into_records())
    }

    /// Run a batch and return the full report
    pub async fn run_with_report<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        client_id: &str,
    ) -> Result<BatchReport> {
        let profile = self.registry.resolve(client_id)?;
        let batch_id = Uuid::new_v4();
        let span = info_span!("batch", %batch_id, client = %client_id);

        async move {
            let started_at = Utc::now();
            let total = identifiers.len() * profile.warehouses.len();
            let mut counts = BatchCounts {
                total,
                ..Default::default()
            };
            let mut records = ResultSet::new();
            let mut diagnostics = Vec::new();

            if total == 0 {
                info!("Nothing to query");
            } else {
                info!(
                    "Querying {} CNPJs across {} warehouses ({} pairs)",
                    identifiers.len(),
                    profile.warehouses.len(),
                    total
                );
            }

            for identifier in identifiers {
                for warehouse in &profile.warehouses {
                    let request =
                        QueryRequest::new(identifier.as_ref(), warehouse.as_str(), client_id);
                    self.progress.on_pair_started(&ProgressUpdate {
                        completed: counts.completed,
                        total,
                        identifier: request.identifier.clone(),
                        warehouse: request.warehouse_code.clone(),
                    });
                    let outcome = self.executor.fetch(&request, &profile).await;

                    counts.completed += 1;
                    counts.requests += u64::from(outcome.requests);
                    records.extend(outcome.records);
                    if let Some(diagnostic) = outcome.diagnostic {
                        counts.failed += 1;
                        diagnostics.push(diagnostic);
                    }

                    self.progress.on_progress(&ProgressUpdate {
                        completed: counts.completed,
                        total,
                        identifier: request.identifier,
                        warehouse: request.warehouse_code,
                    });
                }
            }

            let report = BatchReport {
                batch_id,
                client_id: client_id.to_string(),
                records,
                diagnostics,
                counts,
                started_at,
                finished_at: Utc::now(),
            };

            match report.status() {
                BatchStatus::Completed => info!(
                    "Batch finished: {} records, {} failed pairs",
                    report.records.len(),
                    counts.failed
                ),
                BatchStatus::Empty => warn!(
                    "Batch finished without records ({} failed pairs)",
                    counts.failed
                ),
            }

            Ok(report)
        }
        .instrument(span)
        .await
    }
}
