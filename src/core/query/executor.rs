//! Paginated query executor
//!
//! Drives the page loop for one (identifier, warehouse) pair:
//!
//! 1. request page 0, 1, 2, ...
//! 2. stop on 401 or any transport failure, keeping what was accumulated
//! 3. stop on an empty page, whatever `totalPages` claims
//! 4. otherwise tag and keep the records, stopping once `page >= totalPages - 1`
//!
//! A pair never fails the caller; problems come back as a [`Diagnostic`].

use super::fetcher::{HttpPageFetcher, PageFetcher};
use super::outcome::{Diagnostic, PageOutcome};
use crate::config::QuerySettings;
use crate::core::registry::ClientProfile;
use crate::core::types::{QueryRequest, Record};
use crate::utils::error::Result;
use tracing::{debug, error, warn};

/// Records and diagnostics for one pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    /// Tagged records in page order
    pub records: Vec<Record>,
    /// Requests sent for this pair
    pub requests: u32,
    /// Set when the pair ended on a failure or the page cap
    pub diagnostic: Option<Diagnostic>,
}

/// Runs the page loop over a [`PageFetcher`]
#[derive(Debug)]
pub struct QueryExecutor<F = HttpPageFetcher> {
    fetcher: F,
    max_pages: u32,
}

impl QueryExecutor<HttpPageFetcher> {
    /// Executor over HTTP, configured from the query settings
    pub fn from_settings(settings: &QuerySettings) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(settings.clone())?;
        Ok(Self::new(fetcher, settings.max_pages))
    }
}

impl<F: PageFetcher> QueryExecutor<F> {
    pub fn new(fetcher: F, max_pages: u32) -> Self {
        Self { fetcher, max_pages }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch every page for one pair
    pub async fn fetch(&self, request: &QueryRequest, profile: &ClientProfile) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();
        let mut page: u32 = 0;

        loop {
            if page >= self.max_pages {
                let diagnostic = Diagnostic::page_cap(request, self.max_pages);
                warn!("{}", diagnostic);
                outcome.diagnostic = Some(diagnostic);
                break;
            }

            outcome.requests += 1;
            match self.fetcher.fetch_page(request, profile, page).await {
                PageOutcome::AuthFailed => {
                    let diagnostic = Diagnostic::auth(request, page);
                    error!("{}", diagnostic);
                    outcome.diagnostic = Some(diagnostic);
                    break;
                }
                PageOutcome::TransportFailed(detail) => {
                    let diagnostic = Diagnostic::transport(request, page, &detail);
                    error!("{}", diagnostic);
                    outcome.diagnostic = Some(diagnostic);
                    break;
                }
                PageOutcome::Success(body) => {
                    if body.records.is_empty() {
                        debug!(
                            "Empty page {} for CNPJ {} in warehouse {}",
                            page, request.identifier, request.warehouse_code
                        );
                        break;
                    }

                    let last = body.is_last(page);
                    outcome.records.extend(
                        body.records
                            .into_iter()
                            .map(|fields| Record::tagged(fields, request)),
                    );

                    if let Some(detail) = body.invalid_total {
                        let diagnostic = Diagnostic::transport(request, page, &detail);
                        error!("{}", diagnostic);
                        outcome.diagnostic = Some(diagnostic);
                        break;
                    }
                    if last {
                        break;
                    }
                    page += 1;
                }
            }
        }

        debug!(
            "CNPJ {} in warehouse {}: {} records over {} requests",
            request.identifier,
            request.warehouse_code,
            outcome.records.len(),
            outcome.requests
        );
        outcome
    }
}
