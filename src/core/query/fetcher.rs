//! Page fetching
//!
//! [`PageFetcher`] is the seam between the pagination loop and the network.
//! [`HttpPageFetcher`] is the real implementation over `reqwest`.

use super::outcome::PageOutcome;
use super::wire::{QueryPayload, parse_page};
use crate::config::QuerySettings;
use crate::core::registry::ClientProfile;
use crate::core::types::QueryRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Header carrying the client token
pub const TOKEN_HEADER: &str = "X-TOKEN";

/// Fetch one page for one pair
///
/// Implementations never fail: every problem becomes a [`PageOutcome`] variant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(
        &self,
        request: &QueryRequest,
        profile: &ClientProfile,
        page: u32,
    ) -> PageOutcome;
}

/// HTTP implementation against `POST {base_url}/{client_id}/buyers/query`
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    http_client: reqwest::Client,
    settings: QuerySettings,
}

impl HttpPageFetcher {
    pub fn new(settings: QuerySettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout_duration())
            .connect_timeout(settings.connect_timeout_duration())
            .build()?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(
        &self,
        request: &QueryRequest,
        profile: &ClientProfile,
        page: u32,
    ) -> PageOutcome {
        let url = self.settings.endpoint(&profile.client_id);
        let payload = QueryPayload::for_page(request, page, self.settings.page_size);

        debug!(
            "POST {} cnpj={} warehouse={} page={}",
            url, request.identifier, request.warehouse_code, page
        );

        let response = match self
            .http_client
            .post(&url)
            .header(TOKEN_HEADER, profile.token())
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return PageOutcome::TransportFailed(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return PageOutcome::AuthFailed;
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return PageOutcome::from_error_status(status.as_u16(), &body);
        }

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(e) => return PageOutcome::TransportFailed(format!("Invalid JSON body: {}", e)),
        };

        match parse_page(body) {
            Ok(page) => PageOutcome::Success(page),
            Err(detail) => PageOutcome::TransportFailed(detail),
        }
    }
}
