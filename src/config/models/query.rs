//! Query settings shared by every client

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the paginated buyers query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Base URL; the client id is appended as the first path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Records requested per page, always [`PAGE_SIZE`]
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Maximum pages fetched for one (identifier, warehouse) pair
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

impl QuerySettings {
    /// Query endpoint for a client
    pub fn endpoint(&self, client_id: &str) -> String {
        format!(
            "{}/{}/buyers/query",
            self.base_url.trim_end_matches('/'),
            client_id
        )
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}
