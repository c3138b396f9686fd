//! Validators for the configuration models

use super::trait_def::Validate;
use crate::config::Config;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::{debug, warn};
use url::Url;

/// Check that a base URL is absolute http(s) with a host
pub fn validate_base_url(url_str: &str) -> Result<(), String> {
    let url = Url::parse(url_str).map_err(|e| format!("Invalid base URL '{}': {}", url_str, e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "Base URL must use http:// or https:// scheme, got: {}",
                scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err("Base URL must have a valid host".to_string());
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err("Base URL must not carry a query string or fragment".to_string());
    }

    Ok(())
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating configuration");

        self.query.validate()?;

        if self.clients.is_empty() {
            return Err("At least one client must be configured".to_string());
        }

        let mut ids = HashSet::new();
        for client in &self.clients {
            if !ids.insert(client.id.as_str()) {
                return Err(format!("Duplicate client id: {}", client.id));
            }
            client.validate()?;
        }

        debug!("Configuration validation completed");
        Ok(())
    }
}

impl Validate for QuerySettings {
    fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url)?;

        if self.timeout == 0 {
            return Err("Query timeout must be greater than 0".to_string());
        }
        if self.timeout > 3600 {
            return Err("Query timeout should not exceed 1 hour".to_string());
        }
        if self.connect_timeout == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }
        if self.page_size != PAGE_SIZE {
            return Err(format!(
                "Page size is fixed at {} by the buyers API, got {}",
                PAGE_SIZE, self.page_size
            ));
        }
        if self.max_pages == 0 {
            return Err("Max pages must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Client id cannot be empty".to_string());
        }
        if self.id.contains(['/', '?', '#']) || self.id.chars().any(char::is_whitespace) {
            return Err(format!(
                "Client id '{}' cannot contain whitespace or URL delimiters",
                self.id
            ));
        }

        let mut seen = HashSet::new();
        for warehouse in &self.warehouses {
            if warehouse.trim().is_empty() {
                return Err(format!("Client '{}' has an empty warehouse code", self.id));
            }
            if !seen.insert(warehouse.as_str()) {
                return Err(format!(
                    "Client '{}' lists warehouse '{}' twice",
                    self.id, warehouse
                ));
            }
        }

        // Both are rejected later, at resolve time.
        if self.warehouses.is_empty() {
            warn!("Client '{}' has no warehouses configured", self.id);
        }
        if self.token().is_none() {
            warn!("Client '{}' has no API token configured", self.id);
        }

        Ok(())
    }
}
