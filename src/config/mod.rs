//! Configuration management
//!
//! Client profiles and query settings are loaded once at startup, from a YAML
//! file overlaid with environment variables, and handed to the registry as an
//! immutable value.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::registry::ClientRegistry;
use crate::utils::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "CNPJ_VALIDATOR_";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Query settings
    #[serde(default)]
    pub query: QuerySettings,
    /// Known clients
    #[serde(default)]
    pub clients: Vec<ClientConfig>,
}

impl Config {
    /// Load configuration from a YAML file, apply environment overrides and validate
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ValidatorError::config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml_str(&content)?;
        config.apply_env_overrides()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse YAML without overrides or validation
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ValidatorError::config(format!("Failed to parse config: {}", e)))
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(std::env::vars())
    }

    /// Apply `CNPJ_VALIDATOR_*` overrides from key/value pairs
    ///
    /// - `CNPJ_VALIDATOR_BASE_URL`
    /// - `CNPJ_VALIDATOR_TIMEOUT` (seconds)
    /// - `CNPJ_VALIDATOR_MAX_PAGES`
    /// - `CNPJ_VALIDATOR_TOKEN_<CLIENT>`
    pub fn apply_overrides<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value: String = value.into();

            match name {
                "BASE_URL" => self.query.base_url = value,
                "TIMEOUT" => {
                    self.query.timeout = value.parse().map_err(|e| {
                        ValidatorError::config(format!("Invalid timeout: {}", e))
                    })?;
                }
                "MAX_PAGES" => {
                    self.query.max_pages = value.parse().map_err(|e| {
                        ValidatorError::config(format!("Invalid max pages: {}", e))
                    })?;
                }
                _ => {
                    if let Some(client) = name.strip_prefix("TOKEN_") {
                        self.set_token(&client.to_lowercase(), value);
                    }
                }
            }
        }
        Ok(())
    }

    fn set_token(&mut self, client_id: &str, token: String) {
        match self.clients.iter_mut().find(|c| c.id == client_id) {
            Some(client) => {
                debug!("Token for client '{}' taken from environment", client_id);
                client.token = Some(token);
            }
            None => warn!(
                "Ignoring token for client '{}': client is not configured",
                client_id
            ),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(ValidatorError::Config)
    }

    /// Look up a client by id
    pub fn client(&self, id: &str) -> Option<&ClientConfig> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Build the immutable client registry
    pub fn registry(&self) -> ClientRegistry {
        ClientRegistry::new(self)
    }
}
