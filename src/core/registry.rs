//! Client registry
//!
//! Immutable lookup of client id to warehouses and API token, built once from
//! [`Config`]. Warehouses and tokens are separate lookups: a client may be
//! present in one and not the other, and `resolve` refuses both cases.

use crate::config::Config;
use crate::utils::error::{Result, ValidatorError};
use std::collections::HashMap;
use std::fmt;

/// Everything needed to query on behalf of one client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientProfile {
    pub client_id: String,
    /// Warehouse codes in configured order
    pub warehouses: Vec<String>,
    token: String,
}

impl ClientProfile {
    pub fn new(
        client_id: impl Into<String>,
        warehouses: Vec<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            warehouses,
            token: token.into(),
        }
    }

    /// Value sent in the `X-TOKEN` header
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for ClientProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientProfile")
            .field("client_id", &self.client_id)
            .field("warehouses", &self.warehouses)
            .field("token", &"***")
            .finish()
    }
}

/// Registry of known clients
#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    order: Vec<String>,
    warehouses: HashMap<String, Vec<String>>,
    tokens: HashMap<String, String>,
}

impl ClientRegistry {
    pub fn new(config: &Config) -> Self {
        let mut registry = Self::default();

        for client in &config.clients {
            registry.order.push(client.id.clone());
            if !client.warehouses.is_empty() {
                registry
                    .warehouses
                    .insert(client.id.clone(), client.warehouses.clone());
            }
            if let Some(token) = client.token() {
                registry.tokens.insert(client.id.clone(), token.to_string());
            }
        }

        registry
    }

    /// Resolve a client id to its profile
    ///
    /// Fails with [`ValidatorError::UnknownClient`] when the client has no
    /// warehouses and with [`ValidatorError::MissingToken`] when it has
    /// warehouses but no token.
    pub fn resolve(&self, client_id: &str) -> Result<ClientProfile> {
        let warehouses = self
            .warehouses
            .get(client_id)
            .ok_or_else(|| ValidatorError::unknown_client(client_id))?;

        let token = self
            .tokens
            .get(client_id)
            .ok_or_else(|| ValidatorError::missing_token(client_id))?;

        Ok(ClientProfile::new(client_id, warehouses.clone(), token.clone()))
    }

    /// Client ids in configured order
    pub fn client_ids(&self) -> &[String] {
        &self.order
    }

    pub fn warehouses(&self, client_id: &str) -> &[String] {
        self.warehouses
            .get(client_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_token(&self, client_id: &str) -> bool {
        self.tokens.contains_key(client_id)
    }
}
