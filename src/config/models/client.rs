//! Client configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// One tenant of the buyers API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Client id, also the first path segment of the endpoint
    pub id: String,
    /// Warehouse codes queried for this client, in query order
    #[serde(default)]
    pub warehouses: Vec<String>,
    /// Value of the `X-TOKEN` header
    #[serde(default)]
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(id: impl Into<String>, warehouses: &[&str], token: Option<&str>) -> Self {
        Self {
            id: id.into(),
            warehouses: warehouses.iter().map(|w| w.to_string()).collect(),
            token: token.map(str::to_string),
        }
    }

    /// Token, treating a blank value as absent
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

// Tokens stay out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("id", &self.id)
            .field("warehouses", &self.warehouses)
            .field("token", &self.token().map(|_| "***"))
            .finish()
    }
}
