//! Error types for the validator

use thiserror::Error;

/// Result type alias for the validator
pub type Result<T> = std::result::Result<T, ValidatorError>;

/// Main error type for the validator
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client id not present in the registry
    #[error("Unknown client '{0}': no warehouses registered")]
    UnknownClient(String),

    /// Client registered without an API token
    #[error("Client '{0}' has no API token configured")]
    MissingToken(String),

    /// Identifier source without any CNPJ column
    #[error("No column containing 'cnpj' was found in the input file")]
    MissingIdentifierColumn,

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
