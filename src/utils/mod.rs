//! Utility modules for the validator
//!
//! ## Module Organization
//!
//! - **error**: Error taxonomy and classification
//! - **identifier**: CNPJ normalization
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod identifier; // CNPJ normalization
pub mod logging; // Logging setup

pub use error::{Result, ValidatorError};
pub use identifier::{normalize_all, normalize_identifier};
pub use logging::{LogFormat, init_logging};
