//! Helper functions for creating and classifying errors

use super::types::ValidatorError;

impl ValidatorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unknown_client<S: Into<String>>(client_id: S) -> Self {
        Self::UnknownClient(client_id.into())
    }

    pub fn missing_token<S: Into<String>>(client_id: S) -> Self {
        Self::MissingToken(client_id.into())
    }

    /// Errors that must stop an operation before any query is sent
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ValidatorError::Config(_)
                | ValidatorError::UnknownClient(_)
                | ValidatorError::MissingToken(_)
                | ValidatorError::MissingIdentifierColumn
        )
    }
}
