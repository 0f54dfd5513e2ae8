//! Error taxonomy shared by the backend handlers and the browser client.
//!
//! Every failure a user can see is one of these variants. The backend turns
//! them into `{ "error": "..." }` JSON bodies with the status from
//! [`RegisterError::status_code`]; the client shows the message verbatim in
//! its transient status banner.

use thiserror::Error;

/// Message returned when the update proxy has no backend location.
pub const BACKEND_NOT_CONFIGURED: &str = "Backend URL not configured";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Required configuration is missing. Raised before any network call.
    #[error("{0}")]
    Configuration(String),

    /// The outbound request could not be completed.
    #[error("{0}")]
    Network(String),

    /// The parse backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// A data-store operation failed; the message is passed through as-is.
    #[error("{0}")]
    Store(String),

    /// A required field is missing. Caught before submission.
    #[error("{0}")]
    Validation(String),
}

impl RegisterError {
    pub fn status_code(&self) -> u16 {
        match self {
            RegisterError::Validation(_) => 400,
            RegisterError::Store(_) => 503,
            RegisterError::Configuration(_) | RegisterError::Network(_) => 500,
            RegisterError::Backend { status, .. } => *status,
        }
    }

    pub fn backend_not_configured() -> Self {
        RegisterError::Configuration(BACKEND_NOT_CONFIGURED.to_string())
    }

    /// Maps a failed register API response back onto the taxonomy. Only
    /// meaningful for the register's own endpoints; relayed parse-service
    /// failures stay `Backend` whatever their status.
    pub fn from_api_status(status: u16, message: String) -> Self {
        match status {
            400 => RegisterError::Validation(message),
            503 => RegisterError::Store(message),
            _ => RegisterError::Backend { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_messages_pass_through_verbatim() {
        let err = RegisterError::Store("UNIQUE constraint failed: products.id".into());
        assert_eq!(err.to_string(), "UNIQUE constraint failed: products.id");
        assert_eq!(err.status_code(), 503);
    }

    #[test]
    fn backend_errors_keep_the_backend_status() {
        let err = RegisterError::Backend {
            status: 422,
            message: "could not read pdf".into(),
        };
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.to_string(), "could not read pdf");
    }

    #[test]
    fn api_statuses_map_back_to_their_variants() {
        assert_eq!(
            RegisterError::from_api_status(400, "Product name is required".into()),
            RegisterError::Validation("Product name is required".into())
        );
        assert_eq!(
            RegisterError::from_api_status(503, "database is locked".into()),
            RegisterError::Store("database is locked".into())
        );
        let other = RegisterError::from_api_status(401, "Not signed in".into());
        assert_eq!(other.status_code(), 401);
        assert!(matches!(other, RegisterError::Backend { .. }));
    }

    #[test]
    fn missing_backend_is_a_configuration_error() {
        let err = RegisterError::backend_not_configured();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), BACKEND_NOT_CONFIGURED);
    }
}
