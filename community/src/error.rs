//! Unified error types for the community feed
//!
//! - `DomainError`: core business rule violations raised by stores
//! - `AppError`: application layer errors surfaced to the binary
//!
//! A missing post or group is not an error: store operations return
//! `Ok(None)` and callers skip the update.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }

    /// Whether the caller supplied a malformed value
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Render(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_distinguishable() {
        let err = DomainError::invalid_input("post content must not be empty");
        assert!(err.is_invalid_input());
        assert!(!DomainError::Internal("lock".into()).is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input: post content must not be empty"
        );
    }

    #[test]
    fn app_error_wraps_domain_error() {
        let err: AppError = DomainError::invalid_input("group must be selected").into();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidInput(_))));
        assert_eq!(err.to_string(), "Invalid input: group must be selected");
    }
}
