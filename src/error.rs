//! Error types for AssetDesk

use thiserror::Error;

use crate::validation::FieldErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl AppError {
    /// Field-level messages when this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
