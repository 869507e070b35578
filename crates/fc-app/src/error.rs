//! Error types for the fc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI one error surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Sizing failed: {0}")]
    Sizing(#[from] fc_sizing::SizingError),

    #[error("Card error: {0}")]
    Card(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Storage error: {0}")]
    Store(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<fc_sizing::ValidationError> for AppError {
    fn from(err: fc_sizing::ValidationError) -> Self {
        AppError::Sizing(err.into())
    }
}

impl From<fc_project::ProjectError> for AppError {
    fn from(err: fc_project::ProjectError) -> Self {
        AppError::Card(err.to_string())
    }
}

impl From<fc_store::StoreError> for AppError {
    fn from(err: fc_store::StoreError) -> Self {
        match err {
            fc_store::StoreError::CardNotFound { card_id } => AppError::CardNotFound(card_id),
            other => AppError::Store(other.to_string()),
        }
    }
}
