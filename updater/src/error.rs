//! Error handling for the forecast updater

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Location registry error: {0}")]
    Registry(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for updater operations
pub type AppResult<T> = Result<T, AppError>;
