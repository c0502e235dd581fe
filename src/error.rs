//! Application error types.

use thiserror::Error;

/// Application-level errors for Intentscape.
#[derive(Error, Debug)]
pub enum AppError {
    // Backend errors
    #[error("Backend request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    BackendStatus { status: u16, body: String },

    // Graph source errors
    #[error("Graph file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Graph data error: {0}")]
    Json(#[from] serde_json::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Convenience alias for results carrying [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
