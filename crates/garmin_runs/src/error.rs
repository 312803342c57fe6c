//! Custom error types for the pipelines.

use thiserror::Error;

/// Pipeline errors.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("API error: {0}")]
    Api(#[from] garmin_connect_client::GarminError),

    #[error("chart rendering error: {0}")]
    Chart(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations.
pub type RunResult<T> = Result<T, RunError>;
