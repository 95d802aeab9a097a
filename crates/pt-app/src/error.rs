//! Error types for the service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invocation error: {0}")]
    Invoke(#[from] pt_invoke::InvokeError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for service-layer operations.
pub type AppResult<T> = Result<T, AppError>;
