// Error types for Executor module

use thiserror::Error;

/// Executor error types
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Failed to spawn process '{0}': {1}")]
    SpawnFailed(String, #[source] std::io::Error),

    #[error("Interrupted while waiting for process '{0}'")]
    Interrupted(String),

    #[error("Failed to wait for process '{0}': {1}")]
    Wait(String, #[source] std::io::Error),

    #[error("Failed to read process output: {0}")]
    OutputRead(#[source] std::io::Error),

    #[error("Process output is no longer available")]
    OutputUnavailable,
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
