//! Error types for the invocation boundary.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type for invocation operations.
pub type InvokeResult<T> = Result<T, InvokeError>;

#[derive(Debug, Error)]
pub enum InvokeError {
    /// The simulation binary could not be found at startup resolution.
    #[error("Simulation executable not found: {path}")]
    ExecutableNotFound { path: PathBuf },

    /// The process could not be started at all.
    #[error("Failed to launch simulation executable: {path}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited with a non-zero status. Its stderr goes to
    /// the diagnostic channel, not into this payload.
    #[error("Simulation process failed: {status}")]
    ProcessFailed { status: ExitStatus },
}
