//! Server startup and runtime errors.

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// Errors that terminate the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound, typically because the port is taken.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop exited with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("failed to install Prometheus recorder: {0}")]
    Metrics(#[from] BuildError),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
