//! Server-level error definitions.

use std::io;

use thiserror::Error;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },

    /// The HTTP server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
