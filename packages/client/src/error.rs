//! Client-level error definitions.

use thiserror::Error;

use crate::domain::ValueObjectError;

/// Errors surfaced to the hosting shell.
///
/// Connection problems are not errors here: they show up as
/// [`crate::session::ConnectionState::Closed`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client event loop has already stopped
    #[error("chat client is no longer running")]
    Stopped,

    /// The client event loop panicked or was aborted
    #[error("chat client task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Invalid room or name input
    #[error(transparent)]
    InvalidInput(#[from] ValueObjectError),

    /// Terminal input failed
    #[error("terminal input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
