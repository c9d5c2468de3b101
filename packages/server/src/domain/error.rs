//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomToken validation error
    #[error("RoomToken cannot be empty")]
    RoomTokenEmpty,

    /// RoomToken too long error
    #[error("RoomToken cannot exceed {max} characters (got {actual})")]
    RoomTokenTooLong { max: usize, actual: usize },

    /// RoomToken contains a character that cannot appear in a sub-protocol token
    #[error("RoomToken contains an invalid character (got: {0})")]
    RoomTokenInvalidCharacter(String),
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A peer with the same address is already registered
    #[error("Peer already connected: {0}")]
    PeerAlreadyConnected(String),

    /// No peer is registered under the address
    #[error("Peer not found: {0}")]
    PeerNotFound(String),
}
