//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Room name validation error
    #[error("Room name cannot be empty")]
    RoomNameEmpty,

    /// Room path validation error
    #[error("Room path cannot be empty")]
    RoomPathEmpty,

    /// Room path must be absolute (start with '/')
    #[error("Room path must start with '/' (got: {0})")]
    RoomPathNotAbsolute(String),

    /// Room path exceeds the length the relay accepts
    #[error("Room path too long (max: {max}, actual: {actual})")]
    RoomPathTooLong { max: usize, actual: usize },
}

/// Errors produced while decoding an inbound frame.
///
/// A decode error never ends the session: the frame is logged and dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The frame is JSON but not an object
    #[error("frame is not a JSON object")]
    NotAnObject,

    /// The distinguishing field is present but the rest of the shape is wrong
    #[error("malformed {shape} frame: {reason}")]
    Malformed { shape: &'static str, reason: String },

    /// Presence frame with a `meta` value other than connected/disconnected
    #[error("unknown presence event: {0}")]
    UnknownPresenceEvent(u8),

    /// None of the known distinguishing fields is present
    #[error("unrecognized frame shape (fields: {0})")]
    UnrecognizedShape(String),
}

/// Errors related to the role-draw command
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleDrawError {
    /// There is nobody to draw from
    #[error("cannot draw a role from an empty roster")]
    EmptyRoster,

    /// The picker returned an index outside the candidate list
    #[error("picked index {index} is out of range for {len} candidates")]
    PickOutOfRange { index: usize, len: usize },
}
