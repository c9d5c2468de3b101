//! Domain layer for the relay server.
//!
//! This module contains the relay's model (peers grouped into rooms by token)
//! and the repository abstraction, independent of DTOs and the HTTP stack.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Peer, Room};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::PeerRepository;
pub use value_object::{PeerAddress, RoomToken, Timestamp};
