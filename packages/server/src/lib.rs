//! Santa Room relay server.
//!
//! Groups WebSocket peers into rooms by their sub-protocol token and relays
//! frames between the peers of a room.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use error::ServerError;
pub use ui::{run as run_server, serve};
