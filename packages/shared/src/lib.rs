//! Shared utilities for Santa Room.
//!
//! Logger setup and JST time helpers used by both the relay server and the client.

pub mod logger;
pub mod time;
