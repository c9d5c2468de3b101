//! WebSocket relay server implementation.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{router, run, serve};
