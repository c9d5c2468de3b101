//! Infrastructure layer: wire format, WebSocket transport and the tokio driver.

pub mod client;
pub mod codec;
pub mod dto;
pub mod keep_alive;
pub mod transport;

pub use client::ChatClient;
