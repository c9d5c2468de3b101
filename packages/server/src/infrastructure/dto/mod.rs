//! Data transfer objects for the HTTP API and the WebSocket relay.

pub mod http;
pub mod websocket;
