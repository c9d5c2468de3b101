//! Santa Room chat client.
//!
//! The real-time messaging core (roster, chat log, role draw and the connection
//! state machine) plus a terminal shell that hosts it.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod session;
pub mod ui;

// Re-export entry points
pub use config::ClientConfig;
pub use error::ClientError;
pub use infrastructure::ChatClient;
pub use ui::run as run_client;
