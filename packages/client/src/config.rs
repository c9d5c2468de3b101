//! Client configuration.

use std::time::Duration;

use crate::domain::RoomPath;

/// Relay server used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8080";

/// Interval between keep-alive name announcements.
pub const DEFAULT_KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(3);

/// Shortest keep-alive period; shorter values are raised to it.
pub const MIN_KEEP_ALIVE_INTERVAL: Duration = Duration::from_millis(1);

/// Settings for one [`crate::ChatClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// WebSocket URL of the relay server
    pub server_url: String,
    /// Room to join first
    pub room: RoomPath,
    /// Display name announced to the other participants
    pub display_name: String,
    /// Keep-alive period
    pub keep_alive_interval: Duration,
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            room: RoomPath::root(),
            display_name: String::new(),
            keep_alive_interval: DEFAULT_KEEP_ALIVE_INTERVAL,
        }
    }

    pub fn with_room(mut self, room: RoomPath) -> Self {
        self.room = room;
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_keep_alive_interval(mut self, interval: Duration) -> Self {
        self.keep_alive_interval = interval.max(MIN_KEEP_ALIVE_INTERVAL);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}
