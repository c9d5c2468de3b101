//! WebSocket frame DTOs for the relay server.
//!
//! The relay never looks inside `plaintext`; it only stamps frames with the
//! sender's address and fans them out to the rest of the room.

use serde::{Deserialize, Serialize};

/// `meta` value announcing a connected peer
pub const META_CONNECTED: u8 = 0;

/// `meta` value announcing a disconnected peer
pub const META_DISCONNECTED: u8 = 1;

/// Frame sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFrame {
    pub plaintext: String,
    #[serde(default)]
    pub name: String,
}

/// Client frame as relayed to the other peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayedFrame {
    pub plaintext: String,
    pub name: String,
    pub sender_addr: String,
}

impl RelayedFrame {
    pub fn new(frame: ClientFrame, sender_addr: impl Into<String>) -> Self {
        Self {
            plaintext: frame.plaintext,
            name: frame.name,
            sender_addr: sender_addr.into(),
        }
    }
}

/// Presence notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceFrame {
    pub meta: u8,
    pub sender_addr: String,
}

impl PresenceFrame {
    pub fn connected(sender_addr: impl Into<String>) -> Self {
        Self {
            meta: META_CONNECTED,
            sender_addr: sender_addr.into(),
        }
    }

    pub fn disconnected(sender_addr: impl Into<String>) -> Self {
        Self {
            meta: META_DISCONNECTED,
            sender_addr: sender_addr.into(),
        }
    }
}
