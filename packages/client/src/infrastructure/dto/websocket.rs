//! WebSocket frame DTOs exchanged with the relay server.

use serde::{Deserialize, Serialize};

/// Plaintext value that asks every other peer to run the role draw.
pub const START_COMMAND: &str = "/start";

/// Presence frame: `{"meta": 0|1, "sender_addr": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaFrameDto {
    /// 0 = connected, 1 = disconnected
    pub meta: u8,
    pub sender_addr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Plaintext frame relayed from another peer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaintextFrameDto {
    pub plaintext: String,
    #[serde(default)]
    pub name: String,
    pub sender_addr: String,
}

/// Frame sent by this client.
///
/// The sender address is assigned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundFrame {
    pub plaintext: String,
    pub name: String,
}

impl OutboundFrame {
    /// Chat text
    pub fn chat(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            plaintext: text.into(),
            name: name.into(),
        }
    }

    /// Name announcement (also used as keep-alive)
    pub fn name_announcement(name: impl Into<String>) -> Self {
        Self::chat(String::new(), name)
    }

    /// Role-draw command
    pub fn start(name: impl Into<String>) -> Self {
        Self::chat(START_COMMAND, name)
    }
}
