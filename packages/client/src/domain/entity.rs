//! Core domain models for the chat client.

use std::fmt;

use super::value_object::{RoomPath, SenderAddress, Timestamp};

/// Kind of a chat entry, used together with the sender for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatKind {
    /// Connection notices and announcements
    Meta,
    /// Chat text from a remote participant
    Plaintext,
    /// Chat text typed by the local user
    Local,
}

/// Presence change reported by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceEvent {
    Connected,
    Disconnected,
}

/// Content of a chat entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatContent {
    /// Free chat text
    Text(String),
    /// The local user joined a room
    Joined { room: RoomPath },
    /// A remote participant connected or disconnected
    Presence {
        address: String,
        event: PresenceEvent,
    },
    /// Result of a `/start` role draw
    RoleDrawn { name: String },
}

impl fmt::Display for ChatContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Joined { room } => write!(f, "You have joined the chat room {room}"),
            Self::Presence {
                address,
                event: PresenceEvent::Connected,
            } => write!(f, "Client {address} connected"),
            Self::Presence {
                address,
                event: PresenceEvent::Disconnected,
            } => write!(f, "Client {address} disconnected"),
            Self::RoleDrawn { name } => {
                write!(f, "Congratulations, the draw is done. The santa is: {name}")
            }
        }
    }
}

/// One line of chat history.
///
/// Entries are created by the chat log and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    /// What to display
    pub content: ChatContent,
    /// When the entry was appended (advisory, the log is ordered by arrival)
    pub timestamp: Timestamp,
    /// Who the entry is attributed to
    pub sender: SenderAddress,
    /// Display name supplied with the frame, if any
    pub sender_name: Option<String>,
    /// Whether this entry starts a new group and should show its sender
    pub show_sender_label: bool,
    /// Entry kind
    pub kind: ChatKind,
}

impl ChatEntry {
    /// Label to show above the entry: the sender name when known, otherwise the address.
    pub fn sender_label(&self) -> &str {
        if self.sender.is_local() {
            return "You";
        }
        match self.sender_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.sender.as_str(),
        }
    }
}

/// A remote party currently in the room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Transport-assigned address
    pub address: String,
    /// Display name, empty when unset
    pub display_name: String,
}

impl Participant {
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: display_name.into(),
        }
    }

    /// Display name, or the address when no name was announced yet.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.address
        } else {
            &self.display_name
        }
    }
}
