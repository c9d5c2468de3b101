//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{fmt, net::SocketAddr};

use super::error::ValueObjectError;

/// Maximum length of a room token
pub const ROOM_TOKEN_MAX_LEN: usize = 256;

/// Room token value object.
///
/// The first `Sec-WebSocket-Protocol` value sent by a client. Peers that sent
/// the same token share a room.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomToken(String);

impl RoomToken {
    /// Create a new RoomToken.
    ///
    /// # Arguments
    ///
    /// * `token` - The sub-protocol token string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomToken or an error if validation fails
    pub fn new(token: String) -> Result<Self, ValueObjectError> {
        if token.is_empty() {
            return Err(ValueObjectError::RoomTokenEmpty);
        }
        let len = token.len();
        if len > ROOM_TOKEN_MAX_LEN {
            return Err(ValueObjectError::RoomTokenTooLong {
                max: ROOM_TOKEN_MAX_LEN,
                actual: len,
            });
        }
        if let Some(c) = token
            .chars()
            .find(|c| !c.is_ascii_graphic() || *c == ',')
        {
            return Err(ValueObjectError::RoomTokenInvalidCharacter(c.to_string()));
        }
        Ok(Self(token))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomToken {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Peer address value object.
///
/// The remote socket address of a connection; it is what the relay sends to
/// the other peers as `sender_addr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeerAddress(SocketAddr);

impl PeerAddress {
    pub fn new(addr: SocketAddr) -> Self {
        Self(addr)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.0
    }
}

impl From<SocketAddr> for PeerAddress {
    fn from(addr: SocketAddr) -> Self {
        Self(addr)
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(santa_room_shared::time::get_jst_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
