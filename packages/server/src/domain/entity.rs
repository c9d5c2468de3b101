//! Core domain models for the relay server.

use serde::{Deserialize, Serialize};

use super::value_object::{PeerAddress, RoomToken, Timestamp};

/// A connected WebSocket peer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    /// Remote socket address
    pub address: PeerAddress,
    /// Room the peer joined with its sub-protocol token
    pub room: RoomToken,
    /// Timestamp when the peer connected
    pub connected_at: Timestamp,
}

impl Peer {
    /// Create a new peer
    pub fn new(address: PeerAddress, room: RoomToken, connected_at: Timestamp) -> Self {
        Self {
            address,
            room,
            connected_at,
        }
    }
}

/// A room: every peer currently connected with the same token.
///
/// Rooms are not stored; they exist while at least one peer is in them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room token
    pub token: RoomToken,
    /// Peers in connection order
    pub peers: Vec<Peer>,
}

impl Room {
    /// Build a room from its peers, ordered by connection time then address
    pub fn new(token: RoomToken, mut peers: Vec<Peer>) -> Self {
        peers.sort_by(|a, b| {
            a.connected_at
                .cmp(&b.connected_at)
                .then_with(|| a.address.cmp(&b.address))
        });
        Self { token, peers }
    }

    /// When the first peer still present connected
    pub fn opened_at(&self) -> Option<Timestamp> {
        self.peers.first().map(|p| p.connected_at)
    }

    /// Whether the peer is in the room
    pub fn contains(&self, address: &PeerAddress) -> bool {
        self.peers.iter().any(|p| &p.address == address)
    }
}
