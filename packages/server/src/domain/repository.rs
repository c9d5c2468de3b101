//! Repository trait for peer storage.
//!
//! The domain layer owns the abstraction; implementations live in
//! `crate::infrastructure::repository` (依存性の逆転).

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    entity::{Peer, Room},
    error::RepositoryError,
    value_object::{PeerAddress, RoomToken},
};

/// Connected peers, grouped into rooms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeerRepository: Send + Sync {
    /// Register a peer together with the channel that feeds its socket
    async fn add_peer(
        &self,
        peer: Peer,
        sender: UnboundedSender<String>,
    ) -> Result<(), RepositoryError>;

    /// Unregister a peer and return it
    async fn remove_peer(&self, address: &PeerAddress) -> Result<Peer, RepositoryError>;

    /// Look up a peer by address
    async fn get_peer(&self, address: &PeerAddress) -> Result<Peer, RepositoryError>;

    /// Senders of every peer in `room` except `exclude`
    async fn room_senders(
        &self,
        room: &RoomToken,
        exclude: &PeerAddress,
    ) -> Vec<(PeerAddress, UnboundedSender<String>)>;

    /// All rooms with at least one peer, ordered by token
    async fn list_rooms(&self) -> Vec<Room>;

    /// One room, if any peer is in it
    async fn get_room(&self, token: &RoomToken) -> Option<Room>;

    /// Number of connected peers
    async fn count_peers(&self) -> usize;
}
