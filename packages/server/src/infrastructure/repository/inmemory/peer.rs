//! InMemory Peer Repository 実装
//!
//! ドメイン層が定義する PeerRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。ルームは保存せず、
//! 同じトークンを持つピアを集めて都度組み立てます。

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::domain::{Peer, PeerAddress, PeerRepository, RepositoryError, Room, RoomToken};

/// Registered peer with the channel feeding its socket
struct PeerEntry {
    peer: Peer,
    sender: UnboundedSender<String>,
}

/// インメモリ Peer Repository 実装
#[derive(Default)]
pub struct InMemoryPeerRepository {
    /// 接続中のピア（WebSocket sender を含む）
    peers: Arc<Mutex<HashMap<PeerAddress, PeerEntry>>>,
}

impl InMemoryPeerRepository {
    /// 新しい InMemoryPeerRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PeerRepository for InMemoryPeerRepository {
    async fn add_peer(
        &self,
        peer: Peer,
        sender: UnboundedSender<String>,
    ) -> Result<(), RepositoryError> {
        let mut peers = self.peers.lock().await;
        if peers.contains_key(&peer.address) {
            return Err(RepositoryError::PeerAlreadyConnected(
                peer.address.to_string(),
            ));
        }
        peers.insert(peer.address, PeerEntry { peer, sender });
        Ok(())
    }

    async fn remove_peer(&self, address: &PeerAddress) -> Result<Peer, RepositoryError> {
        let mut peers = self.peers.lock().await;
        peers
            .remove(address)
            .map(|entry| entry.peer)
            .ok_or_else(|| RepositoryError::PeerNotFound(address.to_string()))
    }

    async fn get_peer(&self, address: &PeerAddress) -> Result<Peer, RepositoryError> {
        let peers = self.peers.lock().await;
        peers
            .get(address)
            .map(|entry| entry.peer.clone())
            .ok_or_else(|| RepositoryError::PeerNotFound(address.to_string()))
    }

    async fn room_senders(
        &self,
        room: &RoomToken,
        exclude: &PeerAddress,
    ) -> Vec<(PeerAddress, UnboundedSender<String>)> {
        let peers = self.peers.lock().await;
        peers
            .values()
            .filter(|entry| &entry.peer.room == room && &entry.peer.address != exclude)
            .map(|entry| (entry.peer.address, entry.sender.clone()))
            .collect()
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let peers = self.peers.lock().await;
        let mut rooms: BTreeMap<RoomToken, Vec<Peer>> = BTreeMap::new();
        for entry in peers.values() {
            rooms
                .entry(entry.peer.room.clone())
                .or_default()
                .push(entry.peer.clone());
        }
        rooms
            .into_iter()
            .map(|(token, peers)| Room::new(token, peers))
            .collect()
    }

    async fn get_room(&self, token: &RoomToken) -> Option<Room> {
        let peers = self.peers.lock().await;
        let members: Vec<Peer> = peers
            .values()
            .filter(|entry| &entry.peer.room == token)
            .map(|entry| entry.peer.clone())
            .collect();
        if members.is_empty() {
            None
        } else {
            Some(Room::new(token.clone(), members))
        }
    }

    async fn count_peers(&self) -> usize {
        let peers = self.peers.lock().await;
        peers.len()
    }
}
