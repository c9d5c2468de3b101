//! インメモリ実装

mod peer;

pub use peer::InMemoryPeerRepository;
