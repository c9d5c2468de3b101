//! HTTP API response DTOs for the relay server.

use serde::{Deserialize, Serialize};

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub token: String,
    pub peers: Vec<String>,
    pub opened_at: Option<String>, // ISO 8601
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub token: String,
    pub peers: Vec<PeerDetailDto>,
    pub opened_at: Option<String>, // ISO 8601
}

/// Peer detail for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerDetailDto {
    pub address: String,
    pub connected_at: String, // ISO 8601
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub peers: usize,
}
