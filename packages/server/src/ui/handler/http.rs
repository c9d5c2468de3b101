//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use santa_room_shared::time::timestamp_to_jst_rfc3339;

use crate::{
    domain::{Room, RoomToken},
    infrastructure::dto::http::{HealthDto, PeerDetailDto, RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        peers: state.repository.count_peers().await,
    })
}

/// Get list of active rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.repository.list_rooms().await;
    Json(rooms.iter().map(room_summary).collect())
}

/// Get room detail by token
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let token = RoomToken::new(token).map_err(|_| StatusCode::NOT_FOUND)?;
    let room = state
        .repository
        .get_room(&token)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(RoomDetailDto {
        token: room.token.as_str().to_string(),
        peers: room
            .peers
            .iter()
            .map(|p| PeerDetailDto {
                address: p.address.to_string(),
                connected_at: timestamp_to_jst_rfc3339(p.connected_at.value()),
            })
            .collect(),
        opened_at: opened_at(&room),
    }))
}

fn room_summary(room: &Room) -> RoomSummaryDto {
    RoomSummaryDto {
        token: room.token.as_str().to_string(),
        peers: room.peers.iter().map(|p| p.address.to_string()).collect(),
        opened_at: opened_at(room),
    }
}

fn opened_at(room: &Room) -> Option<String> {
    room.opened_at()
        .map(|timestamp| timestamp_to_jst_rfc3339(timestamp.value()))
}
