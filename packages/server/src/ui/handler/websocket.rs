//! WebSocket connection handlers.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header::SEC_WEBSOCKET_PROTOCOL},
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{PeerAddress, RoomToken},
    ui::state::AppState,
    usecase::{
        ConnectError, ConnectPeerUseCase, DisconnectPeerUseCase, RelayError, RelayMessageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    // The first sub-protocol value names the room
    let Some(room) = room_token(&headers) else {
        tracing::warn!("Peer '{}' did not send a room token", addr);
        return Err(StatusCode::BAD_REQUEST);
    };
    let address = PeerAddress::from(addr);

    // Create a channel for this peer to receive frames
    let (tx, rx) = mpsc::unbounded_channel();

    // Use ConnectPeerUseCase to register the peer and notify its room
    let connect_usecase = ConnectPeerUseCase::new(state.repository.clone());
    match connect_usecase.execute(address, room.clone(), tx).await {
        Ok(notified) => {
            tracing::info!(
                "Peer '{}' joined room '{}' ({} peer(s) notified)",
                address,
                room,
                notified
            );
            let cleanup_state = state.clone();
            Ok(ws
                .protocols([room.into_string()])
                .on_failed_upgrade(move |e| {
                    tracing::warn!("WebSocket upgrade for '{}' failed: {}", address, e);
                    tokio::spawn(async move {
                        let disconnect_usecase =
                            DisconnectPeerUseCase::new(cleanup_state.repository.clone());
                        let _ = disconnect_usecase.execute(address).await;
                    });
                })
                .on_upgrade(move |socket| handle_socket(socket, state, address, rx)))
        }
        Err(ConnectError::DuplicatePeer(_)) => {
            tracing::warn!(
                "Peer '{}' is already connected. Rejecting connection.",
                address
            );
            Err(StatusCode::CONFLICT)
        }
        Err(e @ ConnectError::Encode(_)) => {
            tracing::error!("Failed to register peer '{}': {}", address, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn room_token(headers: &HeaderMap) -> Option<RoomToken> {
    let value = headers.get(SEC_WEBSOCKET_PROTOCOL)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    RoomToken::new(first.to_string()).ok()
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    address: PeerAddress,
    mut rx: mpsc::UnboundedReceiver<String>,
) {
    let (mut sender, mut receiver) = socket.split();
    let state_clone = state.clone();

    // Spawn a task to receive frames from this peer
    let mut recv_task = tokio::spawn(async move {
        let relay_usecase = RelayMessageUseCase::new(state_clone.repository.clone());
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error from '{}': {}", address, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received frame from '{}': {}", address, text.as_str());
                    match relay_usecase.execute(address, text.as_str()).await {
                        Ok(relayed) => {
                            tracing::debug!(
                                "Relayed frame from '{}' to {} peer(s)",
                                address,
                                relayed
                            );
                        }
                        Err(RelayError::EmptyFrame) => {}
                        Err(e) => {
                            tracing::warn!("Dropped frame from '{}': {}", address, e);
                        }
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Peer '{}' requested close", address);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to forward frames from the room to this peer
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Use DisconnectPeerUseCase to unregister the peer and notify its room
    let disconnect_usecase = DisconnectPeerUseCase::new(state.repository.clone());
    match disconnect_usecase.execute(address).await {
        Ok(notified) => {
            tracing::info!(
                "Peer '{}' disconnected ({} peer(s) notified)",
                address,
                notified
            );
        }
        Err(e) => {
            tracing::warn!("Failed to disconnect peer '{}': {}", address, e);
        }
    }
}
