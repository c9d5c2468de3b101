//! Server startup: router, listener and graceful shutdown.

use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{error::ServerError, infrastructure::repository::InMemoryPeerRepository};

use super::{
    handler::{get_room_detail, get_rooms, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router around `state`
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(websocket_handler))
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{token}", get(get_room_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` completes
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let repository = Arc::new(InMemoryPeerRepository::new());
    let state = Arc::new(AppState::new(repository));
    let app = router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    Ok(())
}

/// Bind `host:port` and serve until Ctrl-C or SIGTERM
pub async fn run(host: &str, port: u16) -> Result<(), ServerError> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Relay server listening on {}", addr);

    serve(listener, shutdown_signal()).await?;

    tracing::info!("Relay server stopped");
    Ok(())
}
