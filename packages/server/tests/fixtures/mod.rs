//! Shared fixtures for the relay server integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{client::IntoClientRequest, http::HeaderValue},
};

pub type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Relay server running in-process on an ephemeral port.
///
/// The server shuts down when the fixture is dropped.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let (shutdown, signal) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let shutdown = async {
                let _ = signal.await;
            };
            if let Err(e) = santa_room_server::serve(listener, shutdown).await {
                eprintln!("test server stopped with error: {e}");
            }
        });

        Self {
            addr,
            shutdown: Some(shutdown),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Open a raw WebSocket connection with `token` as sub-protocol.
    pub async fn connect(&self, token: &str) -> WsStream {
        let mut request = self
            .ws_url()
            .into_client_request()
            .expect("Failed to build request");
        request.headers_mut().insert(
            "Sec-WebSocket-Protocol",
            HeaderValue::from_str(token).expect("Invalid token"),
        );
        let (stream, response) = connect_async(request)
            .await
            .expect("Failed to connect to test server");
        assert_eq!(
            response
                .headers()
                .get("Sec-WebSocket-Protocol")
                .and_then(|v| v.to_str().ok()),
            Some(token)
        );
        stream
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.handle.abort();
    }
}
