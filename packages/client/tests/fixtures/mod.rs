//! Shared fixtures for the client integration tests.

#![allow(dead_code)]

use std::time::Duration;

use santa_room_client::{ChatClient, ClientConfig, domain::RoomPath, session::SessionView};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// Keep-alive period used by the test clients
pub const KEEP_ALIVE: Duration = Duration::from_millis(100);

/// How long to wait for a client to reach an expected view
pub const WAIT: Duration = Duration::from_secs(5);

/// Relay server running in-process on an ephemeral port.
pub struct TestRelay {
    url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestRelay {
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
                eprintln!("test relay stopped with error: {e}");
            }
        });

        Self {
            url: format!("ws://{addr}/ws"),
            shutdown: Some(shutdown),
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Client config pointing at this relay
    pub fn config(&self, room: &str, name: &str) -> ClientConfig {
        ClientConfig::new(self.url.clone())
            .with_room(RoomPath::from_room_name(room).expect("Invalid room name"))
            .with_display_name(name)
            .with_keep_alive_interval(KEEP_ALIVE)
    }
}

impl Drop for TestRelay {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.handle.abort();
    }
}

/// Wait until the client's view satisfies `predicate`
pub async fn wait_for(
    client: &ChatClient,
    predicate: impl FnMut(&SessionView) -> bool,
) -> SessionView {
    let mut views = client.subscribe();
    tokio::time::timeout(WAIT, views.wait_for(predicate))
        .await
        .expect("Timed out waiting for the expected view")
        .expect("Client stopped")
        .clone()
}
