//! WebSocket transport to the relay server.
//!
//! Thin wrapper around `tokio-tungstenite` that opens a connection with the
//! room token as sub-protocol and splits it into a writer and a reader half.

use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream,
    tungstenite::{
        self, Message,
        client::IntoClientRequest,
        http::{HeaderValue, header::SEC_WEBSOCKET_PROTOCOL, header::InvalidHeaderValue},
    },
};

use crate::domain::RoomPath;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Errors raised by the transport.
///
/// The session only ever sees them as a closed connection.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("room token is not a valid header value: {0}")]
    InvalidRoomToken(#[from] InvalidHeaderValue),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),
}

/// Write half of the connection.
#[derive(Debug)]
pub struct TransportWriter {
    sink: SplitSink<WsStream, Message>,
}

impl TransportWriter {
    /// Send a UTF-8 text frame.
    pub async fn send_text(&mut self, text: String) -> Result<(), TransportError> {
        self.sink.send(Message::Text(text.into())).await?;
        Ok(())
    }

    /// Send a close frame and flush.
    pub async fn close(&mut self) -> Result<(), TransportError> {
        self.sink.close().await?;
        Ok(())
    }
}

/// Read half of the connection.
#[derive(Debug)]
pub struct TransportReader {
    stream: SplitStream<WsStream>,
}

impl TransportReader {
    /// Next text frame, or `None` once the peer closed the connection.
    ///
    /// Binary and control frames are skipped.
    pub async fn next_text(&mut self) -> Option<Result<String, TransportError>> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text.to_string())),
                Ok(Message::Close(frame)) => {
                    tracing::debug!(?frame, "peer closed the connection");
                    return None;
                }
                Ok(other) => {
                    tracing::trace!(?other, "skipping non-text frame");
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Connect to `server_url`, joining `room`.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the room token cannot be sent as a
/// header, or the WebSocket handshake fails.
pub async fn connect(
    server_url: &str,
    room: &RoomPath,
) -> Result<(TransportWriter, TransportReader), TransportError> {
    let mut request = server_url.into_client_request()?;
    let token = HeaderValue::from_str(&room.protocol_token())?;
    request.headers_mut().insert(SEC_WEBSOCKET_PROTOCOL, token);

    let (stream, _response) = tokio_tungstenite::connect_async(request).await?;
    tracing::debug!(%server_url, %room, "WebSocket handshake complete");

    let (sink, stream) = stream.split();
    Ok((TransportWriter { sink }, TransportReader { stream }))
}
