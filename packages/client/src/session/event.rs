//! Events fed into the session by the transport driver.

use super::state::Epoch;

/// Something that happened to the transport of a given epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The transport finished its handshake
    TransportOpened { epoch: Epoch },
    /// A text frame arrived
    FrameReceived { epoch: Epoch, text: String },
    /// The transport closed (peer-initiated, local, or failed to connect)
    TransportClosed { epoch: Epoch },
    /// The keep-alive timer fired
    KeepAliveTick { epoch: Epoch },
}

impl SessionEvent {
    pub fn epoch(&self) -> Epoch {
        match self {
            Self::TransportOpened { epoch }
            | Self::FrameReceived { epoch, .. }
            | Self::TransportClosed { epoch }
            | Self::KeepAliveTick { epoch } => *epoch,
        }
    }
}
