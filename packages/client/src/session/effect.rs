//! Effects produced by session transitions

use crate::{domain::RoomPath, infrastructure::dto::websocket::OutboundFrame};

use super::state::Epoch;

/// Work the driver must carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open a transport for the room, tagging its events with `epoch`
    OpenTransport { epoch: Epoch, room: RoomPath },

    /// Send a frame on the current transport (fire and forget)
    SendFrame(OutboundFrame),

    /// Close the transport of `epoch` and report it closed
    CloseTransport { epoch: Epoch },

    /// Start the periodic keep-alive for `epoch`
    StartKeepAlive { epoch: Epoch },

    /// Cancel the keep-alive, if any
    StopKeepAlive,
}
