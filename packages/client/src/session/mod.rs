//! Connection state machine for one chat session.
//!
//! [`Session`] is pure: it never touches the network or a timer. Transport
//! events and user actions go in, [`Effect`]s come out, and the driver in
//! [`crate::infrastructure::client`] carries them out. Any concurrency model
//! that can deliver events one at a time can drive it.

mod effect;
mod event;
mod state;

pub use effect::Effect;
pub use event::SessionEvent;
pub use state::{ConnectionState, Epoch};

use crate::{
    domain::{
        ChatContent, ChatEntry, ChatKind, ChatLog, Participant, Picker, PresenceEvent, RoomPath,
        Roster, SenderAddress, draw_role,
    },
    infrastructure::{
        codec::{InboundFrame, decode},
        dto::websocket::{OutboundFrame, START_COMMAND},
    },
};

/// Snapshot handed to the hosting shell for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub state: ConnectionState,
    pub room: RoomPath,
    pub display_name: String,
    pub entries: Vec<ChatEntry>,
    pub participants: Vec<Participant>,
}

/// One chat session: the active room, its roster and the chat history.
pub struct Session {
    state: ConnectionState,
    room: RoomPath,
    epoch: Epoch,
    display_name: String,
    roster: Roster,
    chat_log: ChatLog,
    picker: Box<dyn Picker>,
}

impl Session {
    /// Create a session for `room` and request its transport.
    ///
    /// The session starts in `Connecting`; the returned effects open the transport.
    pub fn connect(
        room: RoomPath,
        display_name: impl Into<String>,
        picker: Box<dyn Picker>,
    ) -> (Self, Vec<Effect>) {
        let epoch = Epoch::new(1);
        let session = Self {
            state: ConnectionState::Connecting,
            room: room.clone(),
            epoch,
            display_name: display_name.into(),
            roster: Roster::new(),
            chat_log: ChatLog::new(),
            picker,
        };
        tracing::info!(%room, %epoch, "connecting");
        (session, vec![Effect::OpenTransport { epoch, room }])
    }

    /// Single dispatcher for transport events.
    ///
    /// Events from an older epoch are ignored.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        if event.epoch() != self.epoch {
            tracing::debug!(
                stale = %event.epoch(),
                current = %self.epoch,
                "ignoring event from a torn down transport"
            );
            return Vec::new();
        }

        match event {
            SessionEvent::TransportOpened { epoch } => self.on_opened(epoch),
            SessionEvent::TransportClosed { .. } => self.on_closed(),
            SessionEvent::KeepAliveTick { .. } => self.on_keep_alive(),
            SessionEvent::FrameReceived { text, .. } => {
                if self.state == ConnectionState::Open {
                    tracing::debug!(frame = %text, "received frame");
                    self.dispatch(decode(&text));
                } else {
                    tracing::debug!(state = %self.state, "dropping frame received while not open");
                }
                Vec::new()
            }
        }
    }

    fn on_opened(&mut self, epoch: Epoch) -> Vec<Effect> {
        if self.state != ConnectionState::Connecting {
            tracing::warn!(state = %self.state, "transport opened in unexpected state");
            return Vec::new();
        }
        self.state = ConnectionState::Open;
        tracing::info!(room = %self.room, "joined room");
        self.chat_log.append(
            ChatContent::Joined {
                room: self.room.clone(),
            },
            SenderAddress::Local,
            ChatKind::Meta,
        );
        vec![Effect::StartKeepAlive { epoch }]
    }

    fn on_closed(&mut self) -> Vec<Effect> {
        if self.state == ConnectionState::Closed {
            return Vec::new();
        }
        self.state = ConnectionState::Closed;
        tracing::info!(room = %self.room, "connection closed");
        vec![Effect::StopKeepAlive]
    }

    fn on_keep_alive(&mut self) -> Vec<Effect> {
        if self.state != ConnectionState::Open {
            return Vec::new();
        }
        vec![Effect::SendFrame(OutboundFrame::name_announcement(
            self.display_name.clone(),
        ))]
    }

    fn dispatch(&mut self, frame: InboundFrame) {
        match frame {
            InboundFrame::Presence { event, sender_addr } => {
                match event {
                    PresenceEvent::Connected => self.roster.upsert(sender_addr.clone(), ""),
                    PresenceEvent::Disconnected => {
                        if !self.roster.remove(&sender_addr) {
                            tracing::debug!(%sender_addr, "disconnect for unknown participant");
                        }
                    }
                }
                self.chat_log.append(
                    ChatContent::Presence {
                        address: sender_addr.clone(),
                        event,
                    },
                    SenderAddress::Remote(sender_addr),
                    ChatKind::Meta,
                );
            }
            InboundFrame::NameAnnouncement { name, sender_addr } => {
                self.roster.upsert(sender_addr, name);
            }
            InboundFrame::StartCommand { name, sender_addr } => {
                self.roster.upsert(sender_addr.clone(), name);
                self.announce_role(sender_addr);
            }
            InboundFrame::PlaintextChat {
                text,
                name,
                sender_addr,
            } => {
                self.chat_log.append_named(
                    ChatContent::Text(text),
                    SenderAddress::Remote(sender_addr),
                    name,
                    ChatKind::Plaintext,
                );
            }
            InboundFrame::Unrecognized(e) => {
                tracing::warn!(error = %e, "dropping unrecognized frame");
            }
        }
    }

    fn announce_role(&mut self, sender_addr: String) {
        let candidates = self.roster.all_names();
        match draw_role(&candidates, self.picker.as_mut()) {
            Ok(name) => {
                tracing::info!(%sender_addr, santa = %name, "role drawn");
                self.chat_log.append(
                    ChatContent::RoleDrawn { name },
                    SenderAddress::Remote(sender_addr),
                    ChatKind::Meta,
                );
            }
            Err(e) => tracing::warn!(error = %e, %sender_addr, "role draw skipped"),
        }
    }

    /// Send chat text typed by the local user.
    ///
    /// Blank text is ignored. Text typed while the connection is not open is dropped.
    pub fn send_text(&mut self, text: &str) -> Vec<Effect> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        if self.state != ConnectionState::Open {
            tracing::warn!(state = %self.state, "not connected, message dropped");
            return Vec::new();
        }
        self.chat_log.append(
            ChatContent::Text(text.to_string()),
            SenderAddress::Local,
            ChatKind::Local,
        );
        vec![Effect::SendFrame(OutboundFrame::chat(
            text,
            self.display_name.clone(),
        ))]
    }

    /// Send the `/start` command to the other participants.
    pub fn start_draw(&mut self) -> Vec<Effect> {
        self.send_text(START_COMMAND)
    }

    /// Commit a new display name and announce it when connected.
    ///
    /// Keep-alive frames carry the committed name from now on.
    pub fn set_name(&mut self, name: impl Into<String>) -> Vec<Effect> {
        self.display_name = name.into();
        if self.state != ConnectionState::Open {
            return Vec::new();
        }
        vec![Effect::SendFrame(OutboundFrame::name_announcement(
            self.display_name.clone(),
        ))]
    }

    /// Switch to another room.
    ///
    /// The current transport is torn down completely (keep-alive stopped,
    /// transport closed, roster cleared, grouping reset) before the new one is
    /// requested. Re-selecting the active room is a no-op unless the session is
    /// closed, in which case it reconnects.
    pub fn change_room(&mut self, room: RoomPath) -> Vec<Effect> {
        if room == self.room && self.state != ConnectionState::Closed {
            tracing::debug!(%room, "already in room");
            return Vec::new();
        }

        let mut effects = self.teardown();
        self.epoch = self.epoch.next();
        self.room = room.clone();
        self.state = ConnectionState::Connecting;
        tracing::info!(%room, epoch = %self.epoch, "connecting");
        effects.push(Effect::OpenTransport {
            epoch: self.epoch,
            room,
        });
        effects
    }

    /// Close the session locally.
    ///
    /// The state stays `Closing` until the transport reports it closed.
    pub fn shutdown(&mut self) -> Vec<Effect> {
        if matches!(
            self.state,
            ConnectionState::Closing | ConnectionState::Closed
        ) {
            return Vec::new();
        }
        let effects = self.teardown();
        self.state = ConnectionState::Closing;
        effects
    }

    fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::StopKeepAlive];
        if matches!(
            self.state,
            ConnectionState::Connecting | ConnectionState::Open
        ) {
            effects.push(Effect::CloseTransport { epoch: self.epoch });
        }
        self.roster.clear();
        self.chat_log.reset_grouping();
        effects
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn room(&self) -> &RoomPath {
        &self.room
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn chat_log(&self) -> &ChatLog {
        &self.chat_log
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.state,
            room: self.room.clone(),
            display_name: self.display_name.clone(),
            entries: self.chat_log.entries().to_vec(),
            participants: self.roster.participants(),
        }
    }
}
