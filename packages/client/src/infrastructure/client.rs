//! Tokio driver for a [`Session`].
//!
//! [`ChatClient`] is a thin handle that talks to a background event loop over
//! an unbounded MPSC channel. The loop owns the session, the transport and the
//! keep-alive timer, and processes one event at a time: user commands, transport
//! events and keep-alive ticks all go through [`Session`] in arrival order.
//! After every event the loop publishes a [`SessionView`] on a watch channel.

use std::{collections::VecDeque, time::Duration};

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};

use crate::{
    config::ClientConfig,
    domain::{Picker, RandomPicker, RoomPath},
    error::ClientError,
    session::{ConnectionState, Effect, Epoch, Session, SessionEvent, SessionView},
};

use super::{
    codec::encode,
    dto::websocket::OutboundFrame,
    keep_alive::KeepAlive,
    transport::{self, TransportWriter},
};

/// User actions forwarded to the event loop
#[derive(Debug)]
enum ClientCommand {
    SendText(String),
    SetName(String),
    StartDraw,
    ChangeRoom(RoomPath),
    Shutdown,
}

/// Events produced by background tasks
enum LoopEvent {
    /// Handshake finished; hands the write half over to the loop
    Connected {
        epoch: Epoch,
        writer: TransportWriter,
    },
    Session(SessionEvent),
}

/// Handle to a running chat client.
pub struct ChatClient {
    commands: mpsc::UnboundedSender<ClientCommand>,
    view: watch::Receiver<SessionView>,
    task: JoinHandle<()>,
}

impl ChatClient {
    /// Start a client with a uniform random role draw.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: ClientConfig) -> Self {
        Self::start_with_picker(config, Box::new(RandomPicker))
    }

    /// Start a client with a custom picker for the role draw.
    pub fn start_with_picker(config: ClientConfig, picker: Box<dyn Picker>) -> Self {
        let (session, effects) = Session::connect(config.room, config.display_name, picker);
        let (view_tx, view) = watch::channel(session.view());
        let (commands, commands_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let driver = Driver {
            session,
            server_url: config.server_url,
            keep_alive_interval: config.keep_alive_interval,
            events_tx,
            writer: None,
            connection: None,
            keep_alive: None,
            view_tx,
        };
        let task = tokio::spawn(driver.run(effects, commands_rx, events_rx));

        Self {
            commands,
            view,
            task,
        }
    }

    /// Send chat text. Blank text is ignored.
    pub fn send_text(&self, text: impl Into<String>) -> Result<(), ClientError> {
        self.command(ClientCommand::SendText(text.into()))
    }

    /// Commit a new display name and announce it.
    pub fn set_name(&self, name: impl Into<String>) -> Result<(), ClientError> {
        self.command(ClientCommand::SetName(name.into()))
    }

    /// Ask the other participants to draw the santa.
    pub fn start_draw(&self) -> Result<(), ClientError> {
        self.command(ClientCommand::StartDraw)
    }

    /// Leave the current room and join `room`.
    pub fn change_room(&self, room: RoomPath) -> Result<(), ClientError> {
        self.command(ClientCommand::ChangeRoom(room))
    }

    /// Latest snapshot.
    pub fn view(&self) -> SessionView {
        self.view.borrow().clone()
    }

    /// Receiver notified after every processed event.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view.clone()
    }

    /// Close the connection and wait for the event loop to finish.
    pub async fn shutdown(self) -> Result<SessionView, ClientError> {
        // The loop may already be gone; joining still reports how it ended.
        let _ = self.commands.send(ClientCommand::Shutdown);
        self.task.await?;
        Ok(self.view.borrow().clone())
    }

    fn command(&self, command: ClientCommand) -> Result<(), ClientError> {
        self.commands
            .send(command)
            .map_err(|_| ClientError::Stopped)
    }
}

struct Driver {
    session: Session,
    server_url: String,
    keep_alive_interval: Duration,
    events_tx: mpsc::UnboundedSender<LoopEvent>,
    writer: Option<TransportWriter>,
    /// Connect-then-read task of the current transport
    connection: Option<JoinHandle<()>>,
    keep_alive: Option<KeepAlive>,
    view_tx: watch::Sender<SessionView>,
}

impl Driver {
    async fn run(
        mut self,
        initial: Vec<Effect>,
        mut commands: mpsc::UnboundedReceiver<ClientCommand>,
        mut events: mpsc::UnboundedReceiver<LoopEvent>,
    ) {
        self.apply(initial).await;
        self.publish();

        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        tracing::debug!("all client handles dropped");
                        self.stop().await;
                        break;
                    };
                    if matches!(command, ClientCommand::Shutdown) {
                        self.stop().await;
                        break;
                    }
                    let effects = self.on_command(command);
                    self.apply(effects).await;
                }
                Some(event) = events.recv() => {
                    let effects = self.on_loop_event(event).await;
                    self.apply(effects).await;
                }
            }
            self.publish();
        }

        self.publish();
        tracing::info!("chat client stopped");
    }

    fn on_command(&mut self, command: ClientCommand) -> Vec<Effect> {
        match command {
            ClientCommand::SendText(text) => self.session.send_text(&text),
            ClientCommand::SetName(name) => self.session.set_name(name),
            ClientCommand::StartDraw => self.session.start_draw(),
            ClientCommand::ChangeRoom(room) => self.session.change_room(room),
            ClientCommand::Shutdown => self.session.shutdown(),
        }
    }

    async fn on_loop_event(&mut self, event: LoopEvent) -> Vec<Effect> {
        match event {
            LoopEvent::Connected { epoch, mut writer } => {
                if epoch != self.session.epoch()
                    || self.session.state() != ConnectionState::Connecting
                {
                    tracing::debug!(%epoch, "closing transport that is no longer wanted");
                    let _ = writer.close().await;
                    return Vec::new();
                }
                self.writer = Some(writer);
                self.session.handle(SessionEvent::TransportOpened { epoch })
            }
            LoopEvent::Session(event) => self.session.handle(event),
        }
    }

    async fn apply(&mut self, effects: Vec<Effect>) {
        let mut queue = VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::OpenTransport { epoch, room } => self.open_transport(epoch, room),
                Effect::SendFrame(frame) => self.send_frame(&frame).await,
                Effect::CloseTransport { epoch } => {
                    self.close_transport().await;
                    queue.extend(self.session.handle(SessionEvent::TransportClosed { epoch }));
                }
                Effect::StartKeepAlive { epoch } => self.start_keep_alive(epoch),
                Effect::StopKeepAlive => self.stop_keep_alive(),
            }
        }
    }

    fn open_transport(&mut self, epoch: Epoch, room: RoomPath) {
        if let Some(previous) = self.connection.take() {
            previous.abort();
        }

        let events = self.events_tx.clone();
        let server_url = self.server_url.clone();
        self.connection = Some(tokio::spawn(async move {
            match transport::connect(&server_url, &room).await {
                Ok((writer, mut reader)) => {
                    if events.send(LoopEvent::Connected { epoch, writer }).is_err() {
                        return;
                    }
                    while let Some(frame) = reader.next_text().await {
                        match frame {
                            Ok(text) => {
                                let event = SessionEvent::FrameReceived { epoch, text };
                                if events.send(LoopEvent::Session(event)).is_err() {
                                    return;
                                }
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, %room, "transport read failed");
                                break;
                            }
                        }
                    }
                }
                Err(e) => tracing::warn!(error = %e, %server_url, %room, "failed to connect"),
            }
            let _ = events.send(LoopEvent::Session(SessionEvent::TransportClosed { epoch }));
        }));
    }

    async fn send_frame(&mut self, frame: &OutboundFrame) {
        let Some(writer) = self.writer.as_mut() else {
            tracing::debug!("no open transport, frame dropped");
            return;
        };
        let text = match encode(frame) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode frame");
                return;
            }
        };
        tracing::debug!(frame = %text, "sending frame");
        if let Err(e) = writer.send_text(text).await {
            tracing::warn!(error = %e, "failed to send frame");
        }
    }

    async fn close_transport(&mut self) {
        if let Some(mut writer) = self.writer.take()
            && let Err(e) = writer.close().await
        {
            tracing::debug!(error = %e, "error while closing transport");
        }
        if let Some(connection) = self.connection.take() {
            connection.abort();
        }
    }

    fn start_keep_alive(&mut self, epoch: Epoch) {
        self.stop_keep_alive();
        let events = self.events_tx.clone();
        self.keep_alive = Some(KeepAlive::spawn(self.keep_alive_interval, move || {
            events
                .send(LoopEvent::Session(SessionEvent::KeepAliveTick { epoch }))
                .is_ok()
        }));
    }

    fn stop_keep_alive(&mut self) {
        if let Some(mut keep_alive) = self.keep_alive.take() {
            keep_alive.cancel();
        }
    }

    async fn stop(&mut self) {
        let effects = self.session.shutdown();
        self.apply(effects).await;
        // Covers sessions that were already closed when the shutdown came in.
        self.stop_keep_alive();
        self.close_transport().await;
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.session.view());
    }
}
