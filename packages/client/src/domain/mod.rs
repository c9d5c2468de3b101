//! Domain layer for the chat client.
//!
//! This module contains the client-side chat model (roster, chat log, role draw)
//! and is independent of the transport and of any rendering layer.

pub mod chat_log;
pub mod entity;
pub mod error;
pub mod role_draw;
pub mod roster;
pub mod value_object;

pub use chat_log::{ChatLog, GroupingContext};
pub use entity::{ChatContent, ChatEntry, ChatKind, Participant, PresenceEvent};
pub use error::{DecodeError, RoleDrawError, ValueObjectError};
pub use role_draw::{Picker, RandomPicker, draw_role};
pub use roster::Roster;
pub use value_object::{RoomPath, SenderAddress, Timestamp};
