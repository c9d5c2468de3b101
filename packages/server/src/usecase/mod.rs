//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

mod broadcast;
pub mod connect_peer;
pub mod disconnect_peer;
pub mod error;
pub mod relay_message;

pub use connect_peer::ConnectPeerUseCase;
pub use disconnect_peer::DisconnectPeerUseCase;
pub use error::{ConnectError, DisconnectError, RelayError};
pub use relay_message::RelayMessageUseCase;
