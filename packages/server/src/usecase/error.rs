//! UseCase 層のエラー定義

use thiserror::Error;

/// ピア接続時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// 同じアドレスのピアが既に接続している
    #[error("Peer '{0}' is already connected")]
    DuplicatePeer(String),

    /// 接続通知のエンコードに失敗
    #[error("Failed to encode presence frame: {0}")]
    Encode(String),
}

/// ピア切断時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisconnectError {
    /// 登録されていないピア
    #[error("Peer '{0}' is not connected")]
    PeerNotFound(String),

    /// 切断通知のエンコードに失敗
    #[error("Failed to encode presence frame: {0}")]
    Encode(String),
}

/// フレーム中継時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// 空のフレーム
    #[error("Empty frame")]
    EmptyFrame,

    /// `{plaintext, name}` として読めないフレーム
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// 送信元のピアが登録されていない
    #[error("Unknown sender '{0}'")]
    UnknownSender(String),

    /// 中継フレームのエンコードに失敗
    #[error("Failed to encode relayed frame: {0}")]
    Encode(String),
}
