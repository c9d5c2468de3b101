//! UseCase: ピア接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectPeerUseCase::execute() メソッド
//! - ピアの登録と、同じルームの他のピアへの接続通知（meta 0）
//!
//! ### なぜこのテストが必要か
//! - クライアントの参加者一覧は接続通知だけを頼りに作られる
//! - 別ルームのピアに通知が漏れないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：同じルームに既存ピアがいる状態での接続
//! - 異常系：同じアドレスでの二重接続
//! - エッジケース：ルームに最初に入るピア（通知対象なし）

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    domain::{Peer, PeerAddress, PeerRepository, RoomToken, Timestamp},
    infrastructure::dto::websocket::PresenceFrame,
};

use super::{broadcast::broadcast, error::ConnectError};

/// ピア接続のユースケース
pub struct ConnectPeerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PeerRepository>,
}

impl ConnectPeerUseCase {
    /// 新しい ConnectPeerUseCase を作成
    pub fn new(repository: Arc<dyn PeerRepository>) -> Self {
        Self { repository }
    }

    /// ピア接続を実行
    ///
    /// # Arguments
    ///
    /// * `address` - 接続したピアのアドレス
    /// * `room` - ピアが指定したルームトークン
    /// * `sender` - ピアのソケットへ送るためのチャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 接続通知を送ったピアの数
    /// * `Err(ConnectError)` - 接続失敗
    pub async fn execute(
        &self,
        address: PeerAddress,
        room: RoomToken,
        sender: UnboundedSender<String>,
    ) -> Result<usize, ConnectError> {
        // 1. Repository にピアを登録
        let peer = Peer::new(address, room.clone(), Timestamp::now());
        self.repository
            .add_peer(peer, sender)
            .await
            .map_err(|_| ConnectError::DuplicatePeer(address.to_string()))?;

        // 2. 同じルームの他のピアに接続を通知
        let notified = broadcast(
            self.repository.as_ref(),
            &room,
            &address,
            &PresenceFrame::connected(address.to_string()),
        )
        .await
        .map_err(|e| ConnectError::Encode(e.to_string()))?;

        Ok(notified)
    }
}
