//! UseCase: ピア切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPeerUseCase::execute() メソッド
//! - ピアの登録解除と、残ったピアへの切断通知（meta 1）
//!
//! ### なぜこのテストが必要か
//! - クライアントは切断通知を受けて参加者一覧からピアを取り除く
//! - 最後のピアが抜けたらルームが消えることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：ピアの切断と通知
//! - エッジケース：最後のピアの切断（通知対象なし）
//! - 異常系：存在しないピアの切断試行

use std::sync::Arc;

use crate::{
    domain::{PeerAddress, PeerRepository},
    infrastructure::dto::websocket::PresenceFrame,
};

use super::{broadcast::broadcast, error::DisconnectError};

/// ピア切断のユースケース
pub struct DisconnectPeerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PeerRepository>,
}

impl DisconnectPeerUseCase {
    /// 新しい DisconnectPeerUseCase を作成
    pub fn new(repository: Arc<dyn PeerRepository>) -> Self {
        Self { repository }
    }

    /// ピア切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 切断通知を送ったピアの数
    /// * `Err(DisconnectError)` - 切断失敗
    pub async fn execute(&self, address: PeerAddress) -> Result<usize, DisconnectError> {
        // 1. Repository からピアを削除
        let peer = self
            .repository
            .remove_peer(&address)
            .await
            .map_err(|_| DisconnectError::PeerNotFound(address.to_string()))?;

        // 2. 同じルームに残ったピアに切断を通知
        broadcast(
            self.repository.as_ref(),
            &peer.room,
            &address,
            &PresenceFrame::disconnected(address.to_string()),
        )
        .await
        .map_err(|e| DisconnectError::Encode(e.to_string()))
    }
}
