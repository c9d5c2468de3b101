//! UseCase: フレーム中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - `{plaintext, name}` を `{plaintext, name, sender_addr}` にして同じルームへ中継
//!
//! ### なぜこのテストが必要か
//! - 名前の通知（plaintext が空）や `/start` も同じ経路で届く必要がある
//! - 送信者自身と別ルームには中継されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：チャット本文、名前の通知の中継
//! - 異常系：空フレーム、JSON として読めないフレーム、未登録の送信者

use std::sync::Arc;

use crate::{
    domain::{PeerAddress, PeerRepository},
    infrastructure::dto::websocket::{ClientFrame, RelayedFrame},
};

use super::{broadcast::broadcast, error::RelayError};

/// フレーム中継のユースケース
pub struct RelayMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PeerRepository>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(repository: Arc<dyn PeerRepository>) -> Self {
        Self { repository }
    }

    /// フレーム中継を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信元ピアのアドレス
    /// * `raw` - 受信したテキストフレーム
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 中継したピアの数
    /// * `Err(RelayError)` - 中継しなかった理由
    pub async fn execute(&self, from: PeerAddress, raw: &str) -> Result<usize, RelayError> {
        // 1. フレームを検証
        if raw.trim().is_empty() {
            return Err(RelayError::EmptyFrame);
        }
        let frame: ClientFrame =
            serde_json::from_str(raw).map_err(|e| RelayError::InvalidFrame(e.to_string()))?;

        // 2. 送信元のルームを特定
        let peer = self
            .repository
            .get_peer(&from)
            .await
            .map_err(|_| RelayError::UnknownSender(from.to_string()))?;

        // 3. 同じルームの他のピアへ中継
        let relayed = RelayedFrame::new(frame, from.to_string());
        broadcast(self.repository.as_ref(), &peer.room, &from, &relayed)
            .await
            .map_err(|e| RelayError::Encode(e.to_string()))
    }
}
