//! ルーム内へのファンアウト

use serde::Serialize;

use crate::domain::{PeerAddress, PeerRepository, RoomToken};

/// `frame` を `room` の `exclude` 以外の全ピアに送る
///
/// 送信できたピアの数を返す。送信に失敗したピア（切断処理中）はスキップする。
pub(crate) async fn broadcast<T: Serialize>(
    repository: &dyn PeerRepository,
    room: &RoomToken,
    exclude: &PeerAddress,
    frame: &T,
) -> Result<usize, serde_json::Error> {
    let json = serde_json::to_string(frame)?;
    let targets = repository.room_senders(room, exclude).await;

    let mut delivered = 0;
    for (address, sender) in targets {
        if sender.send(json.clone()).is_ok() {
            delivered += 1;
        } else {
            tracing::warn!("Failed to send frame to peer '{}'", address);
        }
    }
    Ok(delivered)
}
