//! UseCase: 投票値の公開処理

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomStore, SessionRegistry};

use super::broadcast_room_state::BroadcastRoomStateUseCase;

/// 投票値公開のユースケース
///
/// ルーム単位の操作であり、参加中の誰でも実行できます。
pub struct RevealVotesUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// Session Registry（接続とセッションの紐付け）
    registry: Arc<dyn SessionRegistry>,
    /// ルーム状態配信のユースケース
    broadcaster: Arc<BroadcastRoomStateUseCase>,
}

impl RevealVotesUseCase {
    /// 新しい RevealVotesUseCase を作成
    pub fn new(
        store: Arc<dyn RoomStore>,
        registry: Arc<dyn SessionRegistry>,
        broadcaster: Arc<BroadcastRoomStateUseCase>,
    ) -> Self {
        Self {
            store,
            registry,
            broadcaster,
        }
    }

    /// 投票値の公開を実行
    ///
    /// セッションを持たない接続・存在しないルームに対しては no-op です。
    pub async fn execute(&self, connection: ConnectionId) -> bool {
        let Some(session) = self.registry.lookup(&connection).await else {
            tracing::debug!(
                "Ignoring REVEAL_VOTES from connection {} with no session",
                connection
            );
            return false;
        };
        let Some(room) = self.store.get(&session.room_code).await else {
            return false;
        };

        room.lock().await.reveal_votes();
        self.broadcaster.execute(&session.room_code).await;
        true
    }
}
