//! UseCase: ラウンドのリセット処理

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomStore, SessionRegistry};

use super::broadcast_room_state::BroadcastRoomStateUseCase;

/// ラウンドリセットのユースケース
///
/// 公開フラグを下ろし、ストーリーを空にし、ルームの全参加者の投票を
/// 取り消します。
pub struct ResetVotesUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// Session Registry（接続とセッションの紐付け）
    registry: Arc<dyn SessionRegistry>,
    /// ルーム状態配信のユースケース
    broadcaster: Arc<BroadcastRoomStateUseCase>,
}

impl ResetVotesUseCase {
    /// 新しい ResetVotesUseCase を作成
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

    /// ラウンドのリセットを実行
    ///
    /// セッションを持たない接続・存在しないルームに対しては no-op です。
    pub async fn execute(&self, connection: ConnectionId) -> bool {
        let Some(session) = self.registry.lookup(&connection).await else {
            tracing::debug!(
                "Ignoring RESET_VOTES from connection {} with no session",
                connection
            );
            return false;
        };
        let Some(room) = self.store.get(&session.room_code).await else {
            return false;
        };

        room.lock().await.reset_round();
        self.broadcaster.execute(&session.room_code).await;
        true
    }
}
