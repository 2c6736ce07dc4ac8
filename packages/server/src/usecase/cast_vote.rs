//! UseCase: 投票・投票取り消し処理

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomStore, SessionRegistry, VoteValue};

use super::broadcast_room_state::BroadcastRoomStateUseCase;

/// 投票のユースケース
///
/// 投票（VOTE）と投票の取り消し（CLEAR_VOTE）はどちらも呼び出した参加者
/// 自身の状態だけを変更します。
pub struct CastVoteUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// Session Registry（接続とセッションの紐付け）
    registry: Arc<dyn SessionRegistry>,
    /// ルーム状態配信のユースケース
    broadcaster: Arc<BroadcastRoomStateUseCase>,
}

impl CastVoteUseCase {
    /// 新しい CastVoteUseCase を作成
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

    /// 投票を実行
    ///
    /// セッションを持たない接続・存在しないルームからの投票は no-op です。
    /// 適用された場合のみ true を返し、状態を配信します。
    pub async fn execute(&self, connection: ConnectionId, vote: VoteValue) -> bool {
        let Some(session) = self.registry.lookup(&connection).await else {
            tracing::debug!("Ignoring VOTE from connection {} with no session", connection);
            return false;
        };
        let Some(room) = self.store.get(&session.room_code).await else {
            return false;
        };

        let applied = room.lock().await.record_vote(&session.participant_id, vote);
        if applied {
            self.broadcaster.execute(&session.room_code).await;
        }
        applied
    }

    /// 投票の取り消しを実行
    pub async fn clear(&self, connection: ConnectionId) -> bool {
        let Some(session) = self.registry.lookup(&connection).await else {
            tracing::debug!(
                "Ignoring CLEAR_VOTE from connection {} with no session",
                connection
            );
            return false;
        };
        let Some(room) = self.store.get(&session.room_code).await else {
            return false;
        };

        let applied = room.lock().await.clear_vote(&session.participant_id);
        if applied {
            self.broadcaster.execute(&session.room_code).await;
        }
        applied
    }
}
