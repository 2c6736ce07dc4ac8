//! UseCase: ストーリー更新処理

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomStore, SessionRegistry, StoryTitle};

use super::broadcast_room_state::BroadcastRoomStateUseCase;

/// ストーリー更新のユースケース
///
/// 共有フィールドの更新は last-write-wins です（それ以上の検証はしない）。
pub struct UpdateStoryUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// Session Registry（接続とセッションの紐付け）
    registry: Arc<dyn SessionRegistry>,
    /// ルーム状態配信のユースケース
    broadcaster: Arc<BroadcastRoomStateUseCase>,
}

impl UpdateStoryUseCase {
    /// 新しい UpdateStoryUseCase を作成
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

    /// ストーリーの更新を実行
    ///
    /// セッションを持たない接続・存在しないルームに対しては no-op です。
    pub async fn execute(&self, connection: ConnectionId, story: StoryTitle) -> bool {
        let Some(session) = self.registry.lookup(&connection).await else {
            tracing::debug!(
                "Ignoring UPDATE_STORY from connection {} with no session",
                connection
            );
            return false;
        };
        let Some(room) = self.store.get(&session.room_code).await else {
            return false;
        };

        room.lock().await.set_story(story);
        self.broadcaster.execute(&session.room_code).await;
        true
    }
}
