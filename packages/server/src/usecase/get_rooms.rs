//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{Room, RoomStore};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
}

impl GetRoomsUseCase {
    /// 新しい GetRoomsUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// 登録されている全ルームのスナップショットを取得
    ///
    /// ルームコード順の安定した並びで返します。
    pub async fn execute(&self) -> Vec<Room> {
        let mut rooms = Vec::new();
        for code in self.store.room_codes().await {
            // 一覧取得と取得の間に破棄されたルームはスキップする
            if let Some(room) = self.store.get(&code).await {
                rooms.push(room.lock().await.clone());
            }
        }
        rooms.sort_by(|a, b| a.code.cmp(&b.code));
        rooms
    }
}
