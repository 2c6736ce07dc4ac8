//! UseCase: ルーム詳細取得

use std::sync::Arc;

use crate::domain::{Room, RoomCode, RoomStore};

use super::error::GetRoomDetailError;

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
}

impl GetRoomDetailUseCase {
    /// 新しい GetRoomDetailUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// ルームのスナップショットを取得
    ///
    /// コードとして不正な文字列もルーム不在として扱います。
    pub async fn execute(&self, room_code: String) -> Result<Room, GetRoomDetailError> {
        let code = RoomCode::new(room_code).map_err(|_| GetRoomDetailError::RoomNotFound)?;
        let room = self
            .store
            .get(&code)
            .await
            .ok_or(GetRoomDetailError::RoomNotFound)?;
        let snapshot = room.lock().await.clone();
        Ok(snapshot)
    }
}
