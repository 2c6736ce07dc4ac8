//! 単一ルーム型のインメモリ Room Store 実装
//!
//! 1 ユニット（プロセスや isolate）が 1 ルームだけをホストする
//! デプロイ形態向けの実装です。ルームコード単位のルーティングは
//! 外部のルーターが行い、このストアは常に自身のルームを返します。
//! ルームは空になっても破棄されず、次の join で再利用されます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Room, RoomCode, RoomStore, SharedRoom, Timestamp};
use zashiki_shared::time::Clock;

/// 単一ルーム型のインメモリ Room Store
pub struct SingleRoomStore {
    /// このユニットが担当するルームのコード
    code: RoomCode,
    /// ホストしているルーム
    room: SharedRoom,
}

impl SingleRoomStore {
    /// 指定されたコードのルームをホストする SingleRoomStore を作成
    pub fn new(code: RoomCode, clock: Arc<dyn Clock>) -> Self {
        let room = Arc::new(Mutex::new(Room::new(
            code.clone(),
            Timestamp::new(clock.now_unix_millis()),
        )));
        Self { code, room }
    }
}

#[async_trait]
impl RoomStore for SingleRoomStore {
    async fn get_or_create(&self, code: &RoomCode) -> SharedRoom {
        // 外部のルーターがコード単位でユニットを選択するため、
        // コードが食い違っても自身のルームを返す
        if *code != self.code {
            tracing::warn!(
                "Join for room '{}' routed to unit hosting '{}'",
                code.as_str(),
                self.code.as_str()
            );
        }
        self.room.clone()
    }

    async fn get(&self, code: &RoomCode) -> Option<SharedRoom> {
        (*code == self.code).then(|| self.room.clone())
    }

    async fn remove_if_empty(&self, _code: &RoomCode) -> bool {
        // ユニットが生きている限りルームは維持される
        false
    }

    async fn room_codes(&self) -> Vec<RoomCode> {
        vec![self.code.clone()]
    }
}
