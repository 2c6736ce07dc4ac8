//! 共有テーブル型のインメモリ Room Store 実装
//!
//! 1 プロセスが全ルームを HashMap で保持します。外側の Mutex はテーブル
//! 操作の間だけ保持し、ルーム単体への操作はルームごとの Mutex
//! （`SharedRoom`）が直列化します。ルームをまたぐロックは取りません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Room, RoomCode, RoomStore, SharedRoom, Timestamp};
use zashiki_shared::time::Clock;

/// 共有テーブル型のインメモリ Room Store
///
/// ルームは最初の join で遅延作成され、空になったら
/// `remove_if_empty` で破棄されます。
pub struct InMemoryRoomStore {
    /// ルームコードからルームへのテーブル
    rooms: Mutex<HashMap<RoomCode, SharedRoom>>,
    /// ルーム作成時刻の払い出しに使う時計
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomStore {
    /// 新しい InMemoryRoomStore を作成
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn get_or_create(&self, code: &RoomCode) -> SharedRoom {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(code.clone())
            .or_insert_with(|| {
                tracing::info!("Room '{}' created", code.as_str());
                Arc::new(Mutex::new(Room::new(
                    code.clone(),
                    Timestamp::new(self.clock.now_unix_millis()),
                )))
            })
            .clone()
    }

    async fn get(&self, code: &RoomCode) -> Option<SharedRoom> {
        let rooms = self.rooms.lock().await;
        rooms.get(code).cloned()
    }

    async fn remove_if_empty(&self, code: &RoomCode) -> bool {
        let mut rooms = self.rooms.lock().await;
        let Some(room) = rooms.get(code) else {
            return false;
        };
        // 呼び出し側はこの時点でルームのロックを保持していてはならない
        let is_empty = room.lock().await.is_empty();
        if is_empty {
            rooms.remove(code);
            tracing::info!("Room '{}' removed (empty)", code.as_str());
        }
        is_empty
    }

    async fn room_codes(&self) -> Vec<RoomCode> {
        let rooms = self.rooms.lock().await;
        rooms.keys().cloned().collect()
    }
}
