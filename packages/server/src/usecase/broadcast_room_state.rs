//! UseCase: ルーム状態の配信
//!
//! 状態を変更する全てのユースケースがこのユースケースを通して配信を行います。
//! 投票値の可視性ルール（公開前は vote を null に落とす）は DTO への射影
//! （`infrastructure::dto::conversion`）で適用されるため、配信境界を通る
//! 限り隠された投票値が外に出ることはありません。

use std::sync::Arc;

use crate::domain::{MessagePusher, RoomCode, RoomStore};
use crate::infrastructure::dto::websocket::ServerEvent;

/// ルーム状態配信のユースケース
pub struct BroadcastRoomStateUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl BroadcastRoomStateUseCase {
    /// 新しい BroadcastRoomStateUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            store,
            message_pusher,
        }
    }

    /// ルームの現在の状態を全参加者に配信する
    ///
    /// ルームが存在しない場合は何もしません（並行して破棄された場合の
    /// レースは no-op として扱う）。一部の接続が閉じられていても残りへの
    /// 配信は継続されます。
    pub async fn execute(&self, room_code: &RoomCode) {
        let Some(room) = self.store.get(room_code).await else {
            tracing::debug!(
                "Room '{}' not found, skipping broadcast",
                room_code.as_str()
            );
            return;
        };

        // ルームのロック中にスナップショットだけを取り、配信はロック外で行う
        let (message, targets) = {
            let room = room.lock().await;
            let event = ServerEvent::from(&*room);
            (serde_json::to_string(&event).unwrap(), room.connections())
        };

        if let Err(e) = self.message_pusher.broadcast(targets, &message).await {
            tracing::warn!(
                "Failed to broadcast room state for '{}': {}",
                room_code.as_str(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ConnectionId, Participant, ParticipantId, ParticipantName, RoomCode, VoteValue,
    };
    use crate::domain::message_pusher::MockMessagePusher;
    use crate::infrastructure::{
        message_pusher::WebSocketMessagePusher, store::InMemoryRoomStore,
    };
    use tokio::sync::mpsc;
    use zashiki_shared::time::FixedClock;

    fn create_test_store() -> Arc<InMemoryRoomStore> {
        Arc::new(InMemoryRoomStore::new(Arc::new(FixedClock::new(1000))))
    }

    fn room_code(code: &str) -> RoomCode {
        RoomCode::new(code.to_string()).unwrap()
    }

    async fn register_connection(
        pusher: &WebSocketMessagePusher,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connection = ConnectionId::generate();
        pusher.register_connection(connection, tx).await;
        (connection, rx)
    }

    fn participant(id: &str, name: &str, connection: ConnectionId) -> Participant {
        Participant::new(
            ParticipantId::new(id.to_string()).unwrap(),
            ParticipantName::new(name.to_string()),
            connection,
        )
    }

    #[tokio::test]
    async fn test_broadcast_delivers_to_all_participants() {
        // テスト項目: ルームの全参加者に同じ状態が配信される
        // given (前提条件):
        let store = create_test_store();
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = BroadcastRoomStateUseCase::new(store.clone(), pusher.clone());

        let code = room_code("ABC123");
        let (alice_conn, mut alice_rx) = register_connection(&pusher).await;
        let (bob_conn, mut bob_rx) = register_connection(&pusher).await;
        {
            let room = store.get_or_create(&code).await;
            let mut room = room.lock().await;
            room.upsert_participant(participant("p1", "Alice", alice_conn));
            room.upsert_participant(participant("p2", "Bob", bob_conn));
        }

        // when (操作):
        usecase.execute(&code).await;

        // then (期待する結果):
        let alice_msg = alice_rx.try_recv().unwrap();
        let bob_msg = bob_rx.try_recv().unwrap();
        assert_eq!(alice_msg, bob_msg);
        let event: ServerEvent = serde_json::from_str(&alice_msg).unwrap();
        match event {
            ServerEvent::RoomState {
                room_code,
                participants,
                ..
            } => {
                assert_eq!(room_code, "ABC123");
                assert_eq!(participants.len(), 2);
            }
            other => panic!("expected ROOM_STATE, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_broadcast_masks_votes_until_revealed() {
        // テスト項目: 公開前の配信では投票値が null に落とされる
        // given (前提条件):
        let store = create_test_store();
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = BroadcastRoomStateUseCase::new(store.clone(), pusher.clone());

        let code = room_code("ABC123");
        let (alice_conn, mut alice_rx) = register_connection(&pusher).await;
        {
            let room = store.get_or_create(&code).await;
            let mut room = room.lock().await;
            room.upsert_participant(participant("p1", "Alice", alice_conn));
            room.record_vote(
                &ParticipantId::new("p1".to_string()).unwrap(),
                VoteValue::new("5".to_string()),
            );
        }

        // when (操作):
        usecase.execute(&code).await;

        // then (期待する結果):
        let event: ServerEvent = serde_json::from_str(&alice_rx.try_recv().unwrap()).unwrap();
        match event {
            ServerEvent::RoomState { participants, .. } => {
                assert!(participants[0].has_voted);
                assert_eq!(participants[0].vote, None);
            }
            other => panic!("expected ROOM_STATE, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_broadcast_for_missing_room_is_noop() {
        // テスト項目: 存在しないルームへの配信要求では何も送信されない
        // given (前提条件):
        let store = create_test_store();
        let mut mock_pusher = MockMessagePusher::new();
        mock_pusher.expect_broadcast().times(0);
        let usecase = BroadcastRoomStateUseCase::new(store, Arc::new(mock_pusher));

        // when (操作):
        usecase.execute(&room_code("MISSING")).await;

        // then (期待する結果): broadcast が一度も呼ばれない（mock が検証）
    }

    #[tokio::test]
    async fn test_broadcast_survives_dead_connection() {
        // テスト項目: 閉じられた接続があっても残りの参加者に配信される
        // given (前提条件):
        let store = create_test_store();
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = BroadcastRoomStateUseCase::new(store.clone(), pusher.clone());

        let code = room_code("ABC123");
        let (dead_conn, dead_rx) = register_connection(&pusher).await;
        let (alive_conn, mut alive_rx) = register_connection(&pusher).await;
        {
            let room = store.get_or_create(&code).await;
            let mut room = room.lock().await;
            room.upsert_participant(participant("p1", "Alice", dead_conn));
            room.upsert_participant(participant("p2", "Bob", alive_conn));
        }
        drop(dead_rx); // p1 の受信側を閉じる

        // when (操作):
        usecase.execute(&code).await;

        // then (期待する結果):
        let event: ServerEvent = serde_json::from_str(&alive_rx.try_recv().unwrap()).unwrap();
        assert!(matches!(event, ServerEvent::RoomState { .. }));
    }
}
