//! インメモリ Session Registry 実装
//!
//! 接続ハンドルからセッションを引く HashMap を保持します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ParticipantId, RoomCode, Session, SessionRegistry};

/// インメモリ Session Registry
#[derive(Default)]
pub struct InMemorySessionRegistry {
    /// 接続ハンドルからセッションへのマップ
    sessions: Mutex<HashMap<ConnectionId, Session>>,
}

impl InMemorySessionRegistry {
    /// 新しい InMemorySessionRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn bind(&self, connection: ConnectionId, session: Session) -> Option<Session> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(connection, session)
    }

    async fn lookup(&self, connection: &ConnectionId) -> Option<Session> {
        let sessions = self.sessions.lock().await;
        sessions.get(connection).cloned()
    }

    async fn unbind(&self, connection: &ConnectionId) -> Option<Session> {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(connection)
    }

    async fn find_connection(
        &self,
        room_code: &RoomCode,
        participant_id: &ParticipantId,
    ) -> Option<ConnectionId> {
        let sessions = self.sessions.lock().await;
        sessions
            .iter()
            .find(|(_, session)| {
                session.room_code == *room_code && session.participant_id == *participant_id
            })
            .map(|(connection, _)| *connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParticipantName;

    fn session(room: &str, id: &str, name: &str) -> Session {
        Session {
            room_code: RoomCode::new(room.to_string()).unwrap(),
            participant_id: ParticipantId::new(id.to_string()).unwrap(),
            participant_name: ParticipantName::new(name.to_string()),
        }
    }

    #[tokio::test]
    async fn test_bind_and_lookup() {
        // テスト項目: bind したセッションが lookup で取得できる
        // given (前提条件):
        let registry = InMemorySessionRegistry::new();
        let connection = ConnectionId::generate();

        // when (操作):
        let prior = registry
            .bind(connection, session("ABC123", "p1", "Alice"))
            .await;

        // then (期待する結果):
        assert!(prior.is_none());
        let found = registry.lookup(&connection).await;
        assert_eq!(found, Some(session("ABC123", "p1", "Alice")));
    }

    #[tokio::test]
    async fn test_lookup_for_unbound_connection_returns_none() {
        // テスト項目: セッションを持たない接続の lookup は None を返す
        // given (前提条件):
        let registry = InMemorySessionRegistry::new();

        // when (操作):
        let found = registry.lookup(&ConnectionId::generate()).await;

        // then (期待する結果):
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_bind_replaces_existing_session_and_returns_prior() {
        // テスト項目: 再 bind は既存セッションを置き換え、置き換え前のセッションを返す
        // given (前提条件):
        let registry = InMemorySessionRegistry::new();
        let connection = ConnectionId::generate();
        registry
            .bind(connection, session("ABC123", "p1", "Alice"))
            .await;

        // when (操作): 別のルームへ bind し直す
        let prior = registry
            .bind(connection, session("XYZ789", "p1", "Alice"))
            .await;

        // then (期待する結果):
        assert_eq!(prior, Some(session("ABC123", "p1", "Alice")));
        let found = registry.lookup(&connection).await;
        assert_eq!(found, Some(session("XYZ789", "p1", "Alice")));
    }

    #[tokio::test]
    async fn test_unbind_is_idempotent() {
        // テスト項目: unbind は冪等（2 回目は None を返す）
        // given (前提条件):
        let registry = InMemorySessionRegistry::new();
        let connection = ConnectionId::generate();
        registry
            .bind(connection, session("ABC123", "p1", "Alice"))
            .await;

        // when (操作):
        let first = registry.unbind(&connection).await;
        let second = registry.unbind(&connection).await;

        // then (期待する結果):
        assert_eq!(first, Some(session("ABC123", "p1", "Alice")));
        assert!(second.is_none());
        assert!(registry.lookup(&connection).await.is_none());
    }

    #[tokio::test]
    async fn test_find_connection_by_room_and_participant() {
        // テスト項目: (ルーム, 参加者) から接続を逆引きできる
        // given (前提条件):
        let registry = InMemorySessionRegistry::new();
        let alice_conn = ConnectionId::generate();
        let bob_conn = ConnectionId::generate();
        registry
            .bind(alice_conn, session("ABC123", "p1", "Alice"))
            .await;
        registry
            .bind(bob_conn, session("ABC123", "p2", "Bob"))
            .await;

        // when (操作):
        let found = registry
            .find_connection(
                &RoomCode::new("ABC123".to_string()).unwrap(),
                &ParticipantId::new("p2".to_string()).unwrap(),
            )
            .await;
        let missing = registry
            .find_connection(
                &RoomCode::new("XYZ789".to_string()).unwrap(),
                &ParticipantId::new("p2".to_string()).unwrap(),
            )
            .await;

        // then (期待する結果):
        assert_eq!(found, Some(bob_conn));
        assert!(missing.is_none());
    }
}
