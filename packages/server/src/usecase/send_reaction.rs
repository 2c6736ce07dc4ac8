//! UseCase: リアクション送信処理
//!
//! リアクション（絵文字の ping）はルームの状態を変更しない一時的な
//! イベントです。ROOM_STATE の配信は行わず、PING_RECEIVED イベントを
//! 現在の参加者全員に一度だけ届けます。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomStore, SessionRegistry};
use crate::infrastructure::dto::websocket::ServerEvent;
use zashiki_shared::time::Clock;

/// リアクション送信のユースケース
pub struct SendReactionUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// Session Registry（接続とセッションの紐付け）
    registry: Arc<dyn SessionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// イベントのタイムスタンプ払い出しに使う時計
    clock: Arc<dyn Clock>,
}

impl SendReactionUseCase {
    /// 新しい SendReactionUseCase を作成
    pub fn new(
        store: Arc<dyn RoomStore>,
        registry: Arc<dyn SessionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            registry,
            message_pusher,
            clock,
        }
    }

    /// リアクションの送信を実行
    ///
    /// セッションを持たない接続・存在しないルームからの送信は no-op です。
    pub async fn execute(&self, connection: ConnectionId, emoji: String) -> bool {
        let Some(session) = self.registry.lookup(&connection).await else {
            tracing::debug!(
                "Ignoring SEND_PING from connection {} with no session",
                connection
            );
            return false;
        };
        let Some(room) = self.store.get(&session.room_code).await else {
            return false;
        };

        let targets = room.lock().await.connections();
        let event = ServerEvent::PingReceived {
            emoji,
            from_player: session.participant_name.as_str().to_string(),
            timestamp: self.clock.now_unix_millis(),
        };
        let message = serde_json::to_string(&event).unwrap();

        if let Err(e) = self.message_pusher.broadcast(targets, &message).await {
            tracing::warn!(
                "Failed to deliver reaction in room '{}': {}",
                session.room_code.as_str(),
                e
            );
        }
        true
    }
}
