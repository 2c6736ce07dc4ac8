//! UseCase: ルーム退室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveRoomUseCase::execute() メソッド
//! - 参加者の削除、セッションの解放、空になったルームの破棄
//!
//! ### なぜこのテストが必要か
//! - 明示的な LEAVE_ROOM と切断がどちらも同じ片付けに合流することを保証
//! - 片付けが冪等であること（二重に呼ばれても安全）を確認
//! - 最後の 1 人が退室したときにルームが破棄されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の退室と残りの参加者への配信
//! - エッジケース：最後の参加者の退室（配信なし、ルーム破棄）
//! - 異常系：セッションを持たない接続からの退室（no-op）

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomStore, Session, SessionRegistry};

use super::broadcast_room_state::BroadcastRoomStateUseCase;

/// ルーム退室のユースケース
///
/// 明示的な LEAVE_ROOM と、トランスポートレベルの切断通知の両方が
/// このユースケースに合流します。どちらの経路でもルームは同一の状態に
/// なります。
pub struct LeaveRoomUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// Session Registry（接続とセッションの紐付け）
    registry: Arc<dyn SessionRegistry>,
    /// ルーム状態配信のユースケース
    broadcaster: Arc<BroadcastRoomStateUseCase>,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
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

    /// 退室を実行
    ///
    /// # Returns
    ///
    /// * `Some(Session)` - 解放されたセッション
    /// * `None` - この接続はどのルームにも参加していなかった（no-op）
    pub async fn execute(&self, connection: ConnectionId) -> Option<Session> {
        // unbind は冪等なので、leave と切断が重なっても片付けは一度だけ走る
        let session = self.registry.unbind(&connection).await?;

        if let Some(room) = self.store.get(&session.room_code).await {
            let now_empty = {
                let mut room = room.lock().await;
                // この接続が所有している参加者だけを削除する（同じ参加者 ID で
                // 参加し直した新しい接続のエントリを消さないため）
                if room
                    .participant(&session.participant_id)
                    .is_some_and(|p| p.connection == connection)
                {
                    room.remove_participant(&session.participant_id);
                }
                room.is_empty()
            };

            if now_empty {
                // 誰も残っていなければ配信せず、ルームを破棄する
                self.store.remove_if_empty(&session.room_code).await;
            } else {
                self.broadcaster.execute(&session.room_code).await;
            }
        }

        tracing::info!(
            "'{}' left room '{}'",
            session.participant_name.as_str(),
            session.room_code.as_str()
        );
        Some(session)
    }
}
