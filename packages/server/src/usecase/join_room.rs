//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルームの遅延作成、参加者の登録、セッションの張り替え
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：参加後に全員へ正しい状態が配信される
//! - 同じ参加者 ID での再参加時に古いセッションが追い出されることを保証
//! - 別ルームへの参加し直しで旧ルーム側の参加者が残らないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規ルームへの参加、既存ルームへの追加参加
//! - エッジケース：同じ参加者 ID での上書き参加（再接続）
//! - エッジケース：leave を送らずに別ルームへ参加し直すクライアント

use std::sync::Arc;

use crate::domain::{
    ConnectionId, Participant, ParticipantId, ParticipantName, RoomCode, RoomStore, Session,
    SessionRegistry,
};

use super::broadcast_room_state::BroadcastRoomStateUseCase;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Room Store（ルーム保管庫の抽象化）
    store: Arc<dyn RoomStore>,
    /// Session Registry（接続とセッションの紐付け）
    registry: Arc<dyn SessionRegistry>,
    /// ルーム状態配信のユースケース
    broadcaster: Arc<BroadcastRoomStateUseCase>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
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

    /// ルームへの参加を実行
    ///
    /// ルームは必要なら作成されます（冪等）。同じ参加者 ID の参加者が
    /// 既に存在する場合は未投票状態で上書きし、その参加者に紐付いていた
    /// 古い接続のセッションを追い出します。
    pub async fn execute(
        &self,
        connection: ConnectionId,
        room_code: RoomCode,
        participant_id: ParticipantId,
        participant_name: ParticipantName,
    ) {
        // 1. ルームを取得または作成し、参加者を未投票状態で登録する
        let room = self.store.get_or_create(&room_code).await;
        let joined_code = {
            let mut room = room.lock().await;
            room.upsert_participant(Participant::new(
                participant_id.clone(),
                participant_name.clone(),
                connection,
            ));
            // 単一ルーム型のバックエンドでは要求したコードと実際のルームの
            // コードが異なり得るため、ルーム側のコードを正とする
            room.code.clone()
        };

        // 2. 同じ (ルーム, 参加者) に紐付いている古いセッションを追い出す。
        //    追い出された接続のそれ以降の action と切断は no-op になる
        if let Some(stale) = self
            .registry
            .find_connection(&joined_code, &participant_id)
            .await
        {
            if stale != connection {
                self.registry.unbind(&stale).await;
                tracing::info!(
                    "Evicted stale session {} for participant '{}' in room '{}'",
                    stale,
                    participant_id.as_str(),
                    joined_code.as_str()
                );
            }
        }

        // 3. セッションを張り替える。この接続が別の (ルーム, 参加者) に
        //    紐付いていた場合は、旧ルーム側の参加者を先に解放する
        let prior = self
            .registry
            .bind(
                connection,
                Session {
                    room_code: joined_code.clone(),
                    participant_id: participant_id.clone(),
                    participant_name: participant_name.clone(),
                },
            )
            .await;
        if let Some(prior) = prior {
            if prior.room_code != joined_code || prior.participant_id != participant_id {
                let room_remains = self.release_prior_binding(&prior, connection).await;
                if room_remains && prior.room_code != joined_code {
                    self.broadcaster.execute(&prior.room_code).await;
                }
            }
        }

        tracing::info!(
            "'{}' joined room '{}'",
            participant_name.as_str(),
            joined_code.as_str()
        );

        // 4. 参加後の状態を配信する
        self.broadcaster.execute(&joined_code).await;
    }

    /// 張り替え前のセッションが指していた参加者を旧ルームから解放する
    ///
    /// 旧ルームが残っている場合 true を返します（呼び出し側が配信を行う）。
    async fn release_prior_binding(&self, prior: &Session, connection: ConnectionId) -> bool {
        let Some(room) = self.store.get(&prior.room_code).await else {
            return false;
        };
        let now_empty = {
            let mut room = room.lock().await;
            // この接続が所有している参加者だけを削除する
            if room
                .participant(&prior.participant_id)
                .is_some_and(|p| p.connection == connection)
            {
                room.remove_participant(&prior.participant_id);
            }
            room.is_empty()
        };
        if now_empty {
            // 誰も残っていなければ配信せず、ルームを破棄する
            self.store.remove_if_empty(&prior.room_code).await;
            false
        } else {
            true
        }
    }
}
