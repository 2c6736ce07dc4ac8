//! セッション（接続とルーム内の参加者の紐付け）の定義
//!
//! 1 つの生きた接続に対してセッションは高々 1 つです。
//! セッションを持たない接続はどのルームにも参加していません。

use async_trait::async_trait;

use super::value_object::{ConnectionId, ParticipantId, ParticipantName, RoomCode};

/// 接続と (ルーム, 参加者) の紐付け
///
/// 接続の最初の join 成功時に作成され、明示的な leave または
/// トランスポートレベルの切断で破棄されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// 参加しているルームのコード
    pub room_code: RoomCode,
    /// ルーム内での参加者 ID
    pub participant_id: ParticipantId,
    /// 参加時に名乗った表示名
    pub participant_name: ParticipantName,
}

/// Session Registry trait
///
/// 接続からセッションを引くためのインターフェース。
/// UseCase 層はこの trait に依存し、Infrastructure 層が実装を提供します。
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// 接続にセッションを紐付ける
    ///
    /// 既にセッションが存在する場合は置き換え、置き換え前のセッションを返します。
    async fn bind(&self, connection: ConnectionId, session: Session) -> Option<Session>;

    /// 接続のセッションを取得する
    async fn lookup(&self, connection: &ConnectionId) -> Option<Session>;

    /// 接続のセッションを削除して返す
    ///
    /// 冪等です。同じ接続に対して 2 回呼ぶと 2 回目は None を返します。
    async fn unbind(&self, connection: &ConnectionId) -> Option<Session>;

    /// 指定された (ルーム, 参加者) に紐付いている接続を探す
    ///
    /// 同じ参加者 ID での再参加時に、古いセッションを追い出すために使います。
    async fn find_connection(
        &self,
        room_code: &RoomCode,
        participant_id: &ParticipantId,
    ) -> Option<ConnectionId>;
}
