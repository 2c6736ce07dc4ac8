//! ドメイン層のエラー定義

use thiserror::Error;

/// Value Object の生成に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// ルームコードが不正（空文字列、または長すぎる）
    #[error("invalid room code: '{0}'")]
    InvalidRoomCode(String),
    /// 参加者 ID が不正（空文字列、または長すぎる）
    #[error("invalid participant id: '{0}'")]
    InvalidParticipantId(String),
}

/// メッセージ送信に失敗した場合のエラー
#[derive(Debug, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// 対象の接続が登録されていない
    #[error("connection '{0}' is not registered")]
    ConnectionNotFound(String),
    /// メッセージの送信に失敗した（接続は既に閉じられているなど）
    #[error("failed to push message: {0}")]
    PushFailed(String),
}
