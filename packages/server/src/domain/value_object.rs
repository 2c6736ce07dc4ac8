//! ドメイン層の Value Object 定義
//!
//! 識別子（`RoomCode`, `ParticipantId`）は生成時に検証されます。
//! 表示名・投票値・ストーリーはプロトコル上自由な文字列であり、検証しません。

use std::fmt;

use uuid::Uuid;

use super::error::DomainError;

/// ルームを識別する不透明な文字列コード
///
/// ルームの生存期間を通じて安定しています。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomCode(String);

impl RoomCode {
    /// ルームコードの最大長
    pub const MAX_LENGTH: usize = 64;

    /// 新しい RoomCode を作成（空文字列・空白のみ・長すぎる場合はエラー）
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.trim().is_empty() || value.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidRoomCode(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ルーム内で参加者を識別する ID
///
/// クライアントが払い出す値であり、クライアントが保持し続ける限り
/// 再接続をまたいで安定します（サーバーは強制しない）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// 参加者 ID の最大長
    pub const MAX_LENGTH: usize = 64;

    /// 新しい ParticipantId を作成（空文字列・空白のみ・長すぎる場合はエラー）
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.trim().is_empty() || value.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidParticipantId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 参加者の表示名
///
/// 一意性も内容も検証しない（プロトコル仕様）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantName(String);

impl ParticipantName {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 投票値（"5", "13", "?", "☕" のようなカードの値）
///
/// 不透明な値として扱い、内容は検証しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteValue(String);

impl VoteValue {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 見積もり対象のストーリー（自由な文字列、デフォルトは空）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryTitle(String);

impl StoryTitle {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 接続を識別する不透明なハンドル
///
/// Connection Host が接続受付時に払い出します。トランスポート固有の
/// 接続オブジェクトをコアのデータ構造から切り離すための識別子です。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい ConnectionId を払い出す
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
