//! UseCase 層のエラー定義

use thiserror::Error;

/// ルーム詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    /// 指定されたルームが存在しない
    #[error("room not found")]
    RoomNotFound,
}
