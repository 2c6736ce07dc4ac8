//! Room Store の実装
//!
//! ## 実装
//!
//! - `inmemory::InMemoryRoomStore`: 共有テーブル型（1 プロセスが全ルームを保持）
//! - `inmemory::SingleRoomStore`: 単一ルーム型（1 ユニット 1 ルーム構成）

pub mod inmemory;

pub use inmemory::{InMemoryRoomStore, SingleRoomStore};
