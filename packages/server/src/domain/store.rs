//! Room Store trait 定義
//!
//! ドメイン層が必要とするルームの保管庫のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! ## バックエンド
//!
//! - 共有テーブル型: 1 プロセスが全ルームをテーブルで保持し、空になった
//!   ルームを破棄する
//! - 単一ルーム型: 1 ユニットが 1 ルームだけを保持し、空になっても
//!   破棄せず次の join で再利用する

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::entity::Room;
use super::value_object::RoomCode;

/// ルームへの共有ハンドル
///
/// ルームごとの Mutex がそのルームに対する操作を直列化します
/// （ルーム単位のクリティカルセクション）。
pub type SharedRoom = Arc<Mutex<Room>>;

/// Room Store trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には
/// 依存しません。
///
/// ## ロック順序の注意
///
/// デッドロックを避けるため、呼び出し側はルームのロックを保持したまま
/// このストアのメソッドを呼んではいけません。
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// 指定されたコードのルームを取得し、存在しない場合は空のルームを
    /// 新規作成して登録する
    ///
    /// 同じコードに対して並行に呼ばれても、ルームが 2 つ作られることは
    /// ありません。
    async fn get_or_create(&self, code: &RoomCode) -> SharedRoom;

    /// 既存のルームを取得する（新規作成はしない）
    async fn get(&self, code: &RoomCode) -> Option<SharedRoom>;

    /// 参加者がいないルームを削除する（削除した場合 true）
    ///
    /// 単一ルーム型のバックエンドでは常に no-op です。
    async fn remove_if_empty(&self, code: &RoomCode) -> bool;

    /// 登録されている全てのルームコードを取得する
    async fn room_codes(&self) -> Vec<RoomCode>;
}
