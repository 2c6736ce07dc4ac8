//! MessagePusher trait 定義
//!
//! 接続へのメッセージ送信（通知）のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ConnectionId;

/// 接続へのメッセージ送信用チャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// 接続ハンドル単位でメッセージを送信するインターフェース。
/// 送信先の選定（どの接続に送るか）は UseCase 層の責務で、
/// この trait は届けることだけを担当します。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録する
    async fn register_connection(&self, connection: ConnectionId, sender: PusherChannel);

    /// 接続を登録解除する
    async fn unregister_connection(&self, connection: &ConnectionId);

    /// 特定の接続にメッセージを送信する
    async fn push_to(
        &self,
        connection: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// 複数の接続にメッセージを送信する
    ///
    /// 一部の接続が既に閉じられていても残りへの送信は継続します
    /// （部分失敗を許容）。
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
