//! ドメイン層
//!
//! プランニングポーカーのルームを表すドメインモデルと、
//! ドメイン層が必要とするインターフェース（trait）を定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod session;
pub mod store;
pub mod value_object;

pub use entity::{Participant, Room};
pub use error::{DomainError, MessagePushError};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use session::{Session, SessionRegistry};
pub use store::{RoomStore, SharedRoom};
pub use value_object::{
    ConnectionId, ParticipantId, ParticipantName, RoomCode, StoryTitle, Timestamp, VoteValue,
};
