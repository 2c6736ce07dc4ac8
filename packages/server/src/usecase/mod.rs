//! UseCase 層
//!
//! クライアントの action 1 種類につき 1 つのユースケースを定義します。
//! 各ユースケースはドメイン層の trait（RoomStore, SessionRegistry,
//! MessagePusher）にのみ依存し、状態を変更した後はルーム状態の配信を
//! ちょうど一度だけ行います。

mod broadcast_room_state;
mod cast_vote;
mod error;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod leave_room;
mod reset_votes;
mod reveal_votes;
mod send_reaction;
mod update_story;

pub use broadcast_room_state::BroadcastRoomStateUseCase;
pub use cast_vote::CastVoteUseCase;
pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use reset_votes::ResetVotesUseCase;
pub use reveal_votes::RevealVotesUseCase;
pub use send_reaction::SendReactionUseCase;
pub use update_story::UpdateStoryUseCase;
