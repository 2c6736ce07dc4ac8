//! Server state and dependency wiring.

use std::sync::Arc;

use crate::domain::{MessagePusher, RoomStore, SessionRegistry};
use crate::usecase::{
    BroadcastRoomStateUseCase, CastVoteUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
    JoinRoomUseCase, LeaveRoomUseCase, ResetVotesUseCase, RevealVotesUseCase,
    SendReactionUseCase, UpdateStoryUseCase,
};
use zashiki_shared::time::Clock;

/// Shared application state
pub struct AppState {
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// LeaveRoomUseCase（退室・切断のユースケース）
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// CastVoteUseCase（投票・投票取り消しのユースケース）
    pub cast_vote_usecase: Arc<CastVoteUseCase>,
    /// RevealVotesUseCase（投票値公開のユースケース）
    pub reveal_votes_usecase: Arc<RevealVotesUseCase>,
    /// ResetVotesUseCase（ラウンドリセットのユースケース）
    pub reset_votes_usecase: Arc<ResetVotesUseCase>,
    /// UpdateStoryUseCase（ストーリー更新のユースケース）
    pub update_story_usecase: Arc<UpdateStoryUseCase>,
    /// SendReactionUseCase（リアクション送信のユースケース）
    pub send_reaction_usecase: Arc<SendReactionUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    /// MessagePusher（接続の登録・登録解除に使う）
    pub message_pusher: Arc<dyn MessagePusher>,
}

impl AppState {
    /// Wire up the full use case graph on top of the given backends.
    pub fn new(
        store: Arc<dyn RoomStore>,
        registry: Arc<dyn SessionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let broadcaster = Arc::new(BroadcastRoomStateUseCase::new(
            store.clone(),
            message_pusher.clone(),
        ));

        Self {
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                store.clone(),
                registry.clone(),
                broadcaster.clone(),
            )),
            leave_room_usecase: Arc::new(LeaveRoomUseCase::new(
                store.clone(),
                registry.clone(),
                broadcaster.clone(),
            )),
            cast_vote_usecase: Arc::new(CastVoteUseCase::new(
                store.clone(),
                registry.clone(),
                broadcaster.clone(),
            )),
            reveal_votes_usecase: Arc::new(RevealVotesUseCase::new(
                store.clone(),
                registry.clone(),
                broadcaster.clone(),
            )),
            reset_votes_usecase: Arc::new(ResetVotesUseCase::new(
                store.clone(),
                registry.clone(),
                broadcaster.clone(),
            )),
            update_story_usecase: Arc::new(UpdateStoryUseCase::new(
                store.clone(),
                registry.clone(),
                broadcaster,
            )),
            send_reaction_usecase: Arc::new(SendReactionUseCase::new(
                store.clone(),
                registry,
                message_pusher.clone(),
                clock,
            )),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(store.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(store)),
            message_pusher,
        }
    }
}
