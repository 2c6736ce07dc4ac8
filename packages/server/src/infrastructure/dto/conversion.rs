//! Conversion logic between DTOs and domain entities.
//!
//! The `Room` → `ServerEvent::RoomState` projection is where the vote
//! visibility rule is enforced: while `votes_revealed` is false, the wire view
//! carries `vote: null` for every participant regardless of the stored value.
//! Clients never see a hidden vote, whatever their own UI does.

use crate::domain::Room;
use crate::infrastructure::dto::websocket::{ParticipantView, ServerEvent};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&Room> for ServerEvent {
    fn from(room: &Room) -> Self {
        let participants = room
            .participants
            .iter()
            .map(|p| ParticipantView {
                id: p.id.as_str().to_string(),
                name: p.name.as_str().to_string(),
                has_voted: p.has_voted,
                // 公開フラグが立つまで投票値は配信に載せない
                vote: if room.votes_revealed {
                    p.vote.as_ref().map(|v| v.as_str().to_string())
                } else {
                    None
                },
            })
            .collect();

        ServerEvent::RoomState {
            room_code: room.code.as_str().to_string(),
            participants,
            current_story: room.current_story.as_str().to_string(),
            votes_revealed: room.votes_revealed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ConnectionId, Participant, ParticipantId, ParticipantName, RoomCode, StoryTitle,
        Timestamp, VoteValue,
    };

    fn room_with_votes() -> Room {
        let mut room = Room::new(
            RoomCode::new("ABC123".to_string()).unwrap(),
            Timestamp::new(1000),
        );
        room.upsert_participant(Participant::new(
            ParticipantId::new("p1".to_string()).unwrap(),
            ParticipantName::new("Alice".to_string()),
            ConnectionId::generate(),
        ));
        room.upsert_participant(Participant::new(
            ParticipantId::new("p2".to_string()).unwrap(),
            ParticipantName::new("Bob".to_string()),
            ConnectionId::generate(),
        ));
        room.record_vote(
            &ParticipantId::new("p1".to_string()).unwrap(),
            VoteValue::new("5".to_string()),
        );
        room
    }

    fn participants(event: &ServerEvent) -> &[ParticipantView] {
        match event {
            ServerEvent::RoomState { participants, .. } => participants,
            other => panic!("expected ROOM_STATE, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_votes_are_projected_as_null() {
        // テスト項目: 非公開の間、保存された投票値に関わらず vote は null になる
        // given (前提条件):
        let room = room_with_votes();
        assert!(!room.votes_revealed);

        // when (操作):
        let event = ServerEvent::from(&room);

        // then (期待する結果):
        let participants = participants(&event);
        assert_eq!(participants[0].id, "p1");
        assert!(participants[0].has_voted); // has_voted は事実を反映する
        assert_eq!(participants[0].vote, None); // 値そのものは隠される
        assert!(!participants[1].has_voted);
        assert_eq!(participants[1].vote, None);
    }

    #[test]
    fn test_revealed_votes_are_echoed_exactly() {
        // テスト項目: 公開後は保存された投票値がそのまま配信される
        // given (前提条件):
        let mut room = room_with_votes();
        room.reveal_votes();

        // when (操作):
        let event = ServerEvent::from(&room);

        // then (期待する結果):
        let participants = participants(&event);
        assert_eq!(participants[0].vote, Some("5".to_string()));
        // 未投票の参加者は公開後も null
        assert_eq!(participants[1].vote, None);
    }

    #[test]
    fn test_projection_preserves_join_order() {
        // テスト項目: 配信内容の参加者の並びは参加順
        // given (前提条件):
        let room = room_with_votes();

        // when (操作):
        let event = ServerEvent::from(&room);

        // then (期待する結果):
        let ids: Vec<&str> = participants(&event).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_projection_carries_story_and_reveal_flag() {
        // テスト項目: ストーリーと公開フラグが配信内容に反映される
        // given (前提条件):
        let mut room = room_with_votes();
        room.set_story(StoryTitle::new("Checkout flow".to_string()));
        room.reveal_votes();

        // when (操作):
        let event = ServerEvent::from(&room);

        // then (期待する結果):
        match event {
            ServerEvent::RoomState {
                room_code,
                current_story,
                votes_revealed,
                ..
            } => {
                assert_eq!(room_code, "ABC123");
                assert_eq!(current_story, "Checkout flow");
                assert!(votes_revealed);
            }
            other => panic!("expected ROOM_STATE, got {other:?}"),
        }
    }
}
