//! WebSocket message DTOs.
//!
//! Every message on the wire is an envelope `{ "type": <KIND>, "data": <payload> }`
//! carried as UTF-8 JSON text. Inbound messages are decoded once at the router
//! boundary into the `ClientAction` sum type, so dispatch is exhaustive at
//! compile time.

use serde::{Deserialize, Serialize};

/// Client → server action envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientAction {
    /// Join a room (created lazily if unknown)
    #[serde(rename = "JOIN_ROOM", rename_all = "camelCase")]
    JoinRoom {
        room_code: String,
        player_name: String,
        player_id: String,
    },
    /// Leave the currently joined room
    #[serde(rename = "LEAVE_ROOM")]
    LeaveRoom {},
    /// Cast a vote for the current story
    #[serde(rename = "VOTE")]
    Vote { vote: String },
    /// Retract the current vote
    #[serde(rename = "CLEAR_VOTE")]
    ClearVote {},
    /// Make everyone's vote values visible
    #[serde(rename = "REVEAL_VOTES")]
    RevealVotes {},
    /// Start a fresh round (hide votes, clear story and all votes)
    #[serde(rename = "RESET_VOTES")]
    ResetVotes {},
    /// Set the story under estimation
    #[serde(rename = "UPDATE_STORY")]
    UpdateStory { story: String },
    /// Send an ephemeral emoji reaction to the room
    #[serde(rename = "SEND_PING")]
    SendPing { emoji: String },
    /// Unknown action kinds are dropped without error
    #[serde(other)]
    Unknown,
}

/// Server → client event envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerEvent {
    /// Full authoritative room snapshot, sent after every state-mutating action
    #[serde(rename = "ROOM_STATE", rename_all = "camelCase")]
    RoomState {
        room_code: String,
        participants: Vec<ParticipantView>,
        current_story: String,
        votes_revealed: bool,
    },
    /// Ephemeral reaction event, not retained in room state
    #[serde(rename = "PING_RECEIVED", rename_all = "camelCase")]
    PingReceived {
        emoji: String,
        from_player: String,
        timestamp: i64,
    },
}

/// One participant as exposed on the wire.
///
/// `vote` is the stored value only while votes are revealed; otherwise it is
/// always `null` regardless of the stored value (see `conversion`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantView {
    pub id: String,
    pub name: String,
    pub has_voted: bool,
    pub vote: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_join_room_action() {
        // テスト項目: JOIN_ROOM の envelope がデコードできる
        // given (前提条件):
        let json = r#"{"type":"JOIN_ROOM","data":{"roomCode":"ABC123","playerName":"Alice","playerId":"p1"}}"#;

        // when (操作):
        let action: ClientAction = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            action,
            ClientAction::JoinRoom {
                room_code: "ABC123".to_string(),
                player_name: "Alice".to_string(),
                player_id: "p1".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_payload_free_actions() {
        // テスト項目: ペイロードが空の action がデコードできる
        // given (前提条件):
        let cases = [
            (r#"{"type":"LEAVE_ROOM","data":{}}"#, ClientAction::LeaveRoom {}),
            (r#"{"type":"CLEAR_VOTE","data":{}}"#, ClientAction::ClearVote {}),
            (
                r#"{"type":"REVEAL_VOTES","data":{}}"#,
                ClientAction::RevealVotes {},
            ),
            (
                r#"{"type":"RESET_VOTES","data":{}}"#,
                ClientAction::ResetVotes {},
            ),
        ];

        for (json, expected) in cases {
            // when (操作):
            let action: ClientAction = serde_json::from_str(json).unwrap();

            // then (期待する結果):
            assert_eq!(action, expected);
        }
    }

    #[test]
    fn test_decode_vote_action() {
        // テスト項目: VOTE の envelope がデコードできる
        // given (前提条件):
        let json = r#"{"type":"VOTE","data":{"vote":"5"}}"#;

        // when (操作):
        let action: ClientAction = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            action,
            ClientAction::Vote {
                vote: "5".to_string()
            }
        );
    }

    #[test]
    fn test_decode_unknown_action_kind() {
        // テスト項目: 未知の action kind は Unknown にデコードされる
        // given (前提条件):
        let json = r#"{"type":"DANCE","data":{"steps":3}}"#;

        // when (操作):
        let action: ClientAction = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(action, ClientAction::Unknown);
    }

    #[test]
    fn test_decode_malformed_payload_fails() {
        // テスト項目: 構造が不正なメッセージはデコードエラーになる
        // given (前提条件):
        let cases = [
            "not json at all",
            r#"{"kind":"VOTE"}"#,
            r#"{"type":"VOTE","data":{}}"#,
        ];

        for json in cases {
            // when (操作):
            let result = serde_json::from_str::<ClientAction>(json);

            // then (期待する結果):
            assert!(result.is_err(), "should fail to decode: {json}");
        }
    }

    #[test]
    fn test_encode_room_state_event() {
        // テスト項目: ROOM_STATE の envelope が期待した JSON 形になる
        // given (前提条件):
        let event = ServerEvent::RoomState {
            room_code: "ABC123".to_string(),
            participants: vec![ParticipantView {
                id: "p1".to_string(),
                name: "Alice".to_string(),
                has_voted: true,
                vote: None,
            }],
            current_story: "Checkout flow".to_string(),
            votes_revealed: false,
        };

        // when (操作):
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(json["type"], "ROOM_STATE");
        assert_eq!(json["data"]["roomCode"], "ABC123");
        assert_eq!(json["data"]["currentStory"], "Checkout flow");
        assert_eq!(json["data"]["votesRevealed"], false);
        assert_eq!(json["data"]["participants"][0]["id"], "p1");
        assert_eq!(json["data"]["participants"][0]["hasVoted"], true);
        // 非公開の投票値は null として載る
        assert!(json["data"]["participants"][0]["vote"].is_null());
    }

    #[test]
    fn test_encode_ping_received_event() {
        // テスト項目: PING_RECEIVED の envelope が期待した JSON 形になる
        // given (前提条件):
        let event = ServerEvent::PingReceived {
            emoji: "👍".to_string(),
            from_player: "Bob".to_string(),
            timestamp: 1672531200000,
        };

        // when (操作):
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(json["type"], "PING_RECEIVED");
        assert_eq!(json["data"]["emoji"], "👍");
        assert_eq!(json["data"]["fromPlayer"], "Bob");
        assert_eq!(json["data"]["timestamp"], 1672531200000i64);
    }
}
