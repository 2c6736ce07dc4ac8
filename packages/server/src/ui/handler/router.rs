//! Inbound message routing.
//!
//! The router is stateless: it decodes a raw text payload once into the
//! `ClientAction` sum type and dispatches to the matching use case. A decode
//! failure is logged and the message is dropped; it never tears down the
//! connection or reaches other connections. Unknown action kinds are dropped
//! without error.

use crate::domain::{ConnectionId, ParticipantId, ParticipantName, RoomCode, StoryTitle, VoteValue};
use crate::infrastructure::dto::websocket::ClientAction;
use crate::ui::state::AppState;

/// Decode one inbound text message and dispatch it.
pub async fn route_text_message(state: &AppState, connection: ConnectionId, text: &str) {
    let action = match serde_json::from_str::<ClientAction>(text) {
        Ok(action) => action,
        Err(e) => {
            tracing::warn!("Failed to decode message from connection {}: {}", connection, e);
            return;
        }
    };
    dispatch_action(state, connection, action).await;
}

/// Dispatch a decoded action to its use case.
pub async fn dispatch_action(state: &AppState, connection: ConnectionId, action: ClientAction) {
    match action {
        ClientAction::JoinRoom {
            room_code,
            player_name,
            player_id,
        } => {
            let (Ok(room_code), Ok(participant_id)) = (
                RoomCode::new(room_code),
                ParticipantId::new(player_id),
            ) else {
                tracing::warn!(
                    "Dropping JOIN_ROOM with invalid identifiers from connection {}",
                    connection
                );
                return;
            };
            state
                .join_room_usecase
                .execute(
                    connection,
                    room_code,
                    participant_id,
                    ParticipantName::new(player_name),
                )
                .await;
        }
        ClientAction::LeaveRoom {} => {
            state.leave_room_usecase.execute(connection).await;
        }
        ClientAction::Vote { vote } => {
            state
                .cast_vote_usecase
                .execute(connection, VoteValue::new(vote))
                .await;
        }
        ClientAction::ClearVote {} => {
            state.cast_vote_usecase.clear(connection).await;
        }
        ClientAction::RevealVotes {} => {
            state.reveal_votes_usecase.execute(connection).await;
        }
        ClientAction::ResetVotes {} => {
            state.reset_votes_usecase.execute(connection).await;
        }
        ClientAction::UpdateStory { story } => {
            state
                .update_story_usecase
                .execute(connection, StoryTitle::new(story))
                .await;
        }
        ClientAction::SendPing { emoji } => {
            state.send_reaction_usecase.execute(connection, emoji).await;
        }
        ClientAction::Unknown => {
            tracing::debug!(
                "Dropping message with unknown action kind from connection {}",
                connection
            );
        }
    }
}
