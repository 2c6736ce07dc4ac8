//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::infrastructure::dto::http::{ParticipantDetailDto, RoomDetailDto, RoomSummaryDto};
use crate::ui::state::AppState;
use zashiki_shared::time::timestamp_to_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    let room_summaries: Vec<RoomSummaryDto> = rooms
        .into_iter()
        .map(|room| RoomSummaryDto {
            code: room.code.as_str().to_string(),
            participants: room
                .participants
                .iter()
                .map(|p| p.id.as_str().to_string())
                .collect(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        })
        .collect();

    Json(room_summaries)
}

/// Get room detail by code
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    match state.get_room_detail_usecase.execute(room_code).await {
        Ok(room) => {
            // Domain Model から DTO への変換
            let room_detail = RoomDetailDto {
                code: room.code.as_str().to_string(),
                participants: room
                    .participants
                    .iter()
                    .map(|p| ParticipantDetailDto {
                        id: p.id.as_str().to_string(),
                        name: p.name.as_str().to_string(),
                        has_voted: p.has_voted,
                    })
                    .collect(),
                current_story: room.current_story.as_str().to_string(),
                votes_revealed: room.votes_revealed,
                created_at: timestamp_to_rfc3339(room.created_at.value()),
            };
            Ok(Json(room_detail))
        }
        Err(crate::usecase::GetRoomDetailError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
    }
}
