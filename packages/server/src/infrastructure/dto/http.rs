//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Summary of a room for the rooms list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub code: String,
    pub participants: Vec<String>,
    pub created_at: String,
}

/// Detail of a single room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub code: String,
    pub participants: Vec<ParticipantDetailDto>,
    pub current_story: String,
    pub votes_revealed: bool,
    pub created_at: String,
}

/// One participant in the room detail response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDetailDto {
    pub id: String,
    pub name: String,
    pub has_voted: bool,
}
