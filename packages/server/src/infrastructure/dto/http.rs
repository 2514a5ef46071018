//! HTTP API response DTOs for the relay.

use roomcast_shared::time::millis_to_rfc3339;
use serde::{Deserialize, Serialize};

use crate::domain::{Member, Room, TurnState};

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub members: Vec<String>,
    pub host_id: Option<String>,
    pub players: Vec<String>,
    pub created_at: String, // ISO 8601
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub members: Vec<MemberDetailDto>,
    pub host_id: Option<String>,
    pub players: Vec<String>,
    pub turn_state: TurnStateDto,
    pub created_at: String, // ISO 8601
}

/// Member detail for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetailDto {
    pub id: String,
    pub joined_at: String, // ISO 8601
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurnStateDto {
    pub current_index: i64,
    pub previous_max_volume: f64,
}

impl From<&Room> for RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            members: room
                .members()
                .iter()
                .map(|m| m.id.as_str().to_string())
                .collect(),
            host_id: room.host_id().map(|id| id.as_str().to_string()),
            players: room.player_names(),
            created_at: millis_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&Room> for RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            members: room.members().iter().map(MemberDetailDto::from).collect(),
            host_id: room.host_id().map(|id| id.as_str().to_string()),
            players: room.player_names(),
            turn_state: room.turn_state().into(),
            created_at: millis_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&Member> for MemberDetailDto {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.as_str().to_string(),
            joined_at: millis_to_rfc3339(member.joined_at.value()),
        }
    }
}

impl From<TurnState> for TurnStateDto {
    fn from(state: TurnState) -> Self {
        Self {
            current_index: state.current_index,
            previous_max_volume: state.previous_max_volume,
        }
    }
}
