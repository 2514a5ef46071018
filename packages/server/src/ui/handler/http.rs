//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of active rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let table = state.registry.lock().await;
    let rooms = table
        .rooms()
        .into_iter()
        .map(RoomSummaryDto::from)
        .collect();

    Json(rooms)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let table = state.registry.lock().await;
    let room = table
        .get(&RoomId::new(room_id))
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(RoomDetailDto::from(room)))
}
