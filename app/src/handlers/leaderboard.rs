use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{
    core::state::AppState,
    models::leaderboard::Model as LeaderboardEntry,
    repos::leaderboard::LeaderboardRepo,
    utils::response::{APIError, APIResponse},
};

#[derive(Debug, Deserialize)]
pub struct LeaderboardPayload {
    pub team_id: String,
    pub points: i32,
}

pub async fn list_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>, APIError> {
    let leaderboard_repo = LeaderboardRepo::new(state.database.clone());
    let entries = leaderboard_repo.list().await?;

    Ok(Json(entries))
}

pub async fn create_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LeaderboardPayload>,
) -> Result<Json<LeaderboardEntry>, APIError> {
    let leaderboard_repo = LeaderboardRepo::new(state.database.clone());
    let entry = leaderboard_repo
        .create(payload.team_id, payload.points)
        .await?;

    Ok(Json(entry))
}

pub async fn get_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
) -> Result<Json<LeaderboardEntry>, APIError> {
    let leaderboard_repo = LeaderboardRepo::new(state.database.clone());
    let entry = leaderboard_repo.get(entry_id).await?;

    Ok(Json(entry))
}

pub async fn update_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
    Json(payload): Json<LeaderboardPayload>,
) -> Result<Json<LeaderboardEntry>, APIError> {
    let leaderboard_repo = LeaderboardRepo::new(state.database.clone());
    let entry = leaderboard_repo
        .update(entry_id, payload.team_id, payload.points)
        .await?;

    Ok(Json(entry))
}

pub async fn delete_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
) -> Result<APIResponse, APIError> {
    let leaderboard_repo = LeaderboardRepo::new(state.database.clone());
    leaderboard_repo.delete(entry_id).await?;

    Ok(APIResponse::Deleted)
}
