use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{
    core::state::AppState,
    models::team::Model as Team,
    repos::teams::TeamsRepo,
    utils::response::{APIError, APIResponse},
};

#[derive(Debug, Deserialize)]
pub struct TeamPayload {
    pub name: String,
}

pub async fn list_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Team>>, APIError> {
    let teams_repo = TeamsRepo::new(state.database.clone());
    let teams = teams_repo.list().await?;

    Ok(Json(teams))
}

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TeamPayload>,
) -> Result<Json<Team>, APIError> {
    let teams_repo = TeamsRepo::new(state.database.clone());
    let team = teams_repo.create(payload.name).await?;

    Ok(Json(team))
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
) -> Result<Json<Team>, APIError> {
    let teams_repo = TeamsRepo::new(state.database.clone());
    let team = teams_repo.get(team_id).await?;

    Ok(Json(team))
}

pub async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
    Json(payload): Json<TeamPayload>,
) -> Result<Json<Team>, APIError> {
    let teams_repo = TeamsRepo::new(state.database.clone());
    let team = teams_repo.update(team_id, payload.name).await?;

    Ok(Json(team))
}

pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
) -> Result<APIResponse, APIError> {
    let teams_repo = TeamsRepo::new(state.database.clone());
    teams_repo.delete(team_id).await?;

    Ok(APIResponse::Deleted)
}
