use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{
    core::state::AppState,
    models::user::Model as User,
    repos::users::UsersRepo,
    utils::response::{APIError, APIResponse},
};

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub team_id: String,
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let users = users_repo.list().await?;

    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let user = users_repo
        .create(payload.name, payload.email, payload.team_id)
        .await?;

    Ok(Json(user))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let user = users_repo.get(user_id).await?;

    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let user = users_repo
        .update(user_id, payload.name, payload.email, payload.team_id)
        .await?;

    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<APIResponse, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    users_repo.delete(user_id).await?;

    Ok(APIResponse::Deleted)
}
