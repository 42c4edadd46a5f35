use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::prelude::Date;
use serde::Deserialize;

use crate::{
    core::state::AppState,
    models::activity::Model as Activity,
    repos::activities::ActivitiesRepo,
    utils::response::{APIError, APIResponse},
};

#[derive(Debug, Deserialize)]
pub struct ActivityPayload {
    pub user_id: String,
    pub activity_type: String,
    pub duration: i32,
    pub calories: i32,
    pub date: Date,
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Activity>>, APIError> {
    let activities_repo = ActivitiesRepo::new(state.database.clone());
    let activities = activities_repo.list().await?;

    Ok(Json(activities))
}

pub async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<Activity>, APIError> {
    let activities_repo = ActivitiesRepo::new(state.database.clone());
    let activity = activities_repo
        .create(
            payload.user_id,
            payload.activity_type,
            payload.duration,
            payload.calories,
            payload.date,
        )
        .await?;

    Ok(Json(activity))
}

pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<String>,
) -> Result<Json<Activity>, APIError> {
    let activities_repo = ActivitiesRepo::new(state.database.clone());
    let activity = activities_repo.get(activity_id).await?;

    Ok(Json(activity))
}

pub async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<String>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<Activity>, APIError> {
    let activities_repo = ActivitiesRepo::new(state.database.clone());
    let activity = activities_repo
        .update(
            activity_id,
            payload.user_id,
            payload.activity_type,
            payload.duration,
            payload.calories,
            payload.date,
        )
        .await?;

    Ok(Json(activity))
}

pub async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<String>,
) -> Result<APIResponse, APIError> {
    let activities_repo = ActivitiesRepo::new(state.database.clone());
    activities_repo.delete(activity_id).await?;

    Ok(APIResponse::Deleted)
}
