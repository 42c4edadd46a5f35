use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{
    core::state::AppState,
    models::workout::{Difficulty, Model as Workout},
    repos::workouts::WorkoutsRepo,
    utils::response::{APIError, APIResponse},
};

#[derive(Debug, Deserialize)]
pub struct WorkoutPayload {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
}

pub async fn list_workouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Workout>>, APIError> {
    let workouts_repo = WorkoutsRepo::new(state.database.clone());
    let workouts = workouts_repo.list().await?;

    Ok(Json(workouts))
}

pub async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WorkoutPayload>,
) -> Result<Json<Workout>, APIError> {
    let workouts_repo = WorkoutsRepo::new(state.database.clone());
    let workout = workouts_repo
        .create(payload.name, payload.description, payload.difficulty)
        .await?;

    Ok(Json(workout))
}

pub async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<String>,
) -> Result<Json<Workout>, APIError> {
    let workouts_repo = WorkoutsRepo::new(state.database.clone());
    let workout = workouts_repo.get(workout_id).await?;

    Ok(Json(workout))
}

pub async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<String>,
    Json(payload): Json<WorkoutPayload>,
) -> Result<Json<Workout>, APIError> {
    let workouts_repo = WorkoutsRepo::new(state.database.clone());
    let workout = workouts_repo
        .update(
            workout_id,
            payload.name,
            payload.description,
            payload.difficulty,
        )
        .await?;

    Ok(Json(workout))
}

pub async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<String>,
) -> Result<APIResponse, APIError> {
    let workouts_repo = WorkoutsRepo::new(state.database.clone());
    workouts_repo.delete(workout_id).await?;

    Ok(APIResponse::Deleted)
}
