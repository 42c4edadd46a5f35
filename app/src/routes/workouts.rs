use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::workouts::{
        create_workout, delete_workout, get_workout, list_workouts, update_workout,
    },
};

pub fn workout_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}
