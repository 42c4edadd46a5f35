pub mod activities;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    core::state::AppState,
    handlers::api_root::api_root,
    routes::{
        activities::activity_routes, leaderboard::leaderboard_routes, teams::team_routes,
        users::user_routes, workouts::workout_routes,
    },
    utils::global_error_handler::global_error_handler,
};

pub fn create_routers(state: Arc<AppState>) -> Router<()> {
    let api_routes = Router::new()
        .route("/", get(api_root))
        .nest("/users", user_routes())
        .nest("/teams", team_routes())
        .nest("/activities", activity_routes())
        .nest("/workouts", workout_routes())
        .nest("/leaderboard", leaderboard_routes());

    Router::new()
        .route("/api/", get(api_root))
        .nest("/api", api_routes)
        .fallback(global_error_handler)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
