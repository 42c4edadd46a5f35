use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::teams::{create_team, delete_team, get_team, list_teams, update_team},
};

pub fn team_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/:id", get(get_team).put(update_team).delete(delete_team))
}
