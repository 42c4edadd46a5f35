use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::leaderboard::{
        create_leaderboard_entry, delete_leaderboard_entry, get_leaderboard_entry,
        list_leaderboard, update_leaderboard_entry,
    },
};

pub fn leaderboard_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_leaderboard).post(create_leaderboard_entry))
        .route(
            "/:id",
            get(get_leaderboard_entry)
                .put(update_leaderboard_entry)
                .delete(delete_leaderboard_entry),
        )
}
