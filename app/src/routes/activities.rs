use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::activities::{
        create_activity, delete_activity, get_activity, list_activities, update_activity,
    },
};

pub fn activity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_activities).post(create_activity))
        .route(
            "/:id",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
}
