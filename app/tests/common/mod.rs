use std::sync::Arc;

use octofit::{config::config::Config, core::state::AppState, routes::create_routers};
use sea_orm::DatabaseConnection;

/// Check if a real database is reachable via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Config pointing at the database named by DATABASE_URL.
#[allow(dead_code)]
pub fn db_test_config() -> Config {
    let mut config = Config::test_default();
    config.database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    config
}

/// Create a test app over a disconnected database. Good enough for every
/// route that never touches storage.
#[allow(dead_code)]
pub fn create_test_app(config: Config) -> axum::Router {
    let state = AppState {
        database: DatabaseConnection::default(),
        config,
    };

    create_routers(Arc::new(state))
}
