pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

/// Per-process context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<services::profile_service::ProfileService>,
    pub api_token: Option<String>,
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool, api_token: Option<String>) -> Self {
        let user_repository = Arc::new(repositories::SqliteUserRepository::new(pool));
        Self {
            profile_service: Arc::new(services::ProfileService::new(user_repository)),
            api_token,
        }
    }
}
