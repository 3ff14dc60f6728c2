use crate::{handlers, AppState};
use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Builds the full HTTP surface with its state attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler).post(handlers::index_handler))
        .route(
            "/profile",
            get(handlers::show_profile_handler).post(handlers::submit_profile_handler),
        )
        .route("/api/profile", put(handlers::update_profile_api_handler))
        .route("/info", get(handlers::info_handler).post(handlers::info_handler))
        .route(
            "/dashboard",
            get(handlers::show_dashboard_handler).post(handlers::dashboard_handler),
        )
        .route("/goal", get(handlers::goal_handler).post(handlers::goal_handler))
        .route(
            "/goal_results",
            get(handlers::show_goal_results_handler).post(handlers::goal_results_handler),
        )
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
