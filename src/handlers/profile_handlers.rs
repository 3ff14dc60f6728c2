use crate::error::AppError;
use crate::handlers::form::PageForm;
use crate::models::{ProfileUpdate, User};
use crate::services::ProfileServiceError;
use crate::AppState;
use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Json};
use serde::Serialize;

#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub user: Option<User>,
    pub api_token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The profile page renders even when the lookup fails; the failure is only logged.
fn render_profile(
    state: &AppState,
    user: Result<Option<User>, ProfileServiceError>,
) -> ProfileTemplate {
    let user = user.unwrap_or_else(|e| {
        tracing::error!("Error loading profile: {}", e);
        None
    });

    ProfileTemplate {
        user,
        api_token: state.api_token.clone().unwrap_or_default(),
    }
}

/// GET /profile - Show the current profile
pub async fn show_profile_handler(State(state): State<AppState>) -> ProfileTemplate {
    let user = state.profile_service.find_profile().await;
    render_profile(&state, user)
}

/// POST /profile - Overwrite the profile from form fields
///
/// Write failures are logged by the service and the page renders anyway.
pub async fn submit_profile_handler(
    State(state): State<AppState>,
    PageForm(form): PageForm<ProfileUpdate>,
) -> ProfileTemplate {
    let user = state.profile_service.submit_profile_form(form).await;
    render_profile(&state, user)
}

/// PUT /api/profile - Overwrite the profile from a JSON body
pub async fn update_profile_api_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<MessageResponse>, AppError> {
    state.profile_service.update_profile(payload).await?;

    tracing::info!("Profile updated through API");

    Ok(Json(MessageResponse {
        message: "Profile updated successfully!".to_string(),
    }))
}
