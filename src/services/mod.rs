pub mod profile_service;
pub mod progress;

pub use profile_service::{ProfileService, ProfileServiceError};
pub use progress::{Amount, DashboardSummary, GoalForm, GoalResults, ProgressForm, ProgressQuery};
