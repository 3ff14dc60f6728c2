use crate::handlers::form::PageForm;
use crate::services::progress::{
    DashboardSummary, GoalForm, GoalResults, ProgressForm, ProgressQuery,
};
use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub balance: String,
    pub progress: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "goal_results.html")]
pub struct GoalResultsTemplate {
    pub retirement_goal: String,
    pub home_purchase_goal: String,
    pub target_year1: String,
    pub target_year2: String,
    pub status1: String,
    pub status2: String,
}

impl From<DashboardSummary> for DashboardTemplate {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            balance: summary.balance.to_string(),
            progress: summary.progress.to_string(),
        }
    }
}

impl From<GoalResults> for GoalResultsTemplate {
    fn from(results: GoalResults) -> Self {
        Self {
            retirement_goal: results.retirement_goal.to_string(),
            home_purchase_goal: results.home_purchase_goal.to_string(),
            target_year1: results.target_year1,
            target_year2: results.target_year2,
            status1: results.status1.to_string(),
            status2: results.status2.to_string(),
        }
    }
}

/// GET /dashboard - Dashboard with zeroed inputs
pub async fn show_dashboard_handler() -> DashboardTemplate {
    DashboardSummary::from_query(ProgressQuery::default()).into()
}

/// POST /dashboard - Progress of a balance towards one goal
pub async fn dashboard_handler(PageForm(form): PageForm<ProgressForm>) -> DashboardTemplate {
    let query = ProgressQuery::from(&form);
    tracing::debug!(balance = %query.balance, goal = %query.goal, "Computing dashboard progress");
    DashboardSummary::from_query(query).into()
}

/// GET /goal_results - Results page with zeroed inputs
pub async fn show_goal_results_handler() -> GoalResultsTemplate {
    GoalResults::compute(&GoalForm::default()).into()
}

/// POST /goal_results - Progress towards the retirement and home purchase goals
pub async fn goal_results_handler(PageForm(form): PageForm<GoalForm>) -> GoalResultsTemplate {
    GoalResults::compute(&form).into()
}
