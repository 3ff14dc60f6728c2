use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "info.html")]
pub struct InfoTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "goal.html")]
pub struct GoalTemplate;

/// GET|POST / - Landing page
pub async fn index_handler() -> IndexTemplate {
    IndexTemplate
}

/// GET|POST /info - Static information page
pub async fn info_handler() -> InfoTemplate {
    InfoTemplate
}

/// GET|POST /goal - Goal input form
pub async fn goal_handler() -> GoalTemplate {
    GoalTemplate
}
