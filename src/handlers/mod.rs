pub mod dashboard_handlers;
pub mod form;
pub mod page_handlers;
pub mod profile_handlers;

pub use dashboard_handlers::{
    dashboard_handler, goal_results_handler, show_dashboard_handler, show_goal_results_handler,
};
pub use form::PageForm;
pub use page_handlers::{goal_handler, index_handler, info_handler};
pub use profile_handlers::{
    show_profile_handler, submit_profile_handler, update_profile_api_handler,
};
