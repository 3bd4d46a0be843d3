// Export route modules
pub mod greeting;
pub mod reply;
pub mod ui;

use crate::state::AppState;
use axum::Router;

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(ui::routes())
        .merge(greeting::routes(state.clone()))
        .merge(reply::routes(state))
}
