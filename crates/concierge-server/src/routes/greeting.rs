use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: String,
}

/// The fixed welcome shown before any turn has happened.
pub fn welcome_message(name: &str) -> String {
    format!(
        "\u{1F44B} Hi! I'm {name}'s AI assistant.\n\n\
         I can help you learn about their professional background, skills and \
         experience. What would you like to know?"
    )
}

async fn greeting(State(state): State<AppState>) -> Json<Greeting> {
    Json(Greeting {
        greeting: state.greeting.clone(),
    })
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/greeting", get(greeting))
        .with_state(state)
}
