use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use concierge::models::message::Message;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

// Types matching the incoming JSON structure
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryMessage>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

// Convert incoming role/content pairs to the internal Message type. Only
// user and assistant turns belong in history; anything else is skipped.
fn convert_history(incoming: &[HistoryMessage]) -> Vec<Message> {
    incoming
        .iter()
        .filter_map(|msg| match msg.role.as_str() {
            "user" => Some(Message::user(&msg.content)),
            "assistant" => Some(Message::assistant(&msg.content)),
            _ => None,
        })
        .collect()
}

async fn reply(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<serde_json::Value>)> {
    info!(history_len = request.history.len(), "received chat turn");

    let history = convert_history(&request.history);
    match state.agent.chat(&request.message, &history).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(e) => {
            // A failed turn does not affect other turns or process state
            error!("chat turn failed: {e}");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": e.to_string()})),
            ))
        }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new().route("/reply", post(reply)).with_state(state)
}
