use serde::Deserialize;
use serde_json::{json, Value};

use super::notify::Notifier;

#[derive(Debug, Deserialize)]
pub struct RecordUserDetails {
    pub email: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_notes")]
    pub notes: String,
}

fn default_name() -> String {
    "Name not provided".to_string()
}

fn default_notes() -> String {
    "not provided".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RecordUnknownQuestion {
    pub question: String,
}

/// Record a visitor's contact details and notify the owner.
pub async fn record_user_details(notifier: &Notifier, args: RecordUserDetails) -> Value {
    notifier
        .push(&format!(
            "User: {} | Email: {} | Notes: {}",
            args.name, args.email, args.notes
        ))
        .await;
    json!({"recorded": "ok"})
}

/// Record a question the assistant could not answer and notify the owner.
pub async fn record_unknown_question(notifier: &Notifier, args: RecordUnknownQuestion) -> Value {
    notifier.push(&format!("Recording {}", args.question)).await;
    json!({"recorded": "ok"})
}
