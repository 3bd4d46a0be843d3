pub mod handlers;
pub mod notify;

use serde_json::{json, Value};

use crate::errors::{AgentError, AgentResult};
use crate::models::tool::Tool;
use self::notify::Notifier;

/// The fixed set of tools the assistant can call.
///
/// Dispatch is a checked match over a closed set of names; an unknown name
/// is a branch, not a lookup failure. The declarations are static and sent
/// unchanged on every completion round.
pub struct Toolbox {
    notifier: Notifier,
}

impl Toolbox {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }

    pub fn declarations(&self) -> Vec<Tool> {
        vec![
            Tool::new(
                "record_user_details",
                "Record that a visitor shared their contact details and is interested in being in touch",
                json!({
                    "type": "object",
                    "properties": {
                        "email": {
                            "type": "string",
                            "description": "The email address of the visitor"
                        },
                        "name": {
                            "type": "string",
                            "description": "The visitor's name, if they provided it"
                        },
                        "notes": {
                            "type": "string",
                            "description": "Any additional context from the conversation worth recording"
                        }
                    },
                    "required": ["email"]
                }),
            ),
            Tool::new(
                "record_unknown_question",
                "Record any question that could not be answered from the profile",
                json!({
                    "type": "object",
                    "properties": {
                        "question": {
                            "type": "string",
                            "description": "The question that could not be answered"
                        }
                    },
                    "required": ["question"]
                }),
            ),
        ]
    }

    /// Execute a tool by name with its decoded arguments.
    ///
    /// Returns `Ok(None)` for a name outside the set; the caller decides what
    /// to do with unresolved calls. Tools always return a result value for
    /// expected conditions, so the model reliably gets a reply.
    pub async fn dispatch(&self, name: &str, arguments: &str) -> AgentResult<Option<Value>> {
        match name {
            "record_user_details" => {
                let args: handlers::RecordUserDetails = decode(arguments)?;
                Ok(Some(handlers::record_user_details(&self.notifier, args).await))
            }
            "record_unknown_question" => {
                let args: handlers::RecordUnknownQuestion = decode(arguments)?;
                Ok(Some(
                    handlers::record_unknown_question(&self.notifier, args).await,
                ))
            }
            _ => Ok(None),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(arguments: &str) -> AgentResult<T> {
    serde_json::from_str(arguments).map_err(|e| AgentError::InvalidArguments(e.to_string()))
}
