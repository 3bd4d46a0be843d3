use tracing::{debug, warn};

use crate::errors::{AgentError, AgentResult};
use crate::models::message::Message;
use crate::models::tool::Tool;
use crate::providers::base::Provider;
use crate::tools::Toolbox;

/// Upper bound on completion rounds within one chat turn. A model that keeps
/// requesting tool calls past this many rounds fails the turn.
pub const MAX_TOOL_ROUNDS: usize = 5;

/// Drives the bounded tool-calling loop between the model and the toolbox.
///
/// One `chat` call is one turn: it owns its conversation buffer, runs to a
/// final text answer or an error, and shares nothing with concurrent turns.
pub struct Agent {
    provider: Box<dyn Provider>,
    toolbox: Toolbox,
    system_prompt: String,
    declarations: Vec<Tool>,
}

impl Agent {
    pub fn new(provider: Box<dyn Provider>, toolbox: Toolbox, system_prompt: String) -> Self {
        let declarations = toolbox.declarations();
        Self {
            provider,
            toolbox,
            system_prompt,
            declarations,
        }
    }

    /// Run one turn: seed the buffer with the system prompt, the prior
    /// history and the new user message, then loop with the model until it
    /// answers in plain text.
    ///
    /// The assistant text is returned verbatim, including the empty string
    /// when the model stops with no content. Unknown tool names are dropped
    /// without a result message; see DESIGN.md for both choices.
    pub async fn chat(&self, message: &str, history: &[Message]) -> AgentResult<String> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(&self.system_prompt));
        messages.extend_from_slice(history);
        messages.push(Message::user(message));

        for round in 0..MAX_TOOL_ROUNDS {
            let completion = self
                .provider
                .complete(&messages, &self.declarations)
                .await?;
            debug!(
                round,
                input_tokens = ?completion.usage.input_tokens,
                output_tokens = ?completion.usage.output_tokens,
                "completion round finished"
            );

            if !completion.requested_tools() {
                return Ok(completion.content.unwrap_or_default());
            }

            // The assistant message carrying the requests must precede the
            // tool results that answer it; result matching depends on it.
            let tool_calls = completion.tool_calls;
            messages.push(Message::assistant_tool_calls(
                completion.content,
                tool_calls.clone(),
            ));

            for call in tool_calls {
                match self.toolbox.dispatch(&call.name, &call.arguments).await? {
                    Some(output) => {
                        messages.push(Message::tool(call.id, output.to_string()));
                    }
                    None => {
                        // Inherited behavior: the call gets no reply at all.
                        warn!(tool = %call.name, id = %call.id, "dropping call to unknown tool");
                    }
                }
            }
        }

        Err(AgentError::ToolLoopExceeded(MAX_TOOL_ROUNDS))
    }
}
