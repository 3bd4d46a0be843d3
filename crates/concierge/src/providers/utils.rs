use serde_json::{json, Value};

use crate::errors::{AgentError, AgentResult};
use crate::models::message::{Message, ToolCallRequest};
use crate::models::tool::Tool;
use crate::providers::base::{Completion, FinishReason, Usage};

/// Convert the internal message format to the OpenAI chat completion
/// message specification.
///
/// Assistant messages carry their requests under `tool_calls`; tool result
/// messages carry `tool_call_id` and `role = "tool"`. Assistant content is
/// serialized as `null` when absent, matching what the provider sent.
pub fn messages_to_spec(messages: &[Message]) -> Vec<Value> {
    let mut spec = Vec::new();

    for message in messages {
        let mut converted = json!({
            "role": message.role,
            "content": &message.content,
        });

        if !message.tool_calls.is_empty() {
            let calls: Vec<Value> = message
                .tool_calls
                .iter()
                .map(|call| {
                    json!({
                        "id": call.id,
                        "type": "function",
                        "function": {
                            "name": call.name,
                            "arguments": call.arguments,
                        }
                    })
                })
                .collect();
            converted
                .as_object_mut()
                .unwrap()
                .insert("tool_calls".to_string(), json!(calls));
        }

        if let Some(id) = &message.tool_call_id {
            converted
                .as_object_mut()
                .unwrap()
                .insert("tool_call_id".to_string(), json!(id));
        }

        spec.push(converted);
    }

    spec
}

/// Convert internal Tool declarations to the OpenAI function tool
/// specification.
pub fn tools_to_spec(tools: &[Tool]) -> AgentResult<Vec<Value>> {
    let mut tool_names = std::collections::HashSet::new();
    let mut result = Vec::new();

    for tool in tools {
        if !tool_names.insert(&tool.name) {
            return Err(AgentError::Internal(format!(
                "Duplicate tool name: {}",
                tool.name
            )));
        }

        result.push(json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": tool.parameters,
            }
        }));
    }

    Ok(result)
}

/// Normalize a raw chat completion response into a Completion.
///
/// This is the seam that keeps the orchestrator away from the provider wire
/// format. Tool call arguments are carried through as the raw text the
/// provider sent; absence of tool calls yields an empty list, not an error.
pub fn response_to_completion(response: Value) -> AgentResult<Completion> {
    let choice = response
        .get("choices")
        .and_then(|c| c.get(0))
        .ok_or_else(|| AgentError::Provider(format!("Response has no choices: {response}")))?;

    let finish_reason = choice
        .get("finish_reason")
        .and_then(|r| r.as_str())
        .map(FinishReason::parse)
        .unwrap_or(FinishReason::Other("missing".to_string()));

    let message = &choice["message"];
    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .map(String::from);

    let mut tool_calls = Vec::new();
    if let Some(calls) = message.get("tool_calls").and_then(|t| t.as_array()) {
        for call in calls {
            let id = call["id"].as_str().unwrap_or_default().to_string();
            let name = call["function"]["name"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            let arguments = call["function"]["arguments"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            tool_calls.push(ToolCallRequest { id, name, arguments });
        }
    }

    Ok(Completion {
        finish_reason,
        content,
        tool_calls,
        usage: get_usage(&response),
    })
}

fn get_usage(response: &Value) -> Usage {
    let usage = match response.get("usage") {
        Some(usage) => usage,
        None => return Usage::default(),
    };

    let input_tokens = usage
        .get("prompt_tokens")
        .and_then(|v| v.as_i64())
        .map(|v| v as i32);
    let output_tokens = usage
        .get("completion_tokens")
        .and_then(|v| v.as_i64())
        .map(|v| v as i32);
    let total_tokens = usage
        .get("total_tokens")
        .and_then(|v| v.as_i64())
        .map(|v| v as i32)
        .or_else(|| match (input_tokens, output_tokens) {
            (Some(input), Some(output)) => Some(input + output),
            _ => None,
        });

    Usage::new(input_tokens, output_tokens, total_tokens)
}
