use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AgentResult;
use crate::models::message::{Message, ToolCallRequest};
use crate::models::tool::Tool;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// The provider's classification of why a completion response ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    ToolCalls,
    Length,
    Other(String),
}

impl FinishReason {
    pub fn parse(reason: &str) -> Self {
        match reason {
            "stop" => FinishReason::Stop,
            "tool_calls" => FinishReason::ToolCalls,
            "length" => FinishReason::Length,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// One normalized model response.
///
/// `tool_calls` is the projection the orchestrator works from: it is empty
/// whenever the model did not request tools, which is a normal state and
/// never an error.
#[derive(Debug, Clone)]
pub struct Completion {
    pub finish_reason: FinishReason,
    pub content: Option<String>,
    pub tool_calls: Vec<ToolCallRequest>,
    pub usage: Usage,
}

impl Completion {
    pub fn requested_tools(&self) -> bool {
        self.finish_reason == FinishReason::ToolCalls
    }
}

/// Base trait for model providers (OpenAI, Gemini, and any other endpoint
/// speaking the OpenAI chat completion wire format)
#[async_trait]
pub trait Provider: Send + Sync {
    /// Run one completion over the full message sequence, declaring the given
    /// tools. Network and provider failures propagate to the caller; there
    /// are no retries at this layer.
    async fn complete(&self, messages: &[Message], tools: &[Tool]) -> AgentResult<Completion>;
}
