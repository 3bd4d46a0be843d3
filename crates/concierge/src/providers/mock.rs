use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::errors::AgentResult;
use crate::models::message::Message;
use crate::models::tool::Tool;
use crate::providers::base::{Completion, FinishReason, Provider, Usage};

/// A mock provider that returns pre-configured completions for testing, and
/// records the message buffer it was called with on each round.
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Completion>>>,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of completions
    pub fn new(responses: Vec<Completion>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The message buffers received so far, one entry per completion call
    pub fn calls(&self) -> Arc<Mutex<Vec<Vec<Message>>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, messages: &[Message], _tools: &[Tool]) -> AgentResult<Completion> {
        self.calls.lock().unwrap().push(messages.to_vec());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Keep answering with an empty completion once the script runs out
            Ok(Completion {
                finish_reason: FinishReason::Stop,
                content: Some(String::new()),
                tool_calls: Vec::new(),
                usage: Usage::default(),
            })
        } else {
            Ok(responses.remove(0))
        }
    }
}
