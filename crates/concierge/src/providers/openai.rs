use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

use super::base::{Completion, Provider};
use super::configs::ProviderConfig;
use super::utils::{messages_to_spec, response_to_completion, tools_to_spec};
use crate::errors::{AgentError, AgentResult};
use crate::models::message::Message;
use crate::models::tool::Tool;

/// HTTP provider for any endpoint speaking the OpenAI chat completion wire
/// format. Both registered providers (openai, gemini) go through this type;
/// they differ only in host, credential and model identifier.
pub struct OpenAiCompatProvider {
    client: Client,
    config: ProviderConfig,
}

impl OpenAiCompatProvider {
    /// Construction never touches the network.
    pub fn new(config: ProviderConfig) -> AgentResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600))
            .build()?;

        Ok(Self { client, config })
    }

    async fn post(&self, payload: Value) -> AgentResult<Value> {
        let url = format!("{}/chat/completions", self.config.host.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(AgentError::Provider(format!(
                "Request to {} failed: {}",
                self.config.name, status
            ))),
        }
    }
}

#[async_trait]
impl Provider for OpenAiCompatProvider {
    async fn complete(&self, messages: &[Message], tools: &[Tool]) -> AgentResult<Completion> {
        let mut payload = json!({
            "model": self.config.model,
            "messages": messages_to_spec(messages),
        });

        if !tools.is_empty() {
            payload
                .as_object_mut()
                .unwrap()
                .insert("tools".to_string(), json!(tools_to_spec(tools)?));
        }

        let response = self.post(payload).await?;

        if let Some(error) = response.get("error") {
            return Err(AgentError::Provider(format!(
                "{} API error: {}",
                self.config.name, error
            )));
        }

        response_to_completion(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::base::FinishReason;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup_mock_server(response_body: Value) -> (MockServer, OpenAiCompatProvider) {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
            .mount(&mock_server)
            .await;

        let config = ProviderConfig {
            name: "openai".to_string(),
            api_key: "test_api_key".to_string(),
            host: mock_server.uri(),
            model: "gpt-4o-mini".to_string(),
        };

        let provider = OpenAiCompatProvider::new(config).unwrap();
        (mock_server, provider)
    }

    #[tokio::test]
    async fn test_complete_basic() {
        let response_body = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Happy to tell you about his background."
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 12,
                "completion_tokens": 15,
                "total_tokens": 27
            }
        });

        let (_server, provider) = setup_mock_server(response_body).await;

        let messages = vec![Message::user("What does he do?")];
        let completion = provider.complete(&messages, &[]).await.unwrap();

        assert_eq!(completion.finish_reason, FinishReason::Stop);
        assert_eq!(
            completion.content.as_deref(),
            Some("Happy to tell you about his background.")
        );
        assert!(completion.tool_calls.is_empty());
        assert_eq!(completion.usage.total_tokens, Some(27));
    }

    #[tokio::test]
    async fn test_complete_tool_request() {
        let response_body = json!({
            "id": "chatcmpl-tool",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_123",
                        "type": "function",
                        "function": {
                            "name": "record_unknown_question",
                            "arguments": "{\"question\":\"What is his email policy?\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {
                "prompt_tokens": 20,
                "completion_tokens": 15,
                "total_tokens": 35
            }
        });

        let (_server, provider) = setup_mock_server(response_body).await;

        let tool = Tool::new(
            "record_unknown_question",
            "Record a question that could not be answered",
            json!({
                "type": "object",
                "properties": {
                    "question": {"type": "string"}
                },
                "required": ["question"]
            }),
        );

        let messages = vec![Message::user("What's his email policy?")];
        let completion = provider.complete(&messages, &[tool]).await.unwrap();

        assert_eq!(completion.finish_reason, FinishReason::ToolCalls);
        assert_eq!(completion.tool_calls.len(), 1);
        assert_eq!(completion.tool_calls[0].id, "call_123");
        assert_eq!(completion.tool_calls[0].name, "record_unknown_question");
        assert_eq!(
            completion.tool_calls[0].arguments,
            "{\"question\":\"What is his email policy?\"}"
        );
    }

    #[tokio::test]
    async fn test_complete_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let config = ProviderConfig {
            name: "openai".to_string(),
            api_key: "test_api_key".to_string(),
            host: mock_server.uri(),
            model: "gpt-4o-mini".to_string(),
        };
        let provider = OpenAiCompatProvider::new(config).unwrap();

        let result = provider.complete(&[Message::user("Hi")], &[]).await;
        assert!(matches!(result, Err(AgentError::Provider(_))));
    }
}
