use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::warn;

pub const PUSHOVER_URL: &str = "https://api.pushover.net/1/messages.json";
const PUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// Fire-and-forget push notifications to the profile owner.
///
/// With no token or user configured, pushes are skipped entirely. Transport
/// failures are logged and swallowed; a failed push never changes a tool's
/// result.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: Client,
    token: Option<String>,
    user: Option<String>,
    endpoint: String,
}

impl Notifier {
    pub fn new(token: Option<String>, user: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(PUSH_TIMEOUT)
                .build()
                .unwrap_or_default(),
            token,
            user,
            endpoint: PUSHOVER_URL.to_string(),
        }
    }

    /// Read `PUSHOVER_TOKEN` / `PUSHOVER_USER`; either may be absent.
    pub fn from_env() -> Self {
        Self::new(env::var("PUSHOVER_TOKEN").ok(), env::var("PUSHOVER_USER").ok())
    }

    /// A notifier with no destination; every push is a no-op.
    pub fn disabled() -> Self {
        Self::new(None, None)
    }

    /// Override the sink endpoint, for tests.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn push(&self, message: &str) {
        let (Some(token), Some(user)) = (&self.token, &self.user) else {
            return;
        };

        let form = [
            ("token", token.as_str()),
            ("user", user.as_str()),
            ("message", message),
        ];

        if let Err(e) = self.client.post(&self.endpoint).form(&form).send().await {
            warn!("notification push failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_push_skipped_without_destination() {
        // No server is listening anywhere; returning without panicking is the
        // whole contract.
        Notifier::disabled().push("hello").await;
        Notifier::new(Some("token".to_string()), None)
            .push("hello")
            .await;
    }

    #[tokio::test]
    async fn test_push_sends_form_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/messages.json"))
            .and(body_string_contains("token=app-token"))
            .and(body_string_contains("user=user-key"))
            .and(body_string_contains("message=Recording"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = Notifier::new(Some("app-token".to_string()), Some("user-key".to_string()))
            .with_endpoint(format!("{}/1/messages.json", server.uri()));
        notifier.push("Recording a question").await;
    }

    #[tokio::test]
    async fn test_push_swallows_transport_failure() {
        // Nothing listens on this port; the send error must not escape.
        let notifier = Notifier::new(Some("app-token".to_string()), Some("user-key".to_string()))
            .with_endpoint("http://127.0.0.1:9/1/messages.json");
        notifier.push("hello").await;
    }
}
