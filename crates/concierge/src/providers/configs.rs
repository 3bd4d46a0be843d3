use std::collections::BTreeMap;
use std::env;

use crate::errors::{AgentError, AgentResult};

pub const OPENAI_HOST: &str = "https://api.openai.com/v1";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const GEMINI_HOST: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Connection parameters for one named provider, immutable after load.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: String,
    pub api_key: String,
    pub host: String,
    pub model: String,
}

#[derive(Debug, Clone)]
struct ProviderEntry {
    api_key: Option<String>,
    key_env_var: &'static str,
    host: String,
    model: String,
}

/// The fixed set of named provider bundles, resolved once at startup.
///
/// All registered providers speak the OpenAI chat completion wire format, so
/// a single HTTP provider implementation serves every entry; only the
/// endpoint, credential and model identifier differ.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    entries: BTreeMap<String, ProviderEntry>,
}

impl ProviderRegistry {
    /// Build the registry from environment variables. Missing credentials do
    /// not fail here; they fail when the provider in question is resolved.
    pub fn from_env() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "openai".to_string(),
            ProviderEntry {
                api_key: env::var("OPENAI_API_KEY").ok(),
                key_env_var: "OPENAI_API_KEY",
                host: env_or("OPENAI_BASE_URL", OPENAI_HOST),
                model: env_or("OPENAI_MODEL", OPENAI_MODEL),
            },
        );
        entries.insert(
            "gemini".to_string(),
            ProviderEntry {
                api_key: env::var("GEMINI_API_KEY").ok(),
                key_env_var: "GEMINI_API_KEY",
                host: env_or("GEMINI_BASE_URL", GEMINI_HOST),
                model: env_or("GEMINI_MODEL", GEMINI_MODEL),
            },
        );
        Self { entries }
    }

    /// The provider names this registry can resolve.
    pub fn available(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Look up a named provider bundle. Unknown names and registered names
    /// with no credential are both configuration errors, raised before any
    /// network activity.
    pub fn resolve(&self, name: &str) -> AgentResult<ProviderConfig> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| AgentError::UnsupportedProvider {
                requested: name.to_string(),
                available: self.available().join(", "),
            })?;

        let api_key = entry
            .api_key
            .clone()
            .ok_or_else(|| AgentError::MissingCredential {
                provider: name.to_string(),
                env_var: entry.key_env_var.to_string(),
            })?;

        Ok(ProviderConfig {
            name: name.to_string(),
            api_key,
            host: entry.host.clone(),
            model: entry.model.clone(),
        })
    }
}

/// The provider name to use when none is configured.
pub fn default_provider() -> String {
    env_or("LLM_PROVIDER", "openai")
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
