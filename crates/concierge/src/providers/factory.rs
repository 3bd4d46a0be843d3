use super::base::Provider;
use super::configs::ProviderConfig;
use super::openai::OpenAiCompatProvider;
use crate::errors::AgentResult;

/// Build a provider from a resolved configuration.
///
/// Every registered provider is OpenAI wire compatible, so this is a single
/// construction path today; it stays the one place to branch if a provider
/// with a different wire format is ever added.
pub fn get_provider(config: ProviderConfig) -> AgentResult<Box<dyn Provider>> {
    Ok(Box::new(OpenAiCompatProvider::new(config)?))
}
