use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Unsupported provider: {requested}. Available providers: {available}")]
    UnsupportedProvider { requested: String, available: String },

    #[error("Provider {provider} has no credential configured, set {env_var}")]
    MissingCredential { provider: String, env_var: String },

    #[error("Provider request failed: {0}")]
    Provider(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool loop exceeded {0} rounds without a final answer")]
    ToolLoopExceeded(usize),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AgentResult<T> = Result<T, AgentError>;

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::Provider(err.to_string())
    }
}
