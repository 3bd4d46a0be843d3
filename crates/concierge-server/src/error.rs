use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: set {env_var}")]
    MissingEnvVar { env_var: String },

    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

/// Map a dotted settings field back to the environment variable that sets it,
/// e.g. `profile.name` -> `CONCIERGE_PROFILE__NAME`.
pub fn to_env_var(field: &str) -> String {
    format!("CONCIERGE_{}", field.replace('.', "__").to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_env_var() {
        assert_eq!(to_env_var("profile.name"), "CONCIERGE_PROFILE__NAME");
        assert_eq!(to_env_var("server.port"), "CONCIERGE_SERVER__PORT");
        assert_eq!(to_env_var("provider"), "CONCIERGE_PROVIDER");
    }
}
