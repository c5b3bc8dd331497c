//! Client configuration.

use crate::error::SdkError;

/// Default registry endpoint
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8080";

/// Default request timeout (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the registry URL
pub const ENV_REGISTRY_URL: &str = "VOUCH_REGISTRY_URL";

/// Environment variable carrying the API key
pub const ENV_API_KEY: &str = "VOUCH_API_KEY";

/// Environment variable overriding the timeout
pub const ENV_TIMEOUT_SECS: &str = "VOUCH_TIMEOUT_SECS";

/// Registry client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Registry base URL (e.g., "https://registry.example.com/api")
    pub base_url: String,

    /// Opaque API key, sent as `x-api-key` when present
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given registry URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Build a configuration from `VOUCH_*` environment variables
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_REGISTRY_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url;
        }

        config.api_key = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty());

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                SdkError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            if config.timeout_secs == 0 {
                return Err(SdkError::Config(format!(
                    "{} must be at least 1 second",
                    ENV_TIMEOUT_SECS
                )));
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://registry.example.com")
            .with_api_key("secret")
            .with_timeout_secs(3);
        assert_eq!(config.base_url, "https://registry.example.com");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_from_env_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_REGISTRY_URL, "https://r.example.com"),
            (ENV_API_KEY, "k"),
            (ENV_TIMEOUT_SECS, "30"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://r.example.com");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_env_defaults_and_blank_values() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, "  ")])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_env_bad_timeout() {
        let result = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_from_env_zero_timeout() {
        let result = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")]));
        assert!(matches!(result, Err(SdkError::Config(_))));
    }
}
