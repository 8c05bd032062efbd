use mood_notebook_types::json::{Deserialize, Serialize};

/// Hosted sentiment model the service forwards to when no endpoint override
/// is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";

/// Environment variable holding the upstream bearer credential.
pub const DEFAULT_SECRET_NAME: &str = "HF_API_KEY";

/// Configuration for the hosted inference endpoint.
///
/// The credential itself is never stored here — only the name of the secret
/// in the process environment, resolved fresh on every call. `api_key` is an
/// explicit override for tests and embedded callers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub secret_name: String,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            secret_name: DEFAULT_SECRET_NAME.to_string(),
            api_key: None,
        }
    }
}

impl InferenceConfig {
    /// Builds the config from the environment: `HF_API_URL` overrides the
    /// endpoint, the secret name stays fixed.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("HF_API_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            endpoint,
            ..Self::default()
        }
    }

    /// Resolves the bearer credential at call time. Explicit override first,
    /// then the named environment variable; empty values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_deref().filter(|key| !key.is_empty()) {
            return Some(key.to_string());
        }
        std::env::var(&self.secret_name)
            .ok()
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hosted_model() {
        let config = InferenceConfig::default();
        assert!(config.endpoint.contains("distilbert"));
        assert_eq!(config.secret_name, "HF_API_KEY");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = InferenceConfig {
            api_key: Some("test-key".to_string()),
            ..InferenceConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("test-key"));
    }

    #[test]
    fn test_empty_explicit_key_counts_as_missing() {
        let config = InferenceConfig {
            api_key: Some(String::new()),
            secret_name: "MOOD_NOTEBOOK_TEST_SECRET_THAT_IS_NOT_SET".to_string(),
            ..InferenceConfig::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_unset_secret_resolves_to_none() {
        let config = InferenceConfig {
            secret_name: "MOOD_NOTEBOOK_TEST_SECRET_THAT_IS_NOT_SET".to_string(),
            ..InferenceConfig::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_serialization_never_leaks_the_key() {
        let config = InferenceConfig {
            api_key: Some("super-secret".to_string()),
            ..InferenceConfig::default()
        };
        let serialized = serde_json::to_string(&config).unwrap();
        assert!(!serialized.contains("super-secret"));
    }
}
