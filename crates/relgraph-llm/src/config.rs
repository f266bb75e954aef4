//! Model connection settings shared by the server and the CLI

use crate::ollama::{DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::OllamaProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for an Ollama-backed model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Retry attempts per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl LlmConfig {
    /// Settings for a model on the default local endpoint
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            model: model.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Build the provider described by this configuration
    pub fn build_provider(&self) -> OllamaProvider {
        OllamaProvider::new(self.endpoint.clone(), self.model.clone())
            .with_max_retries(self.max_retries)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

impl Default for LlmConfig {
    /// Text-to-text model used for entity extraction and summaries
    fn default() -> Self {
        Self::for_model("flan-t5-large")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LlmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_model() {
        let config = LlmConfig::for_model("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_retries() {
        let mut config = LlmConfig::default();
        config.max_retries = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_toml_with_defaults() {
        let config: LlmConfig = toml::from_str(r#"model = "rebel-large""#).unwrap();
        assert_eq!(config.model, "rebel-large");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_build_provider() {
        let provider = LlmConfig::for_model("rebel-large").build_provider();
        assert_eq!(provider.model(), "rebel-large");
    }
}
