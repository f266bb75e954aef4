//! Relgraph LLM Provider Layer
//!
//! Pluggable generative model implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `relgraph-domain`.
//! The rest of the workspace treats every model as a black-box `text -> text`
//! function, so relation extraction, entity extraction and summarization all
//! go through the same interface.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use relgraph_llm::MockProvider;
//! use relgraph_domain::LlmProvider;
//!
//! let provider = MockProvider::new("<triplet> Acme <subj> founded_by <obj> Jane");
//! let result = provider.generate("Jane founded Acme.").unwrap();
//! assert!(result.starts_with("<triplet>"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod ollama;

use relgraph_domain::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use config::LlmConfig;
pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// Every prompt it receives is recorded so tests can assert which calls happened.
///
/// # Examples
///
/// ```
/// use relgraph_llm::MockProvider;
/// use relgraph_domain::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Per-prompt responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert_eq!(provider.generate("prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[derive(Debug, Clone)]
enum MockResponse {
    Text(String),
    Error,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MockResponse::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MockResponse::Error);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Forget every recorded prompt
    pub fn clear_history(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        match lock(&self.responses).get(prompt) {
            Some(MockResponse::Text(response)) => Ok(response.clone()),
            Some(MockResponse::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REBEL_OUTPUT: &str = "<triplet> Acme Corp <subj> founded_by <obj> Jane Doe</s>";

    #[test]
    fn test_fixed_response_for_any_sentence() {
        let provider = MockProvider::new(REBEL_OUTPUT);
        assert_eq!(provider.generate("Acme Corp was founded by Jane Doe").unwrap(), REBEL_OUTPUT);
        assert_eq!(provider.generate("Unrelated sentence").unwrap(), REBEL_OUTPUT);
    }

    #[test]
    fn test_per_prompt_responses_fall_back_to_default() {
        let mut provider = MockProvider::new("");
        provider.add_response("Acme Corp was founded by Jane Doe", REBEL_OUTPUT);

        assert_eq!(provider.generate("Acme Corp was founded by Jane Doe").unwrap(), REBEL_OUTPUT);
        assert_eq!(provider.generate("Globex makes widgets").unwrap(), "");
    }

    #[test]
    fn test_prompt_history() {
        let provider = MockProvider::default();
        assert_eq!(provider.call_count(), 0);

        provider.generate("entity prompt").unwrap();
        provider.generate_with_limit("summary prompt", 150).unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts(), vec!["entity prompt", "summary prompt"]);

        provider.clear_history();
        assert!(provider.prompts().is_empty());
    }

    #[test]
    fn test_registered_error() {
        let mut provider = MockProvider::default();
        provider.add_error("Model is down for this sentence");

        let result = provider.generate("Model is down for this sentence");
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_clones_share_history_and_responses() {
        let mut original = MockProvider::default();
        let handle = original.clone();
        original.add_response("q", "a");

        assert_eq!(handle.generate("q").unwrap(), "a");
        assert_eq!(original.call_count(), 1);
    }
}
