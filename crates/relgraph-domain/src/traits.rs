//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for generative model operations
///
/// The model is a black-box `text -> text` function. It is used both for
/// relation extraction (raw tagged output) and for free-text generation
/// (entity extraction, summarization).
///
/// Implemented by the infrastructure layer (relgraph-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate text completion with an upper bound on new tokens
    ///
    /// Providers without a token budget ignore the limit.
    fn generate_with_limit(
        &self,
        prompt: &str,
        max_new_tokens: usize,
    ) -> Result<String, Self::Error> {
        let _ = max_new_tokens;
        self.generate(prompt)
    }
}
