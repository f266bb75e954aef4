//! Error types for the query engine

use thiserror::Error;

/// Errors that can occur while answering a question
///
/// An empty retrieval is not an error; it produces the no-data message.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The question was empty or whitespace
    #[error("Query parameter 'q' is required.")]
    EmptyQuestion,

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Model call exceeded its time budget
    #[error("Model call timed out after {0}s")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
