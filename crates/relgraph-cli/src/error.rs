//! Error types for the CLI application.

use relgraph_extractor::ExtractorError;
use relgraph_query::QueryError;
use relgraph_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Snapshot error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractorError),

    /// Query error
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
