//! Error types for the Extractor

use thiserror::Error;

/// Errors that can abort an extraction run
///
/// Per-sentence model failures are not errors; they are recorded in
/// [`ExtractionResult::failures`](crate::ExtractionResult) and the run continues.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
