//! Result types for extraction runs

use relgraph_domain::Triplet;

/// Result of an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Unique triplets in first-seen order
    pub triplets: Vec<Triplet>,

    /// Sentences whose model call failed
    pub failures: Vec<ExtractionFailure>,

    /// Metadata about the run
    pub metadata: ExtractionMetadata,
}

/// Information about a sentence that could not be processed
#[derive(Debug, Clone)]
pub struct ExtractionFailure {
    /// Position of the sentence among those sent to the model
    pub sentence_index: usize,

    /// Reason for failure
    pub reason: String,

    /// Sentence that failed
    pub sentence: String,
}

/// Metadata about an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Name of the extraction model
    pub model_name: String,

    /// Fragments found in the document
    pub total_sentences: usize,

    /// Fragments skipped for being too short
    pub skipped_sentences: usize,

    /// Sentences sent to the model
    pub processed_sentences: usize,

    /// Triplets parsed before deduplication
    pub raw_triplet_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Whether every processed sentence was handled by the model
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Triplets removed as duplicates
    pub fn duplicates_removed(&self) -> usize {
        self.metadata
            .raw_triplet_count
            .saturating_sub(self.triplets.len())
    }
}
