//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::TripletParser;
use crate::sentences::SentenceSplitter;
use crate::types::{ExtractionFailure, ExtractionMetadata, ExtractionResult};
use relgraph_domain::{LlmProvider, Triplet};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Extractor turns free text into relation triplets, one sentence at a time
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    parser: TripletParser,
    config: ExtractorConfig,
    model_name: String,
}

impl<L> Extractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            parser: TripletParser::with_markers(config.markers.clone()),
            config,
            model_name: "llm".to_string(),
        })
    }

    /// Create a new Extractor with a specific model name
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Extract triplets from a document
    ///
    /// A sentence whose model call fails or times out is recorded as a
    /// failure and skipped; it never aborts the run.
    pub async fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractorError> {
        let text_length = text.chars().count();
        if text_length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                text_length,
                self.config.max_text_length,
            ));
        }

        let start_time = Instant::now();
        let split = SentenceSplitter::new(self.config.min_sentence_length).split(text);

        info!(
            "Starting extraction: {} sentences ({} skipped as too short), model '{}'",
            split.sentences.len(),
            split.skipped,
            self.model_name
        );

        let mut triplets = Vec::new();
        let mut failures = Vec::new();

        for (idx, sentence) in split.sentences.iter().enumerate() {
            if idx > 0 && idx % self.config.progress_interval == 0 {
                info!("...processed {}/{} sentences", idx, split.sentences.len());
            }

            match self.call_llm(sentence).await {
                Ok(raw_output) => {
                    let parsed = self.parser.parse(&raw_output);
                    debug!("Sentence {}: {} triplets", idx, parsed.len());
                    triplets.extend(parsed);
                }
                Err(reason) => {
                    warn!("Could not process sentence {}: {}", idx, reason);
                    failures.push(ExtractionFailure {
                        sentence_index: idx,
                        reason,
                        sentence: sentence.clone(),
                    });
                }
            }
        }

        let raw_triplet_count = triplets.len();
        let triplets = dedupe(triplets);

        let metadata = ExtractionMetadata {
            model_name: self.model_name.clone(),
            total_sentences: split.total,
            skipped_sentences: split.skipped,
            processed_sentences: split.sentences.len(),
            raw_triplet_count,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete: {} unique triplets, {} failed sentences",
            triplets.len(),
            failures.len()
        );

        Ok(ExtractionResult {
            triplets,
            failures,
            metadata,
        })
    }

    /// Call the model for one sentence, under the configured timeout
    async fn call_llm(&self, sentence: &str) -> Result<String, String> {
        let llm = Arc::clone(&self.llm_provider);
        let prompt = sentence.to_string();

        // LlmProvider is blocking; keep it off the async workers
        let task = tokio::task::spawn_blocking(move || {
            llm.generate(&prompt).map_err(|e| e.to_string())
        });

        match timeout(self.config.extraction_timeout(), task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(format!("Task join error: {}", join_error)),
            Err(_) => Err(format!(
                "Timed out after {}s",
                self.config.extraction_timeout_secs
            )),
        }
    }
}

/// Remove exact duplicates, keeping the first occurrence
fn dedupe(triplets: Vec<Triplet>) -> Vec<Triplet> {
    let mut seen = HashSet::with_capacity(triplets.len());
    triplets
        .into_iter()
        .filter(|triplet| seen.insert(triplet.clone()))
        .collect()
}
