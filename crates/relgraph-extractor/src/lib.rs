//! Relgraph Extractor
//!
//! Converts unstructured text to relation triplets using a generative
//! relation-extraction model.
//!
//! # Overview
//!
//! The Extractor is the offline pathway that builds the relation store. Each
//! sentence is sent to the model, whose raw tagged output is parsed into
//! `(subject, object, relation)` triplets.
//!
//! # Architecture
//!
//! ```text
//! Text → clean → sentences → LLM → TripletParser → dedupe → snapshot
//! ```
//!
//! # Key Features
//!
//! - **Tagged-output parsing**: An error-tolerant state machine over in-band markers
//! - **Per-sentence isolation**: A failing sentence is recorded and skipped
//! - **Deduplication**: Exact duplicates collapse, first occurrence wins
//! - **Input cleaning**: Strip `|`-separated gold labels from benchmark files
//!
//! # Example Usage
//!
//! ```no_run
//! use relgraph_extractor::{Extractor, ExtractorConfig};
//! use relgraph_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("<triplet> Acme Corp <subj> founded_by <obj> Jane Doe</s>");
//! let extractor = Extractor::new(llm, ExtractorConfig::default())?;
//!
//! let result = extractor.extract("Acme Corp was founded by Jane Doe.").await?;
//!
//! println!("Extracted: {} triplets", result.triplets.len());
//! println!("Failures: {} sentences", result.failures.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod clean;
mod config;
mod error;
mod extractor;
pub mod parser;
mod sentences;
mod types;


pub use clean::clean_labeled_text;
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::{parse_triplets, Markers, TripletParser};
pub use sentences::{SentenceSplitter, SplitText};
pub use types::{ExtractionFailure, ExtractionMetadata, ExtractionResult};
