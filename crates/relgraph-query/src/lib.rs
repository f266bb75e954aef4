//! Relgraph Query
//!
//! Answers natural-language questions against a relation store.
//!
//! # Architecture
//!
//! ```text
//! question → entity prompt → LLM → keyword
//!          → retrieve → group by relation → context block
//!          → summary prompt → LLM → QueryResponse
//! ```
//!
//! Retrieval, grouping and context building are pure functions over borrowed
//! data. Only [`QueryEngine`] talks to a model.
//!
//! # Example Usage
//!
//! ```no_run
//! use relgraph_query::{QueryConfig, QueryEngine};
//! use relgraph_store::RelationStore;
//! use relgraph_llm::MockProvider;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(RelationStore::load("triplets.json")?);
//! let engine = QueryEngine::new(store, MockProvider::new("acme"), QueryConfig::default())?;
//!
//! let response = engine.answer("Who founded Acme?").await?;
//! println!("{}", response.summary);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod error;
mod grouping;
pub mod prompt;
mod retrieval;

pub use config::QueryConfig;
pub use context::build_context;
pub use engine::{QueryEngine, QueryResponse};
pub use error::QueryError;
pub use grouping::{group, GroupedFacts};
pub use retrieval::retrieve;
