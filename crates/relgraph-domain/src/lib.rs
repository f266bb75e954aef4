//! Relgraph Domain Layer
//!
//! This crate contains the core domain model for Relgraph. It has ZERO
//! external dependencies and defines the fundamental value types and the
//! trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Triplet**: The fundamental unit - a `(subject, object, relation)` fact
//! - **Entity keyword**: A lower-cased search term matched against triplet endpoints
//! - **Counter-entity**: The endpoint of a triplet that is not the keyword's entity
//! - **LlmProvider**: The black-box `text -> text` generative model boundary
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain logic only
//! - Infrastructure implementations (models, snapshot files, HTTP) live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod traits;
pub mod triplet;

// Re-exports for convenience
pub use traits::LlmProvider;
pub use triplet::{EntityMatch, Triplet};
