//! Relgraph Storage Layer
//!
//! An in-memory, ordered, read-only collection of triplets backed by a JSON
//! snapshot file.
//!
//! # Architecture
//!
//! - The snapshot is a JSON array of `[subject, object, relation]` arrays
//! - A store is loaded wholesale; there is no incremental update
//! - Lookups are linear scans, which is adequate for a few thousand triplets
//!
//! # Lifecycle
//!
//! A `RelationStore` is built completely before it is returned, so a failed
//! load never exposes a partially filled store. Share it read-only with
//! `Arc<RelationStore>`; replace it by loading a new one.
//!
//! # Examples
//!
//! ```no_run
//! use relgraph_store::RelationStore;
//!
//! let store = RelationStore::load_or_empty("relations.json").unwrap();
//! println!("{} triplets", store.len());
//! ```

#![warn(missing_docs)]

mod snapshot;

use relgraph_domain::Triplet;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Snapshot file could not be read or written
    #[error("Snapshot I/O error at {path}: {source}")]
    Io {
        /// Snapshot path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot contents are not a list of 3-element string arrays
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

/// Read-only, ordered collection of triplets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationStore {
    triplets: Vec<Triplet>,
}

impl RelationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from triplets, preserving their order
    pub fn from_triplets(triplets: impl IntoIterator<Item = Triplet>) -> Self {
        Self {
            triplets: triplets.into_iter().collect(),
        }
    }

    /// Load a store from a snapshot file
    ///
    /// A missing file is an error here; see [`RelationStore::load_or_empty`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let store = Self::from_json(&contents)?;
        info!(
            "Knowledge base loaded with {} relationships from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load a store from a snapshot file, or start empty when it is absent
    ///
    /// Only a missing file degrades to an empty store; unreadable or
    /// malformed snapshots are still reported.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        match Self::load(path.as_ref()) {
            Err(StoreError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                warn!(
                    "Snapshot {} not found; starting with an empty store. Run `relgraph extract` first.",
                    path.as_ref().display()
                );
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Parse a store from snapshot JSON
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(Self::from_triplets(snapshot::decode(json)?))
    }

    /// Render the store as pretty-printed snapshot JSON
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(snapshot::encode(&self.triplets)?)
    }

    /// Write the store to a snapshot file
    ///
    /// The snapshot is written to a sibling temporary file and renamed into
    /// place, so a reader never observes a half-written file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        let json = self.to_json()?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);

        let io_error = |source| StoreError::Io {
            path: path.display().to_string(),
            source,
        };
        std::fs::write(tmp_path, json).map_err(io_error)?;
        std::fs::rename(tmp_path, path).map_err(io_error)?;

        info!("Saved {} relationships to {}", self.len(), path.display());
        Ok(())
    }

    /// Number of stored triplets (duplicates included)
    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    /// Whether the store holds no triplets
    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    /// Iterate over triplets in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, Triplet> {
        self.triplets.iter()
    }

    /// All triplets in stored order
    pub fn triplets(&self) -> &[Triplet] {
        &self.triplets
    }

    /// Summary counts for reporting
    pub fn stats(&self) -> StoreStats {
        let mut entities = HashSet::new();
        let mut relations = HashSet::new();
        let mut unique = HashSet::new();

        for triplet in &self.triplets {
            entities.insert(triplet.subject.as_str());
            entities.insert(triplet.object.as_str());
            relations.insert(triplet.relation.as_str());
            unique.insert(triplet);
        }

        StoreStats {
            triplet_count: self.triplets.len(),
            unique_triplet_count: unique.len(),
            entity_count: entities.len(),
            relation_count: relations.len(),
        }
    }
}

impl<'a> IntoIterator for &'a RelationStore {
    type Item = &'a Triplet;
    type IntoIter = std::slice::Iter<'a, Triplet>;

    fn into_iter(self) -> Self::IntoIter {
        self.triplets.iter()
    }
}

impl FromIterator<Triplet> for RelationStore {
    fn from_iter<I: IntoIterator<Item = Triplet>>(iter: I) -> Self {
        Self::from_triplets(iter)
    }
}

/// Summary counts over a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Stored triplets, duplicates included
    pub triplet_count: usize,

    /// Distinct triplets
    pub unique_triplet_count: usize,

    /// Distinct subjects and objects
    pub entity_count: usize,

    /// Distinct relation labels
    pub relation_count: usize,
}
