//! Entity retrieval over the relation store

use relgraph_domain::Triplet;
use relgraph_store::RelationStore;
use std::collections::HashSet;

/// Retrieve every distinct triplet mentioning the keyword
///
/// `keyword` must already be lower-cased. A triplet matches when the keyword
/// is a substring of its lower-cased subject or object; the relation is never
/// matched. Each matching triplet appears once, in first-seen store order.
/// An empty keyword retrieves nothing.
pub fn retrieve(store: &RelationStore, keyword: &str) -> Vec<Triplet> {
    if keyword.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    store
        .iter()
        .filter(|triplet| triplet.match_keyword(keyword).is_match())
        .filter(|triplet| seen.insert(*triplet))
        .cloned()
        .collect()
}
