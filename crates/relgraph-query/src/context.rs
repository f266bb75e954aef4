//! Render grouped facts as a summarization context block

use crate::grouping::GroupedFacts;

/// Render one `- As a <label>: <entities>` line per relation
///
/// Lines follow the grouping's label order and entities are joined with
/// `", "`. An empty grouping renders as an empty string; callers should not
/// summarize a query that retrieved nothing.
pub fn build_context(grouped: &GroupedFacts) -> String {
    grouped
        .iter()
        .map(|(label, entities)| {
            let joined = entities
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("- As a {}: {}", label, joined)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
