//! Group retrieved triplets by relation label

use relgraph_domain::Triplet;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Counter-entities keyed by relation label
///
/// Labels iterate in lexicographic order and each label's entities are
/// deduplicated and sorted, so the result never depends on the order the
/// triplets were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedFacts {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl GroupedFacts {
    /// Whether no relation was grouped
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct relation labels
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Counter-entities recorded for a label
    pub fn get(&self, relation: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(relation)
    }

    /// Iterate `(label, entities)` in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups
            .iter()
            .map(|(label, entities)| (label.as_str(), entities))
    }

    fn insert(&mut self, relation: &str, entity: &str) {
        self.groups
            .entry(relation.to_string())
            .or_default()
            .insert(entity.to_string());
    }
}

/// Group triplets by relation, collecting the endpoint that is not the keyword's entity
///
/// `keyword` must already be lower-cased. When the keyword is found in the
/// subject the object is collected; otherwise the subject is. A triplet
/// matching neither side is treated as a subject match.
pub fn group<'a, I>(triplets: I, keyword: &str) -> GroupedFacts
where
    I: IntoIterator<Item = &'a Triplet>,
{
    let mut facts = GroupedFacts::default();
    for triplet in triplets {
        facts.insert(&triplet.relation, triplet.counter_entity(keyword));
    }
    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_group_by_relation() {
        let triplets = vec![
            Triplet::new("Acme Corp", "Jane Doe", "founder"),
            Triplet::new("Acme Corp", "Berlin", "headquartered_in"),
        ];
        let grouped = group(&triplets, "acme");

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get("founder"), Some(&set(&["Jane Doe"])));
        assert_eq!(grouped.get("headquartered_in"), Some(&set(&["Berlin"])));
    }

    #[test]
    fn test_counter_entity_for_object_match() {
        let triplets = vec![
            Triplet::new("Acme Corp", "Jane Doe", "founder"),
            Triplet::new("Globex", "Jane Doe", "founder"),
        ];
        let grouped = group(&triplets, "jane");
        assert_eq!(grouped.get("founder"), Some(&set(&["Acme Corp", "Globex"])));
    }

    #[test]
    fn test_entities_deduplicated_and_sorted() {
        let triplets = vec![
            Triplet::new("Acme", "Zed", "partner"),
            Triplet::new("Acme", "Alpha", "partner"),
            Triplet::new("Zed", "Acme", "partner"),
        ];
        let grouped = group(&triplets, "acme");
        let entities: Vec<_> = grouped.get("partner").unwrap().iter().cloned().collect();
        assert_eq!(entities, vec!["Alpha", "Zed"]);
    }

    #[test]
    fn test_neither_side_falls_back_to_object() {
        let triplets = vec![Triplet::new("Acme", "Berlin", "located_in")];
        let grouped = group(&triplets, "globex");
        assert_eq!(grouped.get("located_in"), Some(&set(&["Berlin"])));
    }

    #[test]
    fn test_input_order_irrelevant() {
        let forward = vec![
            Triplet::new("Acme", "Berlin", "located_in"),
            Triplet::new("Acme", "Jane", "founder"),
        ];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();
        assert_eq!(group(&forward, "acme"), group(&reversed, "acme"));

        let labels: Vec<_> = group(&reversed, "acme").iter().map(|(l, _)| l.to_string()).collect();
        assert_eq!(labels, vec!["founder", "located_in"]);
    }

    #[test]
    fn test_empty_input() {
        let grouped = group(&Vec::<Triplet>::new(), "acme");
        assert!(grouped.is_empty());
    }
}
