//! Triplet module - the fundamental unit of the relation graph

use std::fmt;

/// A `(subject, object, relation)` fact extracted from text
///
/// The field order is the canonical tuple shape used everywhere a triplet
/// is stored or transmitted: subject first, object second, relation last.
/// Two triplets are equal iff all three fields are equal (case-sensitive).
///
/// # Examples
///
/// ```
/// use relgraph_domain::Triplet;
///
/// let triplet = Triplet::new("Acme Corp", "Jane Doe", "founded_by");
/// assert_eq!(triplet.subject, "Acme Corp");
/// assert_eq!(triplet.object, "Jane Doe");
/// assert_eq!(triplet.relation, "founded_by");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triplet {
    /// Head entity
    pub subject: String,

    /// Tail entity
    pub object: String,

    /// Relation label connecting subject to object
    pub relation: String,
}

/// Which endpoint of a triplet an entity keyword was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityMatch {
    /// Keyword is a substring of the lower-cased subject
    Subject,

    /// Keyword is a substring of the lower-cased object (and not the subject)
    Object,

    /// Keyword matches neither endpoint
    Neither,
}

impl EntityMatch {
    /// Whether the keyword was found on either endpoint
    pub fn is_match(&self) -> bool {
        !matches!(self, EntityMatch::Neither)
    }
}

impl Triplet {
    /// Create a new triplet in canonical `(subject, object, relation)` order
    pub fn new(
        subject: impl Into<String>,
        object: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
            relation: relation.into(),
        }
    }

    /// Test a lower-cased keyword against both endpoints, subject first
    ///
    /// The keyword is expected to be lower-cased by the caller; the endpoints
    /// are lower-cased here. The relation is never matched against. An empty
    /// keyword matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use relgraph_domain::{EntityMatch, Triplet};
    ///
    /// let triplet = Triplet::new("ACME Corp", "Berlin", "headquartered_in");
    /// assert_eq!(triplet.match_keyword("acme"), EntityMatch::Subject);
    /// assert_eq!(triplet.match_keyword("berlin"), EntityMatch::Object);
    /// assert_eq!(triplet.match_keyword("headquartered"), EntityMatch::Neither);
    /// ```
    pub fn match_keyword(&self, keyword: &str) -> EntityMatch {
        if keyword.is_empty() {
            return EntityMatch::Neither;
        }
        if self.subject.to_lowercase().contains(keyword) {
            EntityMatch::Subject
        } else if self.object.to_lowercase().contains(keyword) {
            EntityMatch::Object
        } else {
            EntityMatch::Neither
        }
    }

    /// The endpoint that is *not* the keyword's entity
    ///
    /// A subject match yields the object; an object match yields the subject.
    /// A triplet matching neither side is treated as a subject match.
    pub fn counter_entity(&self, keyword: &str) -> &str {
        match self.match_keyword(keyword) {
            EntityMatch::Object => &self.subject,
            EntityMatch::Subject | EntityMatch::Neither => &self.object,
        }
    }

    /// Borrow the fields as a `(subject, object, relation)` tuple
    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.subject, &self.object, &self.relation)
    }

    /// Consume the triplet into a `(subject, object, relation)` tuple
    pub fn into_tuple(self) -> (String, String, String) {
        (self.subject, self.object, self.relation)
    }
}

impl From<(String, String, String)> for Triplet {
    fn from((subject, object, relation): (String, String, String)) -> Self {
        Self {
            subject,
            object,
            relation,
        }
    }
}

impl From<(&str, &str, &str)> for Triplet {
    fn from((subject, object, relation): (&str, &str, &str)) -> Self {
        Self::new(subject, object, relation)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --[{}]--> {}", self.subject, self.relation, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_case_sensitive() {
        let a = Triplet::new("Acme", "Berlin", "located_in");
        let b = Triplet::new("acme", "Berlin", "located_in");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_match_is_case_insensitive_on_fields() {
        let triplet = Triplet::new("ACME Corp", "Jane Doe", "founder");
        assert_eq!(triplet.match_keyword("acme"), EntityMatch::Subject);
        assert_eq!(triplet.match_keyword("jane"), EntityMatch::Object);
    }

    #[test]
    fn test_subject_wins_when_both_match() {
        let triplet = Triplet::new("Acme Corp", "Acme Labs", "owns");
        assert_eq!(triplet.match_keyword("acme"), EntityMatch::Subject);
        assert_eq!(triplet.counter_entity("acme"), "Acme Labs");
    }

    #[test]
    fn test_relation_is_never_matched() {
        let triplet = Triplet::new("Acme", "Berlin", "founded_by");
        assert_eq!(triplet.match_keyword("founded"), EntityMatch::Neither);
        assert!(!triplet.match_keyword("founded").is_match());
    }

    #[test]
    fn test_empty_keyword_matches_nothing() {
        let triplet = Triplet::new("Acme", "Berlin", "located_in");
        assert_eq!(triplet.match_keyword(""), EntityMatch::Neither);
    }

    #[test]
    fn test_counter_entity() {
        let triplet = Triplet::new("Acme Corp", "Jane Doe", "founder");
        assert_eq!(triplet.counter_entity("acme"), "Jane Doe");
        assert_eq!(triplet.counter_entity("jane"), "Acme Corp");
        // Neither side matches: falls back to subject-match
        assert_eq!(triplet.counter_entity("globex"), "Jane Doe");
    }

    #[test]
    fn test_tuple_conversions() {
        let triplet: Triplet = ("Acme", "Berlin", "located_in").into();
        assert_eq!(triplet.as_tuple(), ("Acme", "Berlin", "located_in"));

        let owned = triplet.clone().into_tuple();
        assert_eq!(Triplet::from(owned), triplet);
    }

    #[test]
    fn test_display() {
        let triplet = Triplet::new("Acme", "Berlin", "located_in");
        assert_eq!(triplet.to_string(), "Acme --[located_in]--> Berlin");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a match always agrees with the counter-entity choice
        #[test]
        fn test_counter_entity_is_an_endpoint(
            subject in "[A-Za-z ]{0,12}",
            object in "[A-Za-z ]{0,12}",
            keyword in "[a-z]{0,3}",
        ) {
            let triplet = Triplet::new(subject, object, "rel");
            let counter = triplet.counter_entity(&keyword);
            prop_assert!(counter == triplet.subject || counter == triplet.object);

            if triplet.match_keyword(&keyword) == EntityMatch::Object {
                prop_assert_eq!(counter, triplet.subject.as_str());
            }
        }

        /// Property: matching never depends on the keyword's source casing
        /// once the caller has lower-cased it
        #[test]
        fn test_match_ignores_field_case(word in "[a-z]{1,8}") {
            let triplet = Triplet::new(word.to_uppercase(), "x", "rel");
            prop_assert_eq!(triplet.match_keyword(&word), EntityMatch::Subject);
        }
    }
}
