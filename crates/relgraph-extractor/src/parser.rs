//! Parse raw relation-extraction model output into triplets
//!
//! The model embeds facts with in-band markers:
//!
//! ```text
//! <triplet> subject <subj> relation <obj> object <triplet> ...
//! ```
//!
//! Parsing is a small state machine driven by marker tokens. It is total:
//! any input produces a (possibly empty) list of triplets, and malformed
//! marker sequences are skipped rather than reported.

use relgraph_domain::Triplet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// In-band markers used by the extraction model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Starts a triplet; the subject follows
    pub start: String,

    /// Separates subject from relation
    pub subject_separator: String,

    /// Separates relation from object
    pub relation_separator: String,

    /// End-of-sequence token
    pub end: String,

    /// Tokens removed from field text wherever they appear
    #[serde(default)]
    pub noise: Vec<String>,
}

impl Default for Markers {
    /// Vocabulary of the REBEL relation-extraction model
    fn default() -> Self {
        Self {
            start: "<triplet>".to_string(),
            subject_separator: "<subj>".to_string(),
            relation_separator: "<obj>".to_string(),
            end: "</s>".to_string(),
            noise: vec!["<s>".to_string(), "<pad>".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    SubjectSeparator,
    RelationSeparator,
    End,
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Marker(Marker),
}

const NOT_FOUND: usize = usize::MAX;

/// Splits text into marker and text tokens in a single forward pass
///
/// The next occurrence of each marker is cached and only searched again once
/// the cursor has moved past it, so total work is linear in the input for a
/// fixed marker set.
struct Lexer<'a> {
    text: &'a str,
    pos: usize,
    patterns: [(Marker, &'a str); 4],
    next: [usize; 4],
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str, markers: &'a Markers) -> Self {
        let patterns = [
            (Marker::Start, markers.start.as_str()),
            (Marker::SubjectSeparator, markers.subject_separator.as_str()),
            (Marker::RelationSeparator, markers.relation_separator.as_str()),
            (Marker::End, markers.end.as_str()),
        ];
        let mut next = [NOT_FOUND; 4];
        for (slot, (_, pattern)) in next.iter_mut().zip(patterns.iter()) {
            if !pattern.is_empty() {
                *slot = text.find(pattern).unwrap_or(NOT_FOUND);
            }
        }
        Self {
            text,
            pos: 0,
            patterns,
            next,
        }
    }

    /// Earliest marker at or after the cursor; longer markers win ties
    fn earliest_marker(&mut self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;

        for idx in 0..self.patterns.len() {
            let pattern = self.patterns[idx].1;
            if pattern.is_empty() || self.next[idx] == NOT_FOUND {
                continue;
            }
            if self.next[idx] < self.pos {
                self.next[idx] = self.text[self.pos..]
                    .find(pattern)
                    .map_or(NOT_FOUND, |offset| offset + self.pos);
                if self.next[idx] == NOT_FOUND {
                    continue;
                }
            }

            let at = self.next[idx];
            let better = match best {
                None => true,
                Some((best_at, best_idx)) => {
                    at < best_at
                        || (at == best_at && pattern.len() > self.patterns[best_idx].1.len())
                }
            };
            if better {
                best = Some((at, idx));
            }
        }

        best
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        match self.earliest_marker() {
            None => {
                let rest = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Token::Text(rest))
            }
            Some((at, _)) if at > self.pos => {
                let text = &self.text[self.pos..at];
                self.pos = at;
                Some(Token::Text(text))
            }
            Some((at, idx)) => {
                let (marker, pattern) = self.patterns[idx];
                self.pos = at + pattern.len();
                Some(Token::Marker(marker))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekingStart,
    InSubject,
    /// `truncated` is set once a separator showed up inside the relation
    InRelation { truncated: bool },
    InObject,
}

/// Accumulates the fields of the triplet currently being read
#[derive(Debug, Default)]
struct Fields {
    subject: String,
    relation: String,
    object: String,
}

/// Converts raw model output into triplets
#[derive(Debug, Clone, Default)]
pub struct TripletParser {
    markers: Markers,
}

impl TripletParser {
    /// Create a parser for the default REBEL markers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser for a custom marker vocabulary
    pub fn with_markers(markers: Markers) -> Self {
        Self { markers }
    }

    /// Parse raw model output into `(subject, object, relation)` triplets
    ///
    /// Never fails: malformed fragments are dropped.
    pub fn parse(&self, raw: &str) -> Vec<Triplet> {
        let mut triplets = Vec::new();
        let mut state = State::SeekingStart;
        let mut fields = Fields::default();

        for token in Lexer::new(raw, &self.markers) {
            state = match (state, token) {
                (State::SeekingStart, Token::Text(_)) => State::SeekingStart,
                (State::InSubject, Token::Text(text)) => {
                    fields.subject.push_str(text);
                    State::InSubject
                }
                (State::InRelation { truncated: false }, Token::Text(text)) => {
                    fields.relation.push_str(text);
                    State::InRelation { truncated: false }
                }
                (State::InRelation { truncated: true }, Token::Text(_)) => {
                    State::InRelation { truncated: true }
                }
                (State::InObject, Token::Text(text)) => {
                    fields.object.push_str(text);
                    State::InObject
                }

                (current, Token::Marker(Marker::Start)) => {
                    if current == State::InObject {
                        self.emit(&fields, &mut triplets);
                    } else if current != State::SeekingStart {
                        debug!("Abandoning unfinished triplet at new start marker");
                    }
                    fields = Fields::default();
                    State::InSubject
                }

                (State::SeekingStart, Token::Marker(_)) => State::SeekingStart,

                (State::InSubject, Token::Marker(Marker::SubjectSeparator)) => {
                    State::InRelation { truncated: false }
                }
                (State::InSubject, Token::Marker(Marker::RelationSeparator)) => {
                    debug!("Dropping triplet with relation separator before subject separator");
                    State::SeekingStart
                }

                (State::InRelation { .. }, Token::Marker(Marker::SubjectSeparator)) => {
                    State::InRelation { truncated: true }
                }
                (State::InRelation { .. }, Token::Marker(Marker::RelationSeparator)) => {
                    State::InObject
                }

                (State::InObject, Token::Marker(Marker::SubjectSeparator)) => {
                    // Another relation/object pair for the same subject
                    self.emit(&fields, &mut triplets);
                    fields.relation.clear();
                    fields.object.clear();
                    State::InRelation { truncated: false }
                }
                (State::InObject, Token::Marker(Marker::RelationSeparator))
                | (State::InObject, Token::Marker(Marker::End)) => {
                    self.emit(&fields, &mut triplets);
                    State::SeekingStart
                }

                // End-of-sequence inside subject or relation is stripped; `clean`
                // collapses the whitespace it leaves behind
                (current @ State::InSubject, Token::Marker(Marker::End))
                | (current @ State::InRelation { .. }, Token::Marker(Marker::End)) => current,
            };
        }

        if state == State::InObject {
            self.emit(&fields, &mut triplets);
        }

        triplets
    }

    fn emit(&self, fields: &Fields, triplets: &mut Vec<Triplet>) {
        let relation = self.clean(&fields.relation);
        if relation.is_empty() {
            debug!("Dropping triplet with empty relation");
            return;
        }

        triplets.push(Triplet::new(
            self.clean(&fields.subject),
            self.clean(&fields.object),
            relation,
        ));
    }

    fn clean(&self, field: &str) -> String {
        let mut cleaned = field.to_string();
        for token in self.markers.noise.iter().filter(|t| !t.is_empty()) {
            if cleaned.contains(token.as_str()) {
                cleaned = cleaned.replace(token.as_str(), "");
            }
        }
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Parse raw model output using the default REBEL markers
pub fn parse_triplets(raw: &str) -> Vec<Triplet> {
    TripletParser::default().parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triplet(subject: &str, object: &str, relation: &str) -> Triplet {
        Triplet::new(subject, object, relation)
    }

    #[test]
    fn test_parse_single_triplet() {
        let raw = "<triplet> Acme Corp <subj> founded_by <obj> Jane Doe</s> more text";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Acme Corp", "Jane Doe", "founded_by")]);
    }

    #[test]
    fn test_parse_multiple_triplets() {
        let raw = "<s><triplet> Acme Corp <subj> founder <obj> Jane Doe \
                   <triplet> Acme Corp <subj> headquartered_in <obj> Berlin</s>";
        let triplets = parse_triplets(raw);
        assert_eq!(
            triplets,
            vec![
                triplet("Acme Corp", "Jane Doe", "founder"),
                triplet("Acme Corp", "Berlin", "headquartered_in"),
            ]
        );
    }

    #[test]
    fn test_field_order_is_subject_object_relation() {
        let triplets = parse_triplets("<triplet> A <subj> r <obj> B");
        let (subject, object, relation) = triplets[0].as_tuple();
        assert_eq!((subject, object, relation), ("A", "B", "r"));
    }

    #[test]
    fn test_relation_truncated_at_embedded_separator() {
        let raw = "<triplet> Bob <subj> ceo of<subj> <obj> Acme";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Bob", "Acme", "ceo of")]);
    }

    #[test]
    fn test_relation_truncated_keeps_prefix_before_trailing_text() {
        let raw = "<triplet> Bob <subj> ceo of <subj> leftover words <obj> Acme";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Bob", "Acme", "ceo of")]);
    }

    #[test]
    fn test_end_token_stripped_from_relation() {
        let raw = "<triplet> Bob <subj> employer</s> <obj> Acme";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Bob", "Acme", "employer")]);
    }

    #[test]
    fn test_empty_relation_dropped() {
        assert!(parse_triplets("<triplet> Bob <subj> <obj> Acme").is_empty());
        assert!(parse_triplets("<triplet> Bob <subj>    \t <obj> Acme").is_empty());
        assert!(parse_triplets("<triplet> Bob <subj></s> <obj> Acme").is_empty());
    }

    #[test]
    fn test_no_markers_yields_nothing() {
        assert!(parse_triplets("").is_empty());
        assert!(parse_triplets("plain text without any tags").is_empty());
    }

    #[test]
    fn test_unfinished_triplet_dropped() {
        assert!(parse_triplets("<triplet> Bob <subj> works_at").is_empty());
        assert!(parse_triplets("<triplet> Bob").is_empty());
    }

    #[test]
    fn test_unfinished_triplet_abandoned_at_new_start() {
        let raw = "<triplet> Bob <subj> works_at <triplet> Ann <subj> lives_in <obj> Oslo";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Ann", "Oslo", "lives_in")]);
    }

    #[test]
    fn test_separators_out_of_order_dropped() {
        let raw = "<triplet> Bob <obj> Acme <subj> works_at <triplet> Ann <subj> knows <obj> Bob";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Ann", "Bob", "knows")]);
    }

    #[test]
    fn test_shared_subject_continuation() {
        let raw = "<triplet> Acme <subj> founder <obj> Jane Doe <subj> located_in <obj> Berlin";
        let triplets = parse_triplets(raw);
        assert_eq!(
            triplets,
            vec![
                triplet("Acme", "Jane Doe", "founder"),
                triplet("Acme", "Berlin", "located_in"),
            ]
        );
    }

    #[test]
    fn test_stray_relation_separator_in_object() {
        let raw = "<triplet> Acme <subj> founder <obj> Jane <obj> junk <triplet> X <subj> r <obj> Y";
        let triplets = parse_triplets(raw);
        assert_eq!(
            triplets,
            vec![triplet("Acme", "Jane", "founder"), triplet("X", "Y", "r")]
        );
    }

    #[test]
    fn test_text_after_end_is_ignored() {
        let raw = "<triplet> A <subj> r <obj> B</s> <subj> q <obj> C<pad><pad>";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("A", "B", "r")]);
    }

    #[test]
    fn test_noise_tokens_removed_from_fields() {
        let raw = "<s><triplet> Acme<pad> <subj> founder <obj> Jane<pad><pad>";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Acme", "Jane", "founder")]);
    }

    #[test]
    fn test_stripped_end_marker_leaves_single_space() {
        let triplets = parse_triplets("<triplet> A </s> x <subj> r </s> s <obj> B");
        assert_eq!(triplets, vec![triplet("A x", "B", "r s")]);
    }

    #[test]
    fn test_empty_subject_and_object_are_kept() {
        let triplets = parse_triplets("<triplet><subj> founder <obj>");
        assert_eq!(triplets, vec![triplet("", "", "founder")]);
    }

    #[test]
    fn test_custom_markers() {
        let parser = TripletParser::with_markers(Markers {
            start: "[T]".to_string(),
            subject_separator: "[S]".to_string(),
            relation_separator: "[O]".to_string(),
            end: "[E]".to_string(),
            noise: Vec::new(),
        });
        let triplets = parser.parse("[T] Acme [S] founder [O] Jane [E] tail");
        assert_eq!(triplets, vec![triplet("Acme", "Jane", "founder")]);
    }

    #[test]
    fn test_empty_markers_do_not_loop() {
        let parser = TripletParser::with_markers(Markers {
            start: "<triplet>".to_string(),
            subject_separator: "<subj>".to_string(),
            relation_separator: "<obj>".to_string(),
            end: String::new(),
            noise: vec![String::new()],
        });
        let triplets = parser.parse("<triplet> A <subj> r <obj> B");
        assert_eq!(triplets, vec![triplet("A", "B", "r")]);
    }

    #[test]
    fn test_multibyte_text() {
        let raw = "<triplet> Müller GmbH <subj> gegründet_von <obj> Zoë Ørsted";
        let triplets = parse_triplets(raw);
        assert_eq!(triplets, vec![triplet("Müller GmbH", "Zoë Ørsted", "gegründet_von")]);
    }

    #[test]
    fn test_lexer_tokens() {
        let markers = Markers::default();
        let tokens: Vec<_> = Lexer::new("a<triplet>b<subj><obj>", &markers).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("a"),
                Token::Marker(Marker::Start),
                Token::Text("b"),
                Token::Marker(Marker::SubjectSeparator),
                Token::Marker(Marker::RelationSeparator),
            ]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("<triplet>".to_string()),
            Just("<subj>".to_string()),
            Just("<obj>".to_string()),
            Just("</s>".to_string()),
            Just("<pad>".to_string()),
            Just("<".to_string()),
            "[a-zA-Z /é]{0,6}",
        ]
    }

    proptest! {
        /// Property: parsing is total over arbitrary text
        #[test]
        fn test_parse_never_panics(raw in ".*") {
            let _ = parse_triplets(&raw);
        }

        /// Property: adversarial marker soups parse and every emitted
        /// relation is clean and non-empty
        #[test]
        fn test_marker_soup_yields_clean_relations(
            parts in prop::collection::vec(fragment(), 0..40)
        ) {
            let raw = parts.concat();
            for triplet in parse_triplets(&raw) {
                prop_assert!(!triplet.relation.is_empty());
                prop_assert_eq!(triplet.relation.trim(), triplet.relation.as_str());
                prop_assert!(!triplet.relation.contains("<subj>"));
                prop_assert!(!triplet.relation.contains("<obj>"));
                prop_assert!(!triplet.relation.contains("</s>"));
            }
        }

        /// Property: a well-formed encoding round-trips through the parser
        #[test]
        fn test_well_formed_triplet_parses(
            subject in "[A-Za-z]{1,5}( [A-Za-z]{1,5}){0,2}",
            relation in "[a-z][a-z_]{0,10}",
            object in "[A-Za-z]{1,5}( [A-Za-z]{1,5}){0,2}",
        ) {
            let raw = format!("<triplet> {} <subj> {} <obj> {}</s>", subject, relation, object);
            let triplets = parse_triplets(&raw);
            prop_assert_eq!(triplets, vec![Triplet::new(subject, object, relation)]);
        }
    }
}
