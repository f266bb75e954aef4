//! Sentence splitting for per-sentence extraction

/// Result of splitting a document into sentences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitText {
    /// Sentences long enough to send to the model, in document order
    pub sentences: Vec<String>,

    /// Number of `.`-separated fragments in the document
    pub total: usize,

    /// Fragments dropped for being shorter than the minimum length
    pub skipped: usize,
}

/// Splits text on `.` into normalized sentences
pub struct SentenceSplitter {
    min_length: usize,
}

impl SentenceSplitter {
    /// Create a new splitter; sentences shorter than `min_length` characters are dropped
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Split the given text
    ///
    /// Each fragment is trimmed and its newlines replaced by spaces before
    /// the length check.
    pub fn split(&self, text: &str) -> SplitText {
        let mut result = SplitText::default();

        for fragment in text.split('.') {
            result.total += 1;

            let sentence = fragment.trim().replace('\n', " ");
            if sentence.chars().count() < self.min_length {
                result.skipped += 1;
                continue;
            }
            result.sentences.push(sentence);
        }

        result
    }
}
