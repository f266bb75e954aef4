//! Input cleaning for labeled corpora
//!
//! Benchmark files carry one sentence per line followed by `|`-separated
//! gold labels. Only the sentence is kept.

/// Strip `|`-separated labels from every line
///
/// Keeps the text before the first `|` on each line, trimmed, and drops lines
/// that end up empty. The output has one sentence per line with a trailing
/// newline, or is empty.
///
/// # Examples
///
/// ```
/// use relgraph_extractor::clean_labeled_text;
///
/// let cleaned = clean_labeled_text("Acme hired Jane. | employer | Acme\n\n|only labels\n");
/// assert_eq!(cleaned, "Acme hired Jane.\n");
/// ```
pub fn clean_labeled_text(input: &str) -> String {
    let mut output = String::new();

    for line in input.lines() {
        let sentence = line.split('|').next().unwrap_or_default().trim();
        if sentence.is_empty() {
            continue;
        }
        output.push_str(sentence);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_removed() {
        let input = "Jane founded Acme.|founded_by|Acme|Jane\nBob lives in Berlin. | residence\n";
        assert_eq!(
            clean_labeled_text(input),
            "Jane founded Acme.\nBob lives in Berlin.\n"
        );
    }

    #[test]
    fn test_lines_without_labels_kept() {
        assert_eq!(clean_labeled_text("  plain line  "), "plain line\n");
    }

    #[test]
    fn test_empty_lines_dropped() {
        assert_eq!(clean_labeled_text("\n   \n| label only\n"), "");
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(clean_labeled_text("one|x\r\ntwo\r\n"), "one\ntwo\n");
    }
}
