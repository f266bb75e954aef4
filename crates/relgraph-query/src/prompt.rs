//! Prompts for entity extraction and summarization

/// Build the prompt that asks the model for the question's target entity
pub fn entity_prompt(question: &str) -> String {
    format!(
        "Extract the primary company or person's name from this question: \"{}\" Name:",
        question
    )
}

/// Message returned instead of a summary when nothing was retrieved
pub fn no_data_message(entity: &str) -> String {
    format!(
        "I couldn't find any specific relationships for '{}' in the document.",
        entity
    )
}

/// Builds the summarization prompt from a rendered context block
pub struct SummaryPromptBuilder<'a> {
    entity: &'a str,
    context: &'a str,
}

impl<'a> SummaryPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(entity: &'a str, context: &'a str) -> Self {
        Self { entity, context }
    }

    /// Build the complete summarization prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Write a brief, professional summary based on the following points about {}.\n\n",
            title_case(self.entity)
        ));

        prompt.push_str("Key Points:\n");
        prompt.push_str(self.context);
        prompt.push_str("\n\n");

        prompt.push_str("Summary Paragraph:\n");
        prompt
    }
}

/// Upper-case the first letter of every word and lower-case the rest
///
/// A word starts after any non-alphabetic character.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_prompt_quotes_question() {
        let prompt = entity_prompt("Who founded Acme Corp?");
        assert_eq!(
            prompt,
            "Extract the primary company or person's name from this question: \"Who founded Acme Corp?\" Name:"
        );
    }

    #[test]
    fn test_no_data_message() {
        assert_eq!(
            no_data_message("globex"),
            "I couldn't find any specific relationships for 'globex' in the document."
        );
    }

    #[test]
    fn test_summary_prompt_includes_context() {
        let context = "- As a founder: Jane Doe\n- As a headquartered_in: Berlin";
        let prompt = SummaryPromptBuilder::new("acme corp", context).build();

        assert!(prompt.contains("about Acme Corp."));
        assert!(prompt.contains("Key Points:\n- As a founder: Jane Doe"));
        assert!(prompt.ends_with("Summary Paragraph:\n"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("acme corp"), "Acme Corp");
        assert_eq!(title_case("JANE o'neil"), "Jane O'Neil");
        assert_eq!(title_case("acme-2go inc"), "Acme-2Go Inc");
        assert_eq!(title_case(""), "");
    }
}
