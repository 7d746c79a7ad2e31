use crate::models::QuizRequest;

/// Instruction sent to the model for `request`.
///
/// The layout it asks for is the one [`crate::data::parse_quiz`] reads.
pub fn build_prompt(request: &QuizRequest) -> String {
    format!(
        "\nGenerate a {}-question multiple choice quiz about \"{}\".\n\
         Format as plain text:\n\
         1) Question line: \"Question X: ...\"\n\
         2) Four options labeled A., B., C., D.\n\
         3) Answer line: \"Answer: X\" (A/B/C/D)\n",
        request.count(),
        request.topic()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_count_and_topic() {
        let request = QuizRequest::new("Computer Science", 10).unwrap();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("Generate a 10-question multiple choice quiz about \"Computer Science\"."));
        assert!(prompt.contains("Four options labeled A., B., C., D."));
        assert!(prompt.contains("\"Answer: X\" (A/B/C/D)"));
    }
}
