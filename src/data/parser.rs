//! Best-effort extraction of questions from the model's plain-text reply.
//!
//! The expected layout of one block is:
//!
//! ```text
//! Question 1: What is 2+2?
//! A. 3
//! B. 4
//! C. 5
//! D. 6
//! Answer: B
//! ```
//!
//! Blocks are separated by a blank line. Nothing here fails: a block that
//! strays from the layout produces a partial [`Question`].

use crate::models::{AnswerLetter, Question};

const MAX_OPTIONS: usize = 4;
const QUESTION_LABEL: &str = "Question";
const ANSWER_LABEL: &str = "Answer:";

/// Parses every non-blank block of `raw` into a [`Question`].
pub fn parse_quiz(raw: &str) -> Vec<Question> {
    let normalized = raw.replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Question {
    let mut lines = block.trim_start_matches('\n').lines();

    let first = lines.next().unwrap_or_default();
    let text = strip_question_label(first).unwrap_or(first).trim().to_string();

    let rest: Vec<&str> = lines.collect();

    let options = rest
        .iter()
        .copied()
        .take_while(|line| strip_answer_label(line).is_none())
        .take(MAX_OPTIONS)
        .map(|line| strip_option_label(line).unwrap_or(line).trim().to_string())
        .collect();

    let correct_answer = std::iter::once(first)
        .chain(rest.iter().copied())
        .find_map(strip_answer_label)
        .and_then(parse_answer_letter);

    Question {
        text,
        options,
        correct_answer,
    }
}

/// Strips a leading `Question <digits>:` label and the whitespace after it.
pub fn strip_question_label(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(QUESTION_LABEL)?;
    let rest = rest.trim_start();
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = rest[digits..].strip_prefix(':')?;
    Some(rest.trim_start())
}

/// Strips a leading `A.` to `D.` label and the whitespace after it.
pub fn strip_option_label(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    AnswerLetter::from_char(chars.next()?)?;
    let rest = chars.as_str().strip_prefix('.')?;
    Some(rest.trim_start())
}

/// Returns the text after `Answer:`, up to any further colon, trimmed.
pub fn strip_answer_label(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(ANSWER_LABEL)?;
    let value = rest.split(':').next().unwrap_or_default();
    Some(value.trim())
}

/// Reads `B`, `B)`, `B.` or `B. 4` as the letter B. Anything else is `None`.
fn parse_answer_letter(value: &str) -> Option<AnswerLetter> {
    let mut chars = value.chars();
    let letter = AnswerLetter::from_char(chars.next()?)?;
    match chars.next() {
        None => Some(letter),
        Some(c) if c.is_alphanumeric() => None,
        Some(_) => Some(letter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_QUESTIONS: &str = "Question 1: What is the capital of France?\n\
        A. Berlin\n\
        B. Paris\n\
        C. Rome\n\
        D. Madrid\n\
        Answer: B\n\
        \n\
        Question 2: Which planet is known as the Red Planet?\n\
        A. Venus\n\
        B. Jupiter\n\
        C. Mars\n\
        D. Saturn\n\
        Answer: C";

    #[test]
    fn test_single_well_formed_block() {
        let questions = parse_quiz("Question 1: 2+2?\nA. 3\nB. 4\nC. 5\nD. 6\nAnswer: B");
        assert_eq!(
            questions,
            vec![Question {
                text: "2+2?".to_string(),
                options: vec!["3", "4", "5", "6"].into_iter().map(String::from).collect(),
                correct_answer: Some(AnswerLetter::B),
            }]
        );
    }

    #[test]
    fn test_multiple_blocks_in_order() {
        let questions = parse_quiz(TWO_QUESTIONS);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "What is the capital of France?");
        assert_eq!(questions[1].text, "Which planet is known as the Red Planet?");
        assert_eq!(questions[1].options, ["Venus", "Jupiter", "Mars", "Saturn"]);
        assert_eq!(questions[1].correct_answer, Some(AnswerLetter::C));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse_quiz("").is_empty());
        assert!(parse_quiz("   \n\n \t \n\n").is_empty());
    }

    #[test]
    fn test_block_count_matches_non_blank_blocks() {
        let raw = "First?\n\n\n\nSecond?\nA. x\n\n  \n\nThird?";
        let questions = parse_quiz(raw);
        let texts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, ["First?", "Second?", "Third?"]);
    }

    #[test]
    fn test_missing_options_are_omitted() {
        let questions = parse_quiz("Question 3: Pick one\nA. yes\nB. no\nAnswer: A");
        assert_eq!(questions[0].options, ["yes", "no"]);
        assert_eq!(questions[0].correct_answer, Some(AnswerLetter::A));
    }

    #[test]
    fn test_missing_answer_line() {
        let questions = parse_quiz("Question 1: Open?\nA. a\nB. b\nC. c\nD. d");
        assert_eq!(questions[0].options.len(), 4);
        assert_eq!(questions[0].correct_answer, None);
    }

    #[test]
    fn test_unlabelled_lines_are_kept_verbatim() {
        let questions = parse_quiz("Why?\nbecause\nno reason\nAnswer: maybe");
        assert_eq!(questions[0].text, "Why?");
        assert_eq!(questions[0].options, ["because", "no reason"]);
        assert_eq!(questions[0].correct_answer, None);
    }

    #[test]
    fn test_answer_after_extra_blank_line() {
        let questions = parse_quiz("Question 1: 2+2?\nA. 3\nB. 4\nC. 5\nD. 6\n\nAnswer: B");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].options, ["3", "4", "5", "6"]);
        assert_eq!(questions[0].correct_answer, None);
        // The stray answer becomes its own block and still carries the letter.
        assert_eq!(questions[1].text, "Answer: B");
        assert!(questions[1].options.is_empty());
        assert_eq!(questions[1].correct_answer, Some(AnswerLetter::B));
    }

    #[test]
    fn test_wrapped_question_text_takes_an_option_slot() {
        let raw = "Question 1: Which keyword declares\na constant in Rust?\nA. let\nB. const\nC. static\nD. mut\nAnswer: B";
        let questions = parse_quiz(raw);
        assert_eq!(questions[0].text, "Which keyword declares");
        assert_eq!(questions[0].options, ["a constant in Rust?", "let", "const", "static"]);
        assert_eq!(questions[0].correct_answer, Some(AnswerLetter::B));
    }

    #[test]
    fn test_extra_lines_beyond_four_options_are_ignored() {
        let raw = "Q?\nA. 1\nB. 2\nC. 3\nD. 4\nE. 5\nAnswer: D";
        let questions = parse_quiz(raw);
        assert_eq!(questions[0].options, ["1", "2", "3", "4"]);
        assert_eq!(questions[0].correct_answer, Some(AnswerLetter::D));
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "Question 1: a?\r\nA. x\r\nB. y\r\nC. z\r\nD. w\r\nAnswer: D\r\n\r\nQuestion 2: b?\r\nAnswer: A";
        let questions = parse_quiz(raw);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].options, ["x", "y", "z", "w"]);
        assert_eq!(questions[1].correct_answer, Some(AnswerLetter::A));
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_quiz(TWO_QUESTIONS), parse_quiz(TWO_QUESTIONS));
    }

    #[test]
    fn test_strip_question_label() {
        assert_eq!(strip_question_label("Question 12:   Why?"), Some("Why?"));
        assert_eq!(strip_question_label("Question 1:"), Some(""));
        assert_eq!(strip_question_label("Question: Why?"), None);
        assert_eq!(strip_question_label("Question one: Why?"), None);
        assert_eq!(strip_question_label("Why?"), None);
    }

    #[test]
    fn test_strip_option_label() {
        assert_eq!(strip_option_label("A. Paris"), Some("Paris"));
        assert_eq!(strip_option_label("D.Rome"), Some("Rome"));
        assert_eq!(strip_option_label("E. Oslo"), None);
        assert_eq!(strip_option_label("A) Paris"), None);
        assert_eq!(strip_option_label(""), None);
    }

    #[test]
    fn test_answer_line_variants() {
        assert_eq!(strip_answer_label("Answer: B"), Some("B"));
        assert_eq!(strip_answer_label("  Answer:C "), Some("C"));
        assert_eq!(strip_answer_label("Answer: B: because"), Some("B"));
        assert_eq!(strip_answer_label("Correct Answer: B"), None);

        assert_eq!(parse_answer_letter("B"), Some(AnswerLetter::B));
        assert_eq!(parse_answer_letter("B)"), Some(AnswerLetter::B));
        assert_eq!(parse_answer_letter("B. 4"), Some(AnswerLetter::B));
        assert_eq!(parse_answer_letter("Both"), None);
        assert_eq!(parse_answer_letter("b"), None);
        assert_eq!(parse_answer_letter(""), None);
    }
}
