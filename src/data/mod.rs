mod parser;

pub use parser::{parse_quiz, strip_answer_label, strip_option_label, strip_question_label};
