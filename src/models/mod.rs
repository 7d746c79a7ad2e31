mod question;
mod request;

pub use question::{render_answer_text, AnswerLetter, Question};
pub use request::{QuestionCount, QuizRequest};

/// Screen the application is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Collecting API key, topic and question count.
    #[default]
    Setup,
    /// Answering questions one at a time.
    InProgress,
    /// Reviewing the scored answers.
    Finished,
}
