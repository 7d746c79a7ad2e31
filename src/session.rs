//! Progress through a single generated quiz.

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{AnswerLetter, Question};

/// One pass through a list of questions.
///
/// Questions are visited exactly once, in order. The session is finished
/// once the last question has been answered.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<Question>,
    current_index: usize,
    user_answers: Vec<Option<AnswerLetter>>,
    score: usize,
    finished: bool,
}

impl QuizSession {
    /// Starts a session at the first question. Returns `None` for an empty list.
    pub fn new(questions: Vec<Question>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        let id = Uuid::new_v4();
        info!(session = %id, questions = questions.len(), "quiz session started");

        Some(Self {
            id,
            user_answers: vec![None; questions.len()],
            questions,
            current_index: 0,
            score: 0,
            finished: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The question awaiting an answer, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn user_answers(&self) -> &[Option<AnswerLetter>] {
        &self.user_answers
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Records `letter` for the current question and moves on.
    ///
    /// Ignored once the session is finished.
    pub fn submit_answer(&mut self, letter: AnswerLetter) {
        if self.finished {
            return;
        }

        let index = self.current_index;
        let question = &self.questions[index];
        let correct = question.correct_answer == Some(letter);
        self.user_answers[index] = Some(letter);
        if correct {
            self.score += 1;
        }

        debug!(session = %self.id, index, answer = %letter, correct, "answer recorded");

        self.current_index += 1;
        if self.current_index == self.questions.len() {
            self.finished = true;
            info!(
                session = %self.id,
                score = self.score,
                total = self.questions.len(),
                "quiz session finished"
            );
        }
    }
}
