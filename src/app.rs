use tracing::{info, warn};

use crate::data::parse_quiz;
use crate::error::QuizError;
use crate::generator::validate;
use crate::models::{AnswerLetter, AppState, Question, QuestionCount, QuizRequest};
use crate::session::QuizSession;

/// Input field focused on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    ApiKey,
    #[default]
    Topic,
    Count,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::ApiKey => Self::Topic,
            Self::Topic => Self::Count,
            Self::Count => Self::ApiKey,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::ApiKey => Self::Count,
            Self::Topic => Self::ApiKey,
            Self::Count => Self::Topic,
        }
    }
}

/// Values typed on the setup screen. Survive a restart.
#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    pub api_key: String,
    pub topic: String,
    pub count: QuestionCount,
    pub focus: FormField,
}

/// A validated generation that is now in flight.
#[derive(Debug, Clone)]
pub struct PendingGeneration {
    pub request: QuizRequest,
    pub api_key: String,
}

pub struct App {
    pub state: AppState,
    form: SetupForm,
    busy: bool,
    error: Option<String>,
    raw_text: Option<String>,
    session: Option<QuizSession>,
    selected: Option<AnswerLetter>,
    result_scroll: usize,
}

impl App {
    pub fn new(form: SetupForm) -> Self {
        Self {
            state: AppState::Setup,
            form,
            busy: false,
            error: None,
            raw_text: None,
            session: None,
            selected: None,
            result_scroll: 0,
        }
    }

    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Model output shown verbatim when no question could be parsed from it.
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref()?.current_question()
    }

    pub fn selected_option(&self) -> Option<AnswerLetter> {
        self.selected
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn focus_next_field(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.form.focus = self.form.focus.previous();
    }

    /// Types `c` into the focused text field.
    pub fn input_push(&mut self, c: char) {
        match self.form.focus {
            FormField::ApiKey => self.form.api_key.push(c),
            FormField::Topic => self.form.topic.push(c),
            FormField::Count => {}
        }
    }

    pub fn input_pop(&mut self) {
        match self.form.focus {
            FormField::ApiKey => {
                self.form.api_key.pop();
            }
            FormField::Topic => {
                self.form.topic.pop();
            }
            FormField::Count => {}
        }
    }

    pub fn next_count(&mut self) {
        self.form.count = self.form.count.next();
    }

    pub fn previous_count(&mut self) {
        self.form.count = self.form.count.previous();
    }

    /// Clears the previous outcome and validates the form.
    ///
    /// Returns `None` while another generation is in flight or when the
    /// form is invalid; in the latter case the error is shown inline.
    pub fn begin_generation(&mut self) -> Option<PendingGeneration> {
        if self.busy {
            return None;
        }

        self.error = None;
        self.raw_text = None;
        self.session = None;
        self.selected = None;
        self.result_scroll = 0;
        self.state = AppState::Setup;

        match validate(&self.form.api_key, &self.form.topic, self.form.count.get()) {
            Ok(request) => {
                self.busy = true;
                Some(PendingGeneration {
                    request,
                    api_key: self.form.api_key.clone(),
                })
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Applies the outcome of the in-flight generation.
    pub fn finish_generation(&mut self, result: Result<String, QuizError>) {
        self.busy = false;

        let text = match result {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "quiz generation failed");
                self.error = Some(err.to_string());
                return;
            }
        };

        match QuizSession::new(parse_quiz(&text)) {
            Some(session) => {
                info!(session = %session.id(), "quiz ready");
                self.session = Some(session);
                self.state = AppState::InProgress;
            }
            None => {
                info!("no questions parsed, showing raw output");
                self.raw_text = Some(text);
            }
        }
    }

    pub fn select_option(&mut self, letter: AnswerLetter) {
        if self.state == AppState::InProgress {
            self.selected = Some(letter);
        }
    }

    pub fn select_next_option(&mut self) {
        let next = self.selected.map_or(AnswerLetter::A, AnswerLetter::next);
        self.select_option(next);
    }

    pub fn select_previous_option(&mut self) {
        let previous = self.selected.map_or(AnswerLetter::D, AnswerLetter::previous);
        self.select_option(previous);
    }

    /// Submits the selected letter. Does nothing until a letter is selected.
    pub fn submit_answer(&mut self) {
        let Some(letter) = self.selected else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.submit_answer(letter);
        self.selected = None;

        if session.is_finished() {
            self.state = AppState::Finished;
        }
    }

    pub fn calculate_score(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::score)
    }

    pub fn total_questions(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::total_questions)
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Discards the finished session and returns to the setup screen.
    pub fn restart(&mut self) {
        self.state = AppState::Setup;
        self.session = None;
        self.raw_text = None;
        self.error = None;
        self.selected = None;
        self.result_scroll = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SetupForm::default())
    }
}
