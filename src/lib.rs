//! # quiz-maker
//!
//! A terminal quiz generator. Asks an OpenAI-compatible chat-completion
//! API for a multiple-choice quiz on a topic, parses the plain-text reply
//! and lets the user answer it question by question.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_maker::{GeneratorConfig, QuizError, QuizMaker, SetupForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let form = SetupForm {
//!         api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
//!         topic: "Computer Science".to_string(),
//!         ..SetupForm::default()
//!     };
//!
//!     QuizMaker::new(GeneratorConfig::default(), form).run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
mod error;
pub mod generator;
pub mod logging;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

pub use app::{App, FormField, PendingGeneration, SetupForm};
pub use config::GeneratorConfig;
pub use data::{parse_quiz, strip_answer_label, strip_option_label, strip_question_label};
pub use error::{QuizError, ValidationError};
pub use generator::CompletionClient;
pub use models::{render_answer_text, AnswerLetter, AppState, Question, QuestionCount, QuizRequest};
pub use session::QuizSession;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type GenerationResult = Result<String, QuizError>;

/// What the event loop should do after a key press.
#[derive(Debug)]
pub enum InputOutcome {
    Continue,
    Quit,
    /// Start the given request in the background.
    Generate(PendingGeneration),
}

/// A quiz generator that runs in the terminal.
pub struct QuizMaker {
    app: App,
    client: CompletionClient,
}

impl QuizMaker {
    pub fn new(config: GeneratorConfig, form: SetupForm) -> Self {
        Self {
            app: App::new(form),
            client: CompletionClient::new(config),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::init()?;
        run_event_loop(guard.terminal(), &mut self.app, &self.client).await
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    client: &CompletionClient,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<GenerationResult>();

    loop {
        while let Ok(result) = rx.try_recv() {
            app.finish_generation(result);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(app, key) {
                InputOutcome::Continue => {}
                InputOutcome::Quit => break,
                InputOutcome::Generate(pending) => {
                    spawn_generation(client.clone(), pending, tx.clone());
                }
            }
        }
    }

    Ok(())
}

fn spawn_generation(
    client: CompletionClient,
    pending: PendingGeneration,
    tx: mpsc::UnboundedSender<GenerationResult>,
) {
    tokio::spawn(async move {
        let result = client.complete(&pending.request, &pending.api_key).await;
        // The receiver only goes away when the user has quit.
        let _ = tx.send(result);
    });
}

/// Maps a key press onto the current screen.
pub fn handle_input(app: &mut App, key: KeyEvent) -> InputOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputOutcome::Quit;
    }

    match app.state {
        AppState::Setup => handle_setup_input(app, key.code),
        AppState::InProgress => handle_quiz_input(app, key.code),
        AppState::Finished => handle_result_input(app, key.code),
    }
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> InputOutcome {
    if key == KeyCode::Esc {
        return InputOutcome::Quit;
    }
    if app.is_busy() {
        return InputOutcome::Continue;
    }

    match key {
        KeyCode::Enter => match app.begin_generation() {
            Some(pending) => {
                debug!(topic = pending.request.topic(), "generation triggered");
                InputOutcome::Generate(pending)
            }
            None => InputOutcome::Continue,
        },
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next_field();
            InputOutcome::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_previous_field();
            InputOutcome::Continue
        }
        KeyCode::Left if app.form().focus == FormField::Count => {
            app.previous_count();
            InputOutcome::Continue
        }
        KeyCode::Right if app.form().focus == FormField::Count => {
            app.next_count();
            InputOutcome::Continue
        }
        KeyCode::Backspace => {
            app.input_pop();
            InputOutcome::Continue
        }
        KeyCode::Char(c) => {
            app.input_push(c);
            InputOutcome::Continue
        }
        _ => InputOutcome::Continue,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> InputOutcome {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputOutcome::Quit,
        KeyCode::Char(c) => {
            if let Some(letter) = AnswerLetter::from_char(c.to_ascii_uppercase()) {
                app.select_option(letter);
            }
        }
        _ => {}
    }
    InputOutcome::Continue
}

fn handle_result_input(app: &mut App, key: KeyCode) -> InputOutcome {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputOutcome::Quit,
        _ => {}
    }
    InputOutcome::Continue
}
