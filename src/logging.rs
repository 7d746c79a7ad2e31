//! Log setup.
//!
//! The terminal UI owns stdout and stderr, so logs only go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::QuizError;

const DEFAULT_FILTER: &str = "quiz_maker=info";

/// Installs a subscriber appending to `path`, filtered by `RUST_LOG`.
pub fn init(path: &Path) -> Result<(), QuizError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_line_number(true)
        .init();

    Ok(())
}
