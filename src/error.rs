use std::io;

use thiserror::Error;

/// Form input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please paste your OpenAI API key.")]
    MissingApiKey,
    #[error("Please enter a topic.")]
    MissingTopic,
    #[error("Unsupported question count {0}: choose 3, 5 or 10.")]
    UnsupportedCount(u32),
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The completion service answered with a non-2xx status.
    #[error("API error {status}: {body}")]
    Request { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response from the completion service: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
