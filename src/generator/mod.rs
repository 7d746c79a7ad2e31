//! Quiz generation through an OpenAI-compatible chat-completion API.

mod client;
mod messages;
mod prompt;

pub use client::{validate, CompletionClient};
pub use messages::{ChatMessage, ChatRequest, ChatResponse, Choice};
pub use prompt::build_prompt;
