//! HTTP client for the chat-completion endpoint.

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::error::{QuizError, ValidationError};
use crate::models::QuizRequest;

use super::messages::{ChatMessage, ChatRequest, ChatResponse};
use super::prompt::build_prompt;

/// Issues quiz generation requests. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: Client,
    config: GeneratorConfig,
}

impl CompletionClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Validates the inputs, then asks the model for a quiz.
    ///
    /// No request is made when validation fails.
    pub async fn generate(&self, topic: &str, count: u32, api_key: &str) -> Result<String, QuizError> {
        let request = validate(api_key, topic, count)?;
        self.complete(&request, api_key).await
    }

    /// Sends one completion request for an already validated `request`.
    ///
    /// Returns the trimmed text of the first choice, or an empty string if
    /// the response carries none.
    pub async fn complete(&self, request: &QuizRequest, api_key: &str) -> Result<String, QuizError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage::user(build_prompt(request))],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        info!(
            topic = request.topic(),
            count = request.count().get(),
            model = %self.config.model,
            "requesting quiz"
        );

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "completion request rejected");
            return Err(QuizError::Request {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let content = parsed.first_content();
        debug!(chars = content.len(), "completion received");

        Ok(content)
    }
}

/// Checks the form inputs in the order the user sees them.
pub fn validate(api_key: &str, topic: &str, count: u32) -> Result<QuizRequest, ValidationError> {
    if api_key.trim().is_empty() {
        return Err(ValidationError::MissingApiKey);
    }
    QuizRequest::new(topic, count)
}
