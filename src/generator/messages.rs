//! Wire format of the chat-completion endpoint.
//!
//! All messages are serialized as JSON.

use serde::{Deserialize, Serialize};

/// Body of a `POST /chat/completions` request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// One message of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content),
        }
    }
}

/// Successful response body. Fields we do not read are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

impl ChatResponse {
    /// Trimmed content of the first choice, empty when absent.
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage::user("hello".to_string())],
            max_tokens: 800,
            temperature: 0.5,
        };
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_first_content_is_trimmed() {
        let json = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"\n Question 1: a?\n "}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_content(), "Question 1: a?");
    }

    #[test]
    fn test_first_content_missing() {
        for json in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
        ] {
            let response: ChatResponse = serde_json::from_str(json).unwrap();
            assert_eq!(response.first_content(), "", "for {}", json);
        }
    }
}
