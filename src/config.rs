/// Default base URL of the OpenAI-compatible API.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Settings for talking to the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Base URL; `/chat/completions` is appended.
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GeneratorConfig {
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
