use std::fmt;

use crate::error::ValidationError;

/// Number of questions the user may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionCount {
    #[default]
    Three,
    Five,
    Ten,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 3] = [Self::Three, Self::Five, Self::Ten];

    pub fn get(self) -> u32 {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Three => Self::Five,
            Self::Five => Self::Ten,
            Self::Ten => Self::Three,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Three => Self::Ten,
            Self::Five => Self::Three,
            Self::Ten => Self::Five,
        }
    }
}

impl TryFrom<u32> for QuestionCount {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            other => Err(ValidationError::UnsupportedCount(other)),
        }
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A validated request for a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    topic: String,
    count: QuestionCount,
}

impl QuizRequest {
    /// Validates the topic and count. The topic is stored trimmed.
    pub fn new(topic: &str, count: u32) -> Result<Self, ValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        let count = QuestionCount::try_from(count)?;

        Ok(Self {
            topic: topic.to_string(),
            count,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn count(&self) -> QuestionCount {
        self.count
    }
}
