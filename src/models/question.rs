use std::fmt;

/// Letter labelling one of the four answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Option index this letter refers to.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A multiple-choice question extracted from the model's reply.
///
/// `options` holds at most four entries; `correct_answer` is not checked
/// against the number of options that were actually parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: Option<AnswerLetter>,
}

impl Question {
    pub fn option(&self, letter: AnswerLetter) -> Option<&str> {
        self.options.get(letter.index()).map(String::as_str)
    }

    pub fn is_correct(&self, answer: Option<AnswerLetter>) -> bool {
        answer.is_some() && answer == self.correct_answer
    }
}

/// Human-readable form of an answer, e.g. `"B. 4"`.
///
/// Falls back to the bare letter when the question has no option at that
/// position.
pub fn render_answer_text(question: &Question, letter: Option<AnswerLetter>) -> String {
    match letter {
        None => "No answer".to_string(),
        Some(letter) => match question.option(letter) {
            Some(option) => format!("{}. {}", letter, option),
            None => letter.to_string(),
        },
    }
}
