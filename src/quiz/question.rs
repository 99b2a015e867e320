//! Question records and the static question file format.

use serde::{Deserialize, Serialize};

/// Number of options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question. Immutable once loaded.
///
/// Field names on the wire follow the question file:
/// `{ "question", "options", "correctOption", "points" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOption")]
    pub correct_option: usize,
    pub points: u32,
}

impl Question {
    /// Whether `choice` is the correct option.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_option
    }

    /// Points awarded for `choice`.
    pub fn score(&self, choice: usize) -> u32 {
        if self.is_correct(choice) {
            self.points
        } else {
            0
        }
    }
}

/// The top-level question file: `{ "questions": [ ... ] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Parse a question file without validating its contents.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
