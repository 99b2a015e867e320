//! Violations reported by question and state checks.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Question list is empty")]
    NoQuestions,

    #[error("Question {index} has an empty prompt")]
    EmptyPrompt { index: usize },

    #[error("Question {index} has {found} options, expected {expected}")]
    WrongOptionCount {
        index: usize,
        found: usize,
        expected: usize,
    },

    #[error("Question {index} marks option {correct_option} correct but has {options} options")]
    CorrectOptionOutOfRange {
        index: usize,
        correct_option: usize,
        options: usize,
    },

    #[error("Question points add up to more than {}", u32::MAX)]
    PointsOverflow,

    #[error("Quiz is {status} but {detail}")]
    BrokenInvariant { status: String, detail: String },
}

impl Violation {
    pub(crate) fn invariant(status: impl ToString, detail: impl Into<String>) -> Self {
        Self::BrokenInvariant {
            status: status.to_string(),
            detail: detail.into(),
        }
    }
}
