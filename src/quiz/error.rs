//! Errors raised while applying events.

use thiserror::Error;

/// Reasons a dispatched event was rejected. A rejected event never changes
/// the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Event '{event}' is not accepted while the quiz is {status}")]
    IllegalTransition { event: &'static str, status: String },

    #[error("Question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("Choice {choice} is out of range for question {index} ({options} options)")]
    InvalidChoice {
        index: usize,
        choice: usize,
        options: usize,
    },

    #[error("Question {index} is the last question")]
    NoMoreQuestions { index: usize },

    #[error("Cannot start a quiz without questions")]
    NoQuestions,

    #[error("Malformed payload for '{action}': {reason}")]
    MalformedPayload { action: String, reason: String },
}
