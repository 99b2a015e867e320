//! Events accepted by the quiz reducer.

use super::error::QuizError;
use super::question::Question;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every input the quiz reducer understands. The set is closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    /// The question file was fetched and parsed.
    DataReceived(Vec<Question>),
    /// The question file could not be fetched or parsed.
    DataFailed,
    Start,
    /// The user picked the option at this index.
    NewAnswer(usize),
    NextQuestion,
    Finish,
    Restart,
    /// One second of the countdown elapsed.
    Tick,
}

impl QuizEvent {
    /// Wire name of the event, as used in `Action::kind`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DataReceived(_) => "dataReceived",
            Self::DataFailed => "dataFailed",
            Self::Start => "start",
            Self::NewAnswer(_) => "newAnswer",
            Self::NextQuestion => "nextQuestion",
            Self::Finish => "finish",
            Self::Restart => "restart",
            Self::Tick => "tick",
        }
    }
}

/// Untyped event envelope, `{ "type": "...", "payload": ... }`.
///
/// Collaborators that speak JSON build one of these; it is decoded into a
/// [`QuizEvent`] before reaching the reducer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

impl TryFrom<Action> for QuizEvent {
    type Error = QuizError;

    fn try_from(action: Action) -> Result<Self, Self::Error> {
        let event = match action.kind.as_str() {
            "dataReceived" => {
                let questions = decode_payload::<Vec<Question>>(&action)?;
                Self::DataReceived(questions)
            }
            "dataFailed" => Self::DataFailed,
            "start" => Self::Start,
            "newAnswer" => Self::NewAnswer(decode_payload::<usize>(&action)?),
            "nextQuestion" => Self::NextQuestion,
            "finish" => Self::Finish,
            "restart" => Self::Restart,
            "tick" => Self::Tick,
            _ => return Err(QuizError::UnknownAction(action.kind)),
        };
        Ok(event)
    }
}

impl From<&QuizEvent> for Action {
    fn from(event: &QuizEvent) -> Self {
        match event {
            QuizEvent::DataReceived(questions) => Action::with_payload(
                event.name(),
                serde_json::to_value(questions).unwrap_or(Value::Null),
            ),
            QuizEvent::NewAnswer(choice) => Action::with_payload(event.name(), Value::from(*choice)),
            _ => Action::new(event.name()),
        }
    }
}

fn decode_payload<T: for<'de> Deserialize<'de>>(action: &Action) -> Result<T, QuizError> {
    serde_json::from_value(action.payload.clone()).map_err(|e| QuizError::MalformedPayload {
        action: action.kind.clone(),
        reason: e.to_string(),
    })
}
