//! The quiz reducer: `(state, event) -> next state`.
//!
//! Every lifecycle change goes through [`reduce`]. It is deterministic, reads
//! nothing but its arguments and never mutates the input state, so a rejected
//! event leaves the caller's state exactly as it was.

use super::error::QuizError;
use super::event::QuizEvent;
use super::state::QuizState;
use super::status::QuizStatus;
use crate::config::QuizConfig;
use crate::core::Guard;
use crate::validation::validate_questions;

/// Phases in which an event may be applied.
pub fn accepted_in(event: &QuizEvent) -> Guard<QuizStatus> {
    use QuizStatus::*;

    match event {
        QuizEvent::DataReceived(_) | QuizEvent::DataFailed => Guard::any_of(&[Loading]),
        QuizEvent::Start => Guard::any_of(&[Ready]),
        QuizEvent::NewAnswer(_) | QuizEvent::NextQuestion | QuizEvent::Finish => {
            Guard::any_of(&[Active])
        }
        QuizEvent::Restart => Guard::any_of(&[Ready, Active, Finished]),
        QuizEvent::Tick => Guard::always(),
    }
}

/// Apply one event to a state.
///
/// `tick` outside the active phase is accepted and changes nothing. Any other
/// event outside its phases fails with [`QuizError::IllegalTransition`].
/// A `dataReceived` payload that fails [`validate_questions`] is treated as a
/// failed load and moves the quiz to the error phase.
pub fn reduce(
    state: &QuizState,
    event: QuizEvent,
    config: &QuizConfig,
) -> Result<QuizState, QuizError> {
    if !accepted_in(&event).check(&state.status) {
        return Err(QuizError::IllegalTransition {
            event: event.name(),
            status: state.status.to_string(),
        });
    }

    match event {
        QuizEvent::DataReceived(questions) if validate_questions(&questions).is_failure() => {
            Ok(QuizState {
                status: QuizStatus::Error,
                ..state.clone()
            })
        }
        QuizEvent::DataReceived(questions) => Ok(QuizState {
            questions,
            status: QuizStatus::Ready,
            ..state.clone()
        }),
        QuizEvent::DataFailed => Ok(QuizState {
            status: QuizStatus::Error,
            ..state.clone()
        }),
        QuizEvent::Start => {
            if state.questions.is_empty() {
                return Err(QuizError::NoQuestions);
            }
            Ok(QuizState {
                status: QuizStatus::Active,
                current_index: 0,
                selected_answer: None,
                points: 0,
                seconds_remaining: Some(config.countdown_for(state.questions.len())),
                ..state.clone()
            })
        }
        QuizEvent::NewAnswer(choice) => answer(state, choice),
        QuizEvent::NextQuestion => {
            if state.is_last_question() {
                return Err(QuizError::NoMoreQuestions {
                    index: state.current_index,
                });
            }
            Ok(QuizState {
                current_index: state.current_index + 1,
                selected_answer: None,
                ..state.clone()
            })
        }
        QuizEvent::Finish => Ok(finish(state.clone())),
        QuizEvent::Restart => Ok(QuizState::ready(
            state.questions.clone(),
            state.high_score,
        )),
        QuizEvent::Tick => Ok(tick(state)),
    }
}

fn answer(state: &QuizState, choice: usize) -> Result<QuizState, QuizError> {
    let index = state.current_index;
    if state.has_answered() {
        return Err(QuizError::AlreadyAnswered { index });
    }
    let question = state
        .current_question()
        .ok_or(QuizError::NoQuestions)?;
    if choice >= question.options.len() {
        return Err(QuizError::InvalidChoice {
            index,
            choice,
            options: question.options.len(),
        });
    }

    Ok(QuizState {
        selected_answer: Some(choice),
        points: state.points.saturating_add(question.score(choice)),
        ..state.clone()
    })
}

fn tick(state: &QuizState) -> QuizState {
    if state.status != QuizStatus::Active {
        return state.clone();
    }

    let remaining = state.seconds_remaining.unwrap_or(0).saturating_sub(1);
    if remaining == 0 {
        return finish(state.clone());
    }
    QuizState {
        seconds_remaining: Some(remaining),
        ..state.clone()
    }
}

// Shared by `finish` and a countdown reaching zero.
fn finish(state: QuizState) -> QuizState {
    QuizState {
        status: QuizStatus::Finished,
        high_score: state.high_score.max(state.points),
        selected_answer: None,
        seconds_remaining: None,
        ..state
    }
}
