//! Phase change history.
//!
//! Keeps an ordered, timestamped record of every phase change a store goes
//! through, together with the name of the event that caused it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use quizflow::core::StateTransition;
/// use quizflow::QuizStatus;
/// use chrono::Utc;
///
/// let change = StateTransition {
///     from: QuizStatus::Ready,
///     to: QuizStatus::Active,
///     timestamp: Utc::now(),
///     trigger: "start".to_string(),
/// };
/// assert_eq!(change.trigger, "start");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
    /// Name of the event that caused the change
    pub trigger: String,
}

/// Ordered history of phase changes.
///
/// `record` returns a new history and leaves the receiver untouched; `push`
/// appends in place. A history built with [`StateHistory::with_limit`] keeps
/// only the most recent changes.
///
/// # Example
///
/// ```rust
/// use quizflow::core::{StateHistory, StateTransition};
/// use quizflow::QuizStatus;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: QuizStatus::Loading,
///         to: QuizStatus::Ready,
///         timestamp: Utc::now(),
///         trigger: "dataReceived".to_string(),
///     })
///     .record(StateTransition {
///         from: QuizStatus::Ready,
///         to: QuizStatus::Active,
///         timestamp: Utc::now(),
///         trigger: "start".to_string(),
///     });
///
/// assert_eq!(history.get_path().len(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` changes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a change, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Record a change in place, dropping the oldest ones beyond the limit.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Phases traversed: the first `from`, then every `to` in order.
    /// Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded change.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// How many times a phase was entered.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// The most recent change, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
