//! The single owned state container.
//!
//! Every change to a quiz goes through [`QuizStore::dispatch`], one event at a
//! time. The store runs the pure reducer, swaps in the result only when the
//! event was accepted and records phase changes in its history.

use crate::config::QuizConfig;
use crate::core::{StateHistory, StateTransition};
use crate::quiz::{reduce, Action, QuizError, QuizEvent, QuizState, QuizStatus};
use crate::validation::{check_invariants, into_result};
use chrono::Utc;

/// Phase changes kept per store; older ones are dropped.
pub const HISTORY_LIMIT: usize = 256;

/// Owns the current [`QuizState`] and serializes every update to it.
#[derive(Debug)]
pub struct QuizStore {
    state: QuizState,
    config: QuizConfig,
    history: StateHistory<QuizStatus>,
    runs: u64,
}

impl QuizStore {
    /// Create a store in the loading phase.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            state: QuizState::initial(),
            config,
            history: StateHistory::with_limit(HISTORY_LIMIT),
            runs: 0,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn status(&self) -> QuizStatus {
        self.state.status
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory<QuizStatus> {
        &self.history
    }

    /// Number of play-throughs started so far. Each accepted `start` opens a
    /// new run; timers use it to notice they belong to an older one.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Apply one event. On error the state is left untouched.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<&QuizState, QuizError> {
        let name = event.name();
        let next = match reduce(&self.state, event, &self.config) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!("Rejected '{}' while {}: {}", name, self.state.status, e);
                return Err(e);
            }
        };

        if let Err(violations) = into_result(check_invariants(&next)) {
            for violation in &violations {
                tracing::warn!("Invariant broken after '{}': {}", name, violation);
            }
        }

        let from = self.state.status;
        if from != next.status {
            tracing::info!("Quiz {} -> {} on '{}'", from, next.status, name);
            if next.status == QuizStatus::Active {
                self.runs += 1;
            }
            self.history.push(StateTransition {
                from,
                to: next.status,
                timestamp: Utc::now(),
                trigger: name.to_string(),
            });
        } else {
            tracing::debug!("Applied '{}' while {}", name, from);
        }

        self.state = next;
        Ok(&self.state)
    }

    /// Decode an untyped action and apply it.
    pub fn dispatch_action(&mut self, action: Action) -> Result<&QuizState, QuizError> {
        let event = QuizEvent::try_from(action).inspect_err(|e| {
            tracing::warn!("Dropped action: {}", e);
        })?;
        self.dispatch(event)
    }
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}
