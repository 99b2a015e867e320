//! Guard predicates for deciding which phases accept an event.

use super::state::State;
use std::fmt;

/// Pure predicate that decides whether an event may be applied in a phase.
///
/// The reducer builds one guard per event kind and consults it before
/// computing the next state.
///
/// # Example
///
/// ```rust
/// use quizflow::core::Guard;
/// use quizflow::QuizStatus;
///
/// let only_active = Guard::any_of(&[QuizStatus::Active]);
///
/// assert!(only_active.check(&QuizStatus::Active));
/// assert!(!only_active.check(&QuizStatus::Ready));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that accepts exactly the listed phases.
    pub fn any_of(allowed: &[S]) -> Self
    where
        S: 'static,
    {
        let allowed = allowed.to_vec();
        Self::new(move |state| allowed.contains(state))
    }

    /// Guard that accepts every phase.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard admits this phase.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
