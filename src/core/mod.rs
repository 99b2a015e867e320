//! Core lifecycle types.
//!
//! This module contains the pure building blocks the quiz reducer is written
//! against:
//! - Lifecycle phases via the `State` trait
//! - Guard predicates deciding which phases accept an event
//! - Immutable history of phase changes
//!
//! Nothing in this module performs I/O or reads the clock on its own.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
