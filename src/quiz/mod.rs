//! The quiz domain: questions, events, state and the reducer over them.
//!
//! Everything here is pure. The async shell lives in [`crate::session`],
//! [`crate::timer`] and [`crate::effects`].

mod error;
mod event;
mod question;
mod reducer;
mod state;
mod status;
pub mod summary;

pub use error::QuizError;
pub use event::{Action, QuizEvent};
pub use question::{Question, QuestionBank, OPTIONS_PER_QUESTION};
pub use reducer::{accepted_in, reduce};
pub use state::QuizState;
pub use status::QuizStatus;
