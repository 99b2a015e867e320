//! Quizflow: a reducer-driven quiz engine
//!
//! Quizflow follows a "pure core, imperative shell" layout. The quiz lifecycle
//! (loading → ready → active → finished) is a single pure reducer over a
//! closed event set, while the question fetch and the countdown timer live in
//! a thin async shell around one serialized dispatch point.
//!
//! # Core Concepts
//!
//! - **Status**: the lifecycle phase, implementing the `State` trait
//! - **Events**: a closed tagged union of everything that can change the quiz
//! - **Reducer**: `(state, event) -> state`, deterministic and side-effect free
//! - **Store**: the one owned state container every event funnels through
//! - **Session**: the shell that loads questions once and drives the timer
//!
//! # Example
//!
//! ```rust
//! use quizflow::{QuizConfig, QuizEvent, QuizStatus, QuizStore};
//! use quizflow::quiz::Question;
//!
//! let question = Question {
//!     prompt: "Which hook manages reducer state?".to_string(),
//!     options: vec![
//!         "useState".to_string(),
//!         "useReducer".to_string(),
//!         "useEffect".to_string(),
//!         "useRef".to_string(),
//!     ],
//!     correct_option: 1,
//!     points: 10,
//! };
//!
//! let mut store = QuizStore::new(QuizConfig::default());
//! store.dispatch(QuizEvent::DataReceived(vec![question])).unwrap();
//! store.dispatch(QuizEvent::Start).unwrap();
//! store.dispatch(QuizEvent::NewAnswer(1)).unwrap();
//! let state = store.dispatch(QuizEvent::Finish).unwrap();
//!
//! assert_eq!(state.status, QuizStatus::Finished);
//! assert_eq!(state.high_score, 10);
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod macros;
pub mod quiz;
pub mod session;
pub mod store;
pub mod timer;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, QuizConfig, SECS_PER_QUESTION};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use quiz::{reduce, Action, QuizError, QuizEvent, QuizState, QuizStatus};
pub use session::{QuizObserver, QuizSession};
pub use store::QuizStore;
