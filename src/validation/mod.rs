//! Validation for question payloads and quiz state.
//!
//! Checks use Stillwater's `Validation` type, so a malformed question file
//! reports every problem at once instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use quizflow::quiz::Question;
//! use quizflow::validation::{into_result, validate_questions, Violation};
//!
//! let broken = Question {
//!     prompt: String::new(),
//!     options: vec!["yes".to_string(), "no".to_string()],
//!     correct_option: 3,
//!     points: 5,
//! };
//!
//! let violations = into_result(validate_questions(&[broken])).unwrap_err();
//! assert_eq!(violations.len(), 3);
//! assert!(matches!(violations[0], Violation::EmptyPrompt { index: 0 }));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_invariants, into_result, validate_questions, Checked};
pub use violations::Violation;
