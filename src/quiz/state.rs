//! Quiz state and the values derived from it.

use super::question::Question;
use super::status::QuizStatus;
use serde::{Deserialize, Serialize};

/// Everything the quiz knows at one point in time.
///
/// Only the reducer produces new values of this type. Derived figures such
/// as [`max_points`](Self::max_points) are computed on read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub status: QuizStatus,
    pub current_index: usize,
    pub selected_answer: Option<usize>,
    pub points: u32,
    pub high_score: u32,
    pub seconds_remaining: Option<u32>,
}

impl QuizState {
    /// The state a quiz starts in: loading, nothing fetched yet.
    pub fn initial() -> Self {
        Self::default()
    }

    /// A fresh ready state over already loaded questions.
    pub fn ready(questions: Vec<Question>, high_score: u32) -> Self {
        Self {
            questions,
            status: QuizStatus::Ready,
            high_score,
            ..Self::default()
        }
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    /// Sum of the point values of all questions, saturating at `u32::MAX`.
    pub fn max_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |total, q| total.saturating_add(q.points))
    }

    /// `current_index / num_questions`, for progress display only.
    pub fn progress_fraction(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.current_index as f64 / self.questions.len() as f64
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn has_answered(&self) -> bool {
        self.selected_answer.is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }
}
