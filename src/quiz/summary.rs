//! Display props derived from a [`QuizState`].
//!
//! Views render these instead of reaching into the state directly.

use super::state::QuizState;
use serde::Serialize;

/// Header shown while a quiz is running.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// One-based number of the current question.
    pub question_number: usize,
    pub num_questions: usize,
    pub points: u32,
    pub max_points: u32,
    /// Fraction used for the progress bar; counts the current question once answered.
    pub bar_fraction: f64,
}

impl Progress {
    pub fn from_state(state: &QuizState) -> Self {
        let num_questions = state.num_questions();
        let answered = usize::from(state.has_answered());
        let bar_fraction = if num_questions == 0 {
            0.0
        } else {
            (state.current_index + answered) as f64 / num_questions as f64
        };

        Self {
            question_number: state.current_index + 1,
            num_questions,
            points: state.points,
            max_points: state.max_points(),
            bar_fraction,
        }
    }
}

/// Rating shown on the finish screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Perfect,
    Great,
    Okay,
    Poor,
    Zero,
}

impl ScoreBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Perfect
        } else if percentage >= 80.0 {
            Self::Great
        } else if percentage >= 50.0 {
            Self::Okay
        } else if percentage > 0.0 {
            Self::Poor
        } else {
            Self::Zero
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Perfect => "🥇",
            Self::Great => "🎉",
            Self::Okay => "🙃",
            Self::Poor => "🤨",
            Self::Zero => "🤦",
        }
    }
}

/// Finish screen figures.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub points: u32,
    pub max_points: u32,
    pub percentage: f64,
    pub high_score: u32,
    pub band: ScoreBand,
}

impl Summary {
    pub fn from_state(state: &QuizState) -> Self {
        let max_points = state.max_points();
        let percentage = if max_points == 0 {
            0.0
        } else {
            f64::from(state.points) / f64::from(max_points) * 100.0
        };

        Self {
            points: state.points,
            max_points,
            percentage,
            high_score: state.high_score,
            band: ScoreBand::from_percentage(percentage),
        }
    }

    /// Percentage rounded up to a whole number, as displayed.
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.ceil() as u32
    }
}

/// Countdown formatted as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
