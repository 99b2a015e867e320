//! Question payload rules and quiz state invariants.

use crate::quiz::{Question, QuizState, QuizStatus, OPTIONS_PER_QUESTION};
use crate::validation::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a check: success, or every violation found.
pub type Checked = Validation<(), NonEmptyVec<Violation>>;

/// Check a loaded question list, accumulating ALL violations.
pub fn validate_questions(questions: &[Question]) -> Checked {
    if questions.is_empty() {
        return Validation::fail(Violation::NoQuestions);
    }

    let checks: Vec<Checked> = questions
        .iter()
        .enumerate()
        .flat_map(|(index, question)| question_checks(index, question))
        .chain(total_points_check(questions))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn total_points_check(questions: &[Question]) -> Option<Checked> {
    questions
        .iter()
        .try_fold(0u32, |total, q| total.checked_add(q.points))
        .is_none()
        .then(|| Validation::fail(Violation::PointsOverflow))
}

fn question_checks(index: usize, question: &Question) -> Vec<Checked> {
    let mut checks = Vec::new();

    if question.prompt.trim().is_empty() {
        checks.push(Validation::fail(Violation::EmptyPrompt { index }));
    }

    if question.options.len() != OPTIONS_PER_QUESTION {
        checks.push(Validation::fail(Violation::WrongOptionCount {
            index,
            found: question.options.len(),
            expected: OPTIONS_PER_QUESTION,
        }));
    }

    if question.correct_option >= question.options.len() {
        checks.push(Validation::fail(Violation::CorrectOptionOutOfRange {
            index,
            correct_option: question.correct_option,
            options: question.options.len(),
        }));
    }

    checks
}

/// Check the lifecycle invariants of a state, accumulating ALL violations.
pub fn check_invariants(state: &QuizState) -> Checked {
    let status = state.status;
    let mut checks: Vec<Checked> = Vec::new();

    match status {
        QuizStatus::Loading => {
            if !state.questions.is_empty() {
                checks.push(Validation::fail(Violation::invariant(
                    status,
                    "questions are already loaded",
                )));
            }
            if state.seconds_remaining.is_some() {
                checks.push(Validation::fail(Violation::invariant(
                    status,
                    "a countdown is running",
                )));
            }
        }
        QuizStatus::Active => {
            if state.seconds_remaining.is_none() {
                checks.push(Validation::fail(Violation::invariant(
                    status,
                    "no countdown is running",
                )));
            }
            if state.current_index >= state.questions.len() {
                checks.push(Validation::fail(Violation::invariant(
                    status,
                    format!(
                        "question index {} is outside {} questions",
                        state.current_index,
                        state.questions.len()
                    ),
                )));
            }
        }
        QuizStatus::Finished => {
            if state.seconds_remaining.is_some_and(|s| s > 0) {
                checks.push(Validation::fail(Violation::invariant(
                    status,
                    "the countdown has time left",
                )));
            }
            if state.high_score < state.points {
                checks.push(Validation::fail(Violation::invariant(
                    status,
                    format!(
                        "high score {} is below points {}",
                        state.high_score, state.points
                    ),
                )));
            }
        }
        QuizStatus::Ready | QuizStatus::Error => {}
    }

    if status != QuizStatus::Active && state.selected_answer.is_some() {
        checks.push(Validation::fail(Violation::invariant(
            status,
            "an answer is selected outside a running quiz",
        )));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Collapse a check into a `Result` carrying every violation.
pub fn into_result(checked: Checked) -> Result<(), Vec<Violation>> {
    match checked {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
