//! One-shot question loading as a Stillwater effect.

use crate::config::QuizConfig;
use crate::quiz::{Question, QuestionBank, QuizError};
use crate::validation::{into_result, validate_questions, Violation};
use std::path::PathBuf;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use thiserror::Error;

/// Errors that can occur while loading the question file.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    #[error("Failed to fetch questions: {0}")]
    Transport(String),

    #[error("Failed to parse questions: {0}")]
    Parse(String),

    #[error("Question file is invalid: {}", describe(.0))]
    Invalid(Vec<Violation>),

    #[error("Loaded questions were rejected: {0}")]
    Rejected(#[from] QuizError),
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Environment capability: hand over the raw question document.
pub trait QuestionSource {
    fn fetch(&self) -> Result<String, LoadError>;
}

/// Reads the question document from disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.questions_path.clone())
    }
}

impl QuestionSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| LoadError::Transport(format!("{}: {e}", self.path.display())))
    }
}

/// Serves a question document held in memory.
#[derive(Clone, Debug)]
pub struct StaticSource {
    document: String,
}

impl StaticSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl QuestionSource for StaticSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.document.clone())
    }
}

/// Parse and validate a raw question document.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, LoadError> {
    let bank = QuestionBank::from_json(raw).map_err(|e| LoadError::Parse(e.to_string()))?;
    into_result(validate_questions(&bank.questions)).map_err(LoadError::Invalid)?;
    Ok(bank.into_questions())
}

/// Fetch, parse and validate the question list from the environment.
pub fn load_questions<Env>() -> impl Effect<Output = Vec<Question>, Error = LoadError, Env = Env>
where
    Env: QuestionSource + Clone + Send + Sync + 'static,
{
    from_fn(|env: &Env| {
        let raw = env.fetch()?;
        parse_questions(&raw)
    })
}
