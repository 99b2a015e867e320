//! Quiz configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default countdown budget per question, in seconds.
pub const SECS_PER_QUESTION: u32 = 30;

const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
const DEFAULT_QUESTIONS_PATH: &str = "data/questions.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for a quiz session.
///
/// ```toml
/// secs_per_question = 30
/// tick_interval_ms = 1000
/// questions_path = "data/questions.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub secs_per_question: u32,
    pub tick_interval_ms: u64,
    pub questions_path: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            secs_per_question: SECS_PER_QUESTION,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Countdown budget for a quiz of `num_questions` questions.
    pub fn countdown_for(&self, num_questions: usize) -> u32 {
        u32::try_from(num_questions)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.secs_per_question)
    }

    /// Period of the countdown timer.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secs_per_question == 0 {
            return Err(ConfigError::Invalid(
                "secs_per_question must be greater than zero".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = QuizConfig::from_toml_str("").unwrap();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.secs_per_question, 30);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn overrides_are_applied() {
        let config = QuizConfig::from_toml_str(
            r#"
            secs_per_question = 15
            tick_interval_ms = 250
            questions_path = "/srv/quiz/questions.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.secs_per_question, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.questions_path, PathBuf::from("/srv/quiz/questions.json"));
    }

    #[test]
    fn zero_budget_is_invalid() {
        let result = QuizConfig::from_toml_str("secs_per_question = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = QuizConfig::from_toml_str("shuffle = true");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = QuizConfig::load("/definitely/not/here/quizflow.toml");
        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert!(path.ends_with("quizflow.toml"));
            }
            other => panic!("Expected read error, got {other:?}"),
        }
    }

    #[test]
    fn countdown_scales_with_question_count() {
        let config = QuizConfig::default();
        assert_eq!(config.countdown_for(3), 90);
        assert_eq!(config.countdown_for(0), 0);
    }
}
