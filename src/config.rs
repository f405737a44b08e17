use std::path::PathBuf;
use std::time::Duration;

/// Questions drawn per session.
pub const QUESTIONS_PER_QUIZ: usize = 5;
pub const POINTS_PER_CORRECT: u32 = 10;
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub const LOG_ENV: &str = "TRIVIA_QUIZ_LOG";
pub const SEED_ENV: &str = "TRIVIA_QUIZ_SEED";
pub const DEFAULT_LOG_FILE: &str = "trivia_debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub questions_per_quiz: usize,
    pub tick_period: Duration,
    /// Debug log destination. Logging stays off when unset.
    pub log_file: Option<PathBuf>,
    /// Fixed seed for reproducible draws.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            questions_per_quiz: QUESTIONS_PER_QUIZ,
            tick_period: TICK_PERIOD,
            log_file: None,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var(LOG_ENV).ok(), std::env::var(SEED_ENV).ok())
    }

    fn from_vars(log: Option<String>, seed: Option<String>) -> Self {
        let log_file = log.map(|value| {
            if value.trim().is_empty() || value == "1" {
                PathBuf::from(DEFAULT_LOG_FILE)
            } else {
                PathBuf::from(value)
            }
        });
        let seed = seed.and_then(|value| value.trim().parse().ok());

        Self {
            log_file,
            seed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.questions_per_quiz, 5);
        assert_eq!(config.tick_period, Duration::from_secs(1));
        assert!(config.log_file.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_log_flag_uses_default_file() {
        let config = AppConfig::from_vars(Some("1".to_string()), None);
        assert_eq!(config.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
    }

    #[test]
    fn test_log_path_and_seed() {
        let config =
            AppConfig::from_vars(Some("/tmp/quiz.log".to_string()), Some(" 99 ".to_string()));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/quiz.log")));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_invalid_seed_is_ignored() {
        let config = AppConfig::from_vars(None, Some("not-a-number".to_string()));
        assert!(config.seed.is_none());
    }
}
