//! Game configuration.
//!
//! Read once at startup from environment variables; anything missing or
//! unparsable falls back to the default.
//!
//! - `QUIZ_MAX_WRONG_ATTEMPTS`: wrong answers allowed per level (default 3)
//! - `QUIZ_AUTO_ADVANCE_MS`: reveal-to-next-level delay (default 2000)
//! - `QUIZ_LOSS_ADVANCE_MS`: hint-exhaustion loss to next level delay (default 2500)
//! - `QUIZ_SHAKE_MS`: wrong-answer shake duration (default 500)
//! - `QUIZ_LOG_DIR`: directory for the session log file

use std::path::PathBuf;

use crate::types::{AUTO_ADVANCE_MS, DEFAULT_MAX_WRONG_ATTEMPTS, LOSS_ADVANCE_MS, SHAKE_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub max_wrong_attempts: u32,
    pub auto_advance_ms: u32,
    pub loss_advance_ms: u32,
    pub shake_ms: u32,
    pub log_dir: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_wrong_attempts: DEFAULT_MAX_WRONG_ATTEMPTS,
            auto_advance_ms: AUTO_ADVANCE_MS,
            loss_advance_ms: LOSS_ADVANCE_MS,
            shake_ms: SHAKE_MS,
            log_dir: None,
        }
    }
}

impl QuizConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, fallback: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(fallback)
        };

        // A level that can never be lost by wrong answers is not a level.
        let max_wrong_attempts = match number("QUIZ_MAX_WRONG_ATTEMPTS", defaults.max_wrong_attempts) {
            0 => defaults.max_wrong_attempts,
            n => n,
        };

        let log_dir = lookup("QUIZ_LOG_DIR")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            max_wrong_attempts,
            auto_advance_ms: number("QUIZ_AUTO_ADVANCE_MS", defaults.auto_advance_ms),
            loss_advance_ms: number("QUIZ_LOSS_ADVANCE_MS", defaults.loss_advance_ms),
            shake_ms: number("QUIZ_SHAKE_MS", defaults.shake_ms),
            log_dir,
        }
    }
}
