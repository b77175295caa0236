//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the quiz.
//! All types are pure data with no external dependencies, making them usable
//! from the round logic, the key map and the terminal view alike.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `AUTO_ADVANCE_MS` | 2000 | Answer stays on screen before the next level |
//! | `LOSS_ADVANCE_MS` | 2500 | Loss banner stays on screen before the next level |
//! | `SHAKE_MS` | 500 | Image shake after a wrong answer |
//!
//! # Examples
//!
//! ```
//! use picture_quiz_types::{HostAction, LossReason, CORRECT_ANSWER_POINTS};
//!
//! assert_eq!(HostAction::Correct.as_str(), "correct");
//! assert_eq!(HostAction::JumpToLevel(2).as_str(), "jumpToLevel");
//! assert!(HostAction::ResetScore.is_admin_only());
//! assert_eq!(LossReason::OutOfAttempts.as_str(), "outOfAttempts");
//! assert_eq!(CORRECT_ANSWER_POINTS, 10);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Points awarded when the host marks an answer correct.
pub const CORRECT_ANSWER_POINTS: u32 = 10;

/// Wrong answers allowed per level before the level is lost.
pub const DEFAULT_MAX_WRONG_ATTEMPTS: u32 = 3;

/// Delay between a reveal and the automatic move to the next level.
pub const AUTO_ADVANCE_MS: u32 = 2000;

/// Delay between a hint-exhaustion loss and the next level.
pub const LOSS_ADVANCE_MS: u32 = 2500;

/// Duration of the image shake after a wrong answer.
pub const SHAKE_MS: u32 = 500;

/// Number of level slots reachable from the admin jump keys (`1`-`9`).
pub const ADMIN_JUMP_SLOTS: usize = 9;


/// Which top-level screen the game is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Title screen with the rules, waiting for the host to start.
    #[default]
    Home,
    /// A level is in progress.
    Playing,
    /// Every level has been played; final score is shown.
    Finished,
}

/// Actions raised by the host (or the admin panel).
///
/// Every action is applied through the controller; actions outside their
/// precondition are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    /// Leave the home screen and start playing
    StartGame,
    /// Reset the session and go back to the home screen
    ReturnHome,
    /// The player answered correctly
    Correct,
    /// The player answered wrong
    Wrong,
    /// Reveal one more word of the answer
    Hint,
    /// Reveal one more content clue
    ContentHint,
    /// Move to the next level
    NextLevel,
    /// Move back one level
    PreviousLevel,
    /// Dismiss the answer reveal without advancing
    CloseReveal,
    /// Restore the whole session to its initial values
    ResetGame,
    /// Show or hide the admin panel
    ToggleAdmin,
    /// Show or hide the current answer (admin)
    ToggleShowAnswers,
    /// Jump to a level by zero-based index (admin)
    JumpToLevel(usize),
    /// Set the score back to zero (admin)
    ResetScore,
}

impl HostAction {
    /// camelCase name, used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostAction::StartGame => "startGame",
            HostAction::ReturnHome => "returnHome",
            HostAction::Correct => "correct",
            HostAction::Wrong => "wrong",
            HostAction::Hint => "hint",
            HostAction::ContentHint => "contentHint",
            HostAction::NextLevel => "nextLevel",
            HostAction::PreviousLevel => "previousLevel",
            HostAction::CloseReveal => "closeReveal",
            HostAction::ResetGame => "resetGame",
            HostAction::ToggleAdmin => "toggleAdmin",
            HostAction::ToggleShowAnswers => "toggleShowAnswers",
            HostAction::JumpToLevel(_) => "jumpToLevel",
            HostAction::ResetScore => "resetScore",
        }
    }

    /// Actions that only take effect while the admin panel is enabled.
    pub fn is_admin_only(&self) -> bool {
        matches!(
            self,
            HostAction::ToggleShowAnswers | HostAction::JumpToLevel(_) | HostAction::ResetScore
        )
    }
}

/// Why a level was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossReason {
    /// Every word of the answer was given away as a hint.
    HintsExhausted,
    /// The wrong-attempt limit was reached.
    OutOfAttempts,
}

impl LossReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            LossReason::HintsExhausted => "hintsExhausted",
            LossReason::OutOfAttempts => "outOfAttempts",
        }
    }
}

/// How the answer of the current level came to be revealed.
///
/// Points are only displayed for [`RevealOutcome::Won`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealOutcome {
    Won,
    Lost(LossReason),
}

impl RevealOutcome {
    pub fn shows_points(&self) -> bool {
        matches!(self, RevealOutcome::Won)
    }
}

/// Sound effect hooks.
///
/// The game only emits cues; playing them is left to whoever drains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Correct,
    Wrong,
    LevelComplete,
    OutOfHints,
}

impl AudioCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::Correct => "correct",
            AudioCue::Wrong => "wrong",
            AudioCue::LevelComplete => "levelComplete",
            AudioCue::OutOfHints => "outOfHints",
        }
    }
}
