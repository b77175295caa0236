use crate::admin::AdminState;
use crate::catalog::Level;
use crate::types::{LossReason, RevealOutcome, Screen};

/// Read-only view of the controller handed to the presentation layer.
///
/// Borrowed from the controller; take a fresh one after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuizSnapshot<'a> {
    pub screen: Screen,
    /// Zero-based; equals `level_count` once the game is complete.
    pub level_index: usize,
    pub level_count: usize,
    /// `None` once the game is complete.
    pub level: Option<&'a Level>,
    pub score: u32,
    pub is_answer_revealed: bool,
    pub wrong_attempts: u32,
    pub max_wrong_attempts: u32,
    pub hints_revealed: usize,
    pub content_hints_revealed: usize,
    pub reveal_outcome: Option<RevealOutcome>,
    pub loss_banner: Option<LossReason>,
    pub shaking: bool,
    /// Whole seconds (rounded up) until the pending auto-advance, if any.
    pub advance_in_secs: Option<u32>,
    pub admin: AdminState,
}

impl QuizSnapshot<'_> {
    /// Words in the current answer (0 when complete).
    pub fn word_count(&self) -> usize {
        self.level.map(Level::word_count).unwrap_or(0)
    }

    /// Content clues revealed so far for the current level.
    pub fn visible_content_hints(&self) -> &[String] {
        match self.level {
            Some(level) => {
                let n = self.content_hints_revealed.min(level.content_hints.len());
                &level.content_hints[..n]
            }
            None => &[],
        }
    }

    /// Wrong attempts still available on this level.
    pub fn attempts_left(&self) -> u32 {
        self.max_wrong_attempts.saturating_sub(self.wrong_attempts)
    }

    /// Whether the host's judging controls are live.
    pub fn accepts_answers(&self) -> bool {
        self.screen == Screen::Playing && self.reveal_outcome.is_none()
    }
}
