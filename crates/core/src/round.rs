//! Round state - the level/score/hint progression of one game session.
//!
//! Every transition is a silent no-op outside its precondition and reports
//! whether it changed anything. Loss detection is not done here; see
//! [`RoundState::loss_reason`] and the controller that acts on it.

use crate::catalog::Level;
use crate::types::{LossReason, CORRECT_ANSWER_POINTS};

/// Mutable state of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundState {
    /// Index into the catalog. Equal to `level_count` once every level was played.
    current_level: usize,
    level_count: usize,
    score: u32,
    is_answer_revealed: bool,
    wrong_attempts: u32,
    max_wrong_attempts: u32,
    hints_revealed: usize,
    content_hints_revealed: usize,
}

impl RoundState {
    /// Fresh session over a catalog of `level_count` levels.
    pub fn new(level_count: usize, max_wrong_attempts: u32) -> Self {
        Self {
            current_level: 0,
            level_count,
            score: 0,
            is_answer_revealed: false,
            wrong_attempts: 0,
            max_wrong_attempts,
            hints_revealed: 0,
            content_hints_revealed: 0,
        }
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_answer_revealed(&self) -> bool {
        self.is_answer_revealed
    }

    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    pub fn max_wrong_attempts(&self) -> u32 {
        self.max_wrong_attempts
    }

    pub fn hints_revealed(&self) -> usize {
        self.hints_revealed
    }

    pub fn content_hints_revealed(&self) -> usize {
        self.content_hints_revealed
    }

    /// True once the level index has run past the last level.
    pub fn is_complete(&self) -> bool {
        self.current_level >= self.level_count
    }

    /// Host marked the answer correct: reveal it and award points.
    pub fn mark_correct(&mut self) -> bool {
        if self.is_complete() || self.is_answer_revealed {
            return false;
        }
        self.is_answer_revealed = true;
        self.score += CORRECT_ANSWER_POINTS;
        true
    }

    /// Host marked the answer wrong.
    pub fn mark_wrong(&mut self) -> bool {
        if self.is_complete()
            || self.is_answer_revealed
            || self.wrong_attempts >= self.max_wrong_attempts
        {
            return false;
        }
        self.wrong_attempts += 1;
        true
    }

    /// Reveal the answer without awarding points (loss path).
    pub fn reveal_without_score(&mut self) -> bool {
        if self.is_complete() || self.is_answer_revealed {
            return false;
        }
        self.is_answer_revealed = true;
        true
    }

    /// Reveal one more word of `level`'s answer.
    pub fn reveal_hint(&mut self, level: &Level) -> bool {
        if self.is_complete() || self.hints_revealed >= level.word_count() {
            return false;
        }
        self.hints_revealed += 1;
        true
    }

    /// Reveal one more of `level`'s content clues.
    pub fn reveal_content_hint(&mut self, level: &Level) -> bool {
        if self.is_complete() || self.content_hints_revealed >= level.content_hints.len() {
            return false;
        }
        self.content_hints_revealed += 1;
        true
    }

    pub fn next_level(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.current_level += 1;
        self.reset_round();
        true
    }

    pub fn previous_level(&mut self) -> bool {
        if self.is_complete() || self.current_level == 0 {
            return false;
        }
        self.current_level -= 1;
        self.reset_round();
        true
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn jump_to_level(&mut self, index: usize) -> bool {
        if self.is_complete() || index >= self.level_count {
            return false;
        }
        self.current_level = index;
        self.reset_round();
        true
    }

    /// Hide the revealed answer without leaving the level.
    pub fn close_answer_reveal(&mut self) -> bool {
        if self.is_complete() || !self.is_answer_revealed {
            return false;
        }
        self.is_answer_revealed = false;
        true
    }

    pub fn reset_score(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.score = 0;
        true
    }

    /// Back to level 0 with a zero score. The attempt limit is kept.
    pub fn reset_game(&mut self) {
        *self = Self::new(self.level_count, self.max_wrong_attempts);
    }

    /// Loss condition for `level`, if one holds and the round is still open.
    ///
    /// Hint exhaustion takes precedence over running out of attempts.
    pub fn loss_reason(&self, level: &Level) -> Option<LossReason> {
        if self.is_complete() || self.is_answer_revealed {
            return None;
        }
        if self.hints_revealed > 0 && self.hints_revealed >= level.word_count() {
            Some(LossReason::HintsExhausted)
        } else if self.wrong_attempts >= self.max_wrong_attempts {
            Some(LossReason::OutOfAttempts)
        } else {
            None
        }
    }

    fn reset_round(&mut self) {
        self.is_answer_revealed = false;
        self.wrong_attempts = 0;
        self.hints_revealed = 0;
        self.content_hints_revealed = 0;
    }
}
