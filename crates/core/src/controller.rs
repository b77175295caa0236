//! Game controller - the single owner of all session state.
//!
//! Host actions and scheduler ticks are the only way in. After every change
//! the controller re-checks the loss conditions of the current level and
//! schedules the follow-up transitions (auto-advance, end of shake).
//!
//! A level is *decided* once its answer is revealed, won or lost. A decided
//! level ignores further judging and hint actions, even after the host closes
//! the reveal; it only changes through navigation or a reset.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::admin::AdminState;
use crate::catalog::{Level, LevelCatalog};
use crate::config::QuizConfig;
use crate::round::RoundState;
use crate::scheduler::{ScheduledTask, Scheduler};
use crate::snapshot::QuizSnapshot;
use crate::types::{AudioCue, HostAction, LossReason, RevealOutcome, Screen};

/// Maximum cues buffered between drains; extra cues are dropped.
pub const MAX_PENDING_CUES: usize = 8;

#[derive(Debug, Clone)]
pub struct GameController {
    catalog: LevelCatalog,
    config: QuizConfig,
    round: RoundState,
    admin: AdminState,
    scheduler: Scheduler,
    screen: Screen,
    reveal_outcome: Option<RevealOutcome>,
    loss_banner: Option<LossReason>,
    shaking: bool,
    cues: ArrayVec<AudioCue, MAX_PENDING_CUES>,
}

impl GameController {
    pub fn new(catalog: LevelCatalog, config: QuizConfig) -> Self {
        let round = RoundState::new(catalog.len(), config.max_wrong_attempts);
        Self {
            catalog,
            config,
            round,
            admin: AdminState::new(),
            scheduler: Scheduler::new(),
            screen: Screen::Home,
            reveal_outcome: None,
            loss_banner: None,
            shaking: false,
            cues: ArrayVec::new(),
        }
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn admin(&self) -> &AdminState {
        &self.admin
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Level currently being played (`None` once complete).
    pub fn current_level(&self) -> Option<&Level> {
        self.catalog.get(self.round.current_level())
    }

    pub fn reveal_outcome(&self) -> Option<RevealOutcome> {
        self.reveal_outcome
    }

    pub fn loss_banner(&self) -> Option<LossReason> {
        self.loss_banner
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn is_advance_pending(&self) -> bool {
        self.scheduler.is_pending(ScheduledTask::AdvanceLevel)
    }

    pub fn snapshot(&self) -> QuizSnapshot<'_> {
        QuizSnapshot {
            screen: self.screen,
            level_index: self.round.current_level(),
            level_count: self.catalog.len(),
            level: self.current_level(),
            score: self.round.score(),
            is_answer_revealed: self.round.is_answer_revealed(),
            wrong_attempts: self.round.wrong_attempts(),
            max_wrong_attempts: self.round.max_wrong_attempts(),
            hints_revealed: self.round.hints_revealed(),
            content_hints_revealed: self.round.content_hints_revealed(),
            reveal_outcome: self.reveal_outcome,
            loss_banner: self.loss_banner,
            shaking: self.shaking,
            advance_in_secs: self
                .scheduler
                .remaining_ms(ScheduledTask::AdvanceLevel)
                .map(|ms| ms.div_ceil(1000) as u32),
            admin: self.admin,
        }
    }

    /// Take the audio cues emitted since the last call.
    pub fn take_cues(&mut self) -> ArrayVec<AudioCue, MAX_PENDING_CUES> {
        std::mem::take(&mut self.cues)
    }

    /// Apply a host action. Returns true if anything changed.
    pub fn apply(&mut self, action: HostAction) -> bool {
        if action.is_admin_only() && !self.admin.is_enabled() {
            debug!(action = action.as_str(), "admin action ignored, admin disabled");
            return false;
        }

        let changed = match action {
            HostAction::StartGame => self.start_game(),
            HostAction::ReturnHome => self.return_home(),
            HostAction::ResetGame => self.reset_game(),
            HostAction::ToggleAdmin => {
                self.admin.toggle_admin();
                true
            }
            HostAction::ToggleShowAnswers => {
                self.admin.toggle_show_answers();
                true
            }
            _ if self.screen != Screen::Playing => false,
            HostAction::Correct => self.mark_correct(),
            HostAction::Wrong => self.mark_wrong(),
            HostAction::Hint => self.reveal_hint(),
            HostAction::ContentHint => self.reveal_content_hint(),
            HostAction::NextLevel => self.navigate(RoundState::next_level),
            HostAction::PreviousLevel => self.navigate(RoundState::previous_level),
            HostAction::JumpToLevel(index) => self.navigate(|round| round.jump_to_level(index)),
            HostAction::CloseReveal => self.close_reveal(),
            HostAction::ResetScore => self.round.reset_score(),
        };

        if changed {
            info!(
                action = action.as_str(),
                level = self.round.current_level() + 1,
                score = self.round.score(),
                "host action"
            );
            self.check_loss();
        } else {
            debug!(action = action.as_str(), "host action ignored");
        }
        changed
    }

    /// Advance game time by `elapsed_ms`, running any scheduled transitions that came due.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let due = self.scheduler.tick(elapsed_ms);
        let mut changed = false;
        for task in due {
            debug!(task = task.as_str(), "scheduled task fired");
            changed |= match task {
                ScheduledTask::AdvanceLevel => self.advance_level(),
                ScheduledTask::ClearShake => std::mem::replace(&mut self.shaking, false),
            };
        }
        if changed {
            self.check_loss();
        }
        changed
    }

    fn start_game(&mut self) -> bool {
        if self.screen != Screen::Home {
            return false;
        }
        self.screen = Screen::Playing;
        true
    }

    fn return_home(&mut self) -> bool {
        self.reset_session();
        self.screen = Screen::Home;
        true
    }

    fn reset_game(&mut self) -> bool {
        self.reset_session();
        if self.screen == Screen::Finished {
            self.screen = Screen::Playing;
        }
        true
    }

    fn reset_session(&mut self) {
        self.scheduler.cancel_all();
        self.round.reset_game();
        self.clear_level_flags();
    }

    fn mark_correct(&mut self) -> bool {
        if self.reveal_outcome.is_some() || !self.round.mark_correct() {
            return false;
        }
        self.reveal_outcome = Some(RevealOutcome::Won);
        self.emit(AudioCue::Correct);
        self.scheduler
            .schedule(ScheduledTask::AdvanceLevel, self.config.auto_advance_ms);
        true
    }

    fn mark_wrong(&mut self) -> bool {
        if self.reveal_outcome.is_some() || !self.round.mark_wrong() {
            return false;
        }
        self.emit(AudioCue::Wrong);
        self.shaking = true;
        self.scheduler
            .schedule(ScheduledTask::ClearShake, self.config.shake_ms);
        true
    }

    fn reveal_hint(&mut self) -> bool {
        if self.reveal_outcome.is_some() {
            return false;
        }
        match self.catalog.get(self.round.current_level()) {
            Some(level) => self.round.reveal_hint(level),
            None => false,
        }
    }

    fn reveal_content_hint(&mut self) -> bool {
        if self.reveal_outcome.is_some() {
            return false;
        }
        match self.catalog.get(self.round.current_level()) {
            Some(level) => self.round.reveal_content_hint(level),
            None => false,
        }
    }

    /// Manual level change: any pending auto-advance is dropped first.
    fn navigate(&mut self, step: impl FnOnce(&mut RoundState) -> bool) -> bool {
        if !step(&mut self.round) {
            return false;
        }
        self.scheduler.cancel_task(ScheduledTask::AdvanceLevel);
        self.enter_level();
        true
    }

    fn close_reveal(&mut self) -> bool {
        if !self.round.close_answer_reveal() {
            return false;
        }
        self.scheduler.cancel_task(ScheduledTask::AdvanceLevel);
        self.loss_banner = None;
        true
    }

    fn advance_level(&mut self) -> bool {
        if !self.round.next_level() {
            return false;
        }
        self.enter_level();
        true
    }

    fn enter_level(&mut self) {
        self.clear_level_flags();
        if self.round.is_complete() {
            info!(score = self.round.score(), "game complete");
            self.scheduler.cancel_all();
            self.screen = Screen::Finished;
            self.emit(AudioCue::LevelComplete);
        }
    }

    fn clear_level_flags(&mut self) {
        self.reveal_outcome = None;
        self.loss_banner = None;
        self.shaking = false;
        self.scheduler.cancel_task(ScheduledTask::ClearShake);
    }

    /// Force the loss path if the current level just became unwinnable.
    fn check_loss(&mut self) {
        if self.screen != Screen::Playing || self.reveal_outcome.is_some() {
            return;
        }
        let Some(level) = self.catalog.get(self.round.current_level()) else {
            return;
        };
        let Some(reason) = self.round.loss_reason(level) else {
            return;
        };

        info!(
            reason = reason.as_str(),
            level = self.round.current_level() + 1,
            "level lost"
        );
        self.round.reveal_without_score();
        self.reveal_outcome = Some(RevealOutcome::Lost(reason));
        self.loss_banner = Some(reason);

        let delay_ms = match reason {
            LossReason::HintsExhausted => {
                self.emit(AudioCue::OutOfHints);
                self.config.loss_advance_ms
            }
            LossReason::OutOfAttempts => {
                self.emit(AudioCue::Wrong);
                self.config.auto_advance_ms
            }
        };
        self.scheduler.schedule(ScheduledTask::AdvanceLevel, delay_ms);
    }

    fn emit(&mut self, cue: AudioCue) {
        if self.cues.try_push(cue).is_err() {
            debug!(cue = cue.as_str(), "audio cue dropped, queue full");
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(LevelCatalog::builtin(), QuizConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TICK_MS;

    fn playing() -> GameController {
        let mut game = GameController::default();
        assert!(game.apply(HostAction::StartGame));
        game
    }

    fn run_for(game: &mut GameController, ms: u32) {
        let mut left = ms;
        while left > 0 {
            let step = left.min(TICK_MS);
            game.tick(step);
            left -= step;
        }
    }

    #[test]
    fn test_starts_on_home_screen() {
        let mut game = GameController::default();
        assert_eq!(game.screen(), Screen::Home);
        assert!(!game.apply(HostAction::Correct));
        assert_eq!(game.round().score(), 0);
    }

    #[test]
    fn test_correct_reveals_and_auto_advances() {
        let mut game = playing();
        assert!(game.apply(HostAction::Correct));
        assert!(game.round().is_answer_revealed());
        assert_eq!(game.round().score(), 10);
        assert_eq!(game.reveal_outcome(), Some(RevealOutcome::Won));
        assert_eq!(game.take_cues().as_slice(), &[AudioCue::Correct]);

        run_for(&mut game, 1984);
        assert_eq!(game.round().current_level(), 0);
        run_for(&mut game, 16);
        assert_eq!(game.round().current_level(), 1);
        assert!(!game.round().is_answer_revealed());
        assert_eq!(game.reveal_outcome(), None);
    }

    #[test]
    fn test_wrong_shakes_then_settles() {
        let mut game = playing();
        assert!(game.apply(HostAction::Wrong));
        assert!(game.is_shaking());
        assert_eq!(game.round().wrong_attempts(), 1);
        run_for(&mut game, 500);
        assert!(!game.is_shaking());
    }

    #[test]
    fn test_three_wrong_answers_force_reveal_without_score() {
        let mut game = playing();
        game.apply(HostAction::Wrong);
        game.apply(HostAction::Wrong);
        assert!(!game.round().is_answer_revealed());
        game.apply(HostAction::Wrong);

        assert!(game.round().is_answer_revealed());
        assert_eq!(game.round().score(), 0);
        assert_eq!(
            game.reveal_outcome(),
            Some(RevealOutcome::Lost(LossReason::OutOfAttempts))
        );
        assert!(game.is_advance_pending());

        run_for(&mut game, 2000);
        assert_eq!(game.round().current_level(), 1);
        assert_eq!(game.round().wrong_attempts(), 0);
    }

    #[test]
    fn test_hint_exhaustion_is_a_loss() {
        let mut game = playing();
        // "Việt Nam" has two words.
        assert!(game.apply(HostAction::Hint));
        assert!(!game.round().is_answer_revealed());
        assert!(game.apply(HostAction::Hint));

        assert!(game.round().is_answer_revealed());
        assert_eq!(game.loss_banner(), Some(LossReason::HintsExhausted));
        assert_eq!(game.round().score(), 0);
        assert!(game.take_cues().contains(&AudioCue::OutOfHints));

        run_for(&mut game, 2496);
        assert_eq!(game.round().current_level(), 0);
        run_for(&mut game, 4);
        assert_eq!(game.round().current_level(), 1);
        assert_eq!(game.loss_banner(), None);
    }

    #[test]
    fn test_manual_next_cancels_pending_advance() {
        let mut game = playing();
        game.apply(HostAction::Correct);
        assert!(game.apply(HostAction::NextLevel));
        assert_eq!(game.round().current_level(), 1);
        assert!(!game.is_advance_pending());

        run_for(&mut game, 5000);
        assert_eq!(game.round().current_level(), 1);
    }

    #[test]
    fn test_close_reveal_keeps_level_decided() {
        let mut game = playing();
        game.apply(HostAction::Correct);
        assert!(game.apply(HostAction::CloseReveal));
        assert!(!game.round().is_answer_revealed());
        assert!(!game.is_advance_pending());

        // No double scoring and no auto-advance after the host dismissed the reveal.
        assert!(!game.apply(HostAction::Correct));
        run_for(&mut game, 5000);
        assert_eq!(game.round().current_level(), 0);
        assert_eq!(game.round().score(), 10);
    }

    #[test]
    fn test_close_after_loss_does_not_refire() {
        let mut game = playing();
        game.apply(HostAction::Hint);
        game.apply(HostAction::Hint);
        game.take_cues();
        assert!(game.apply(HostAction::CloseReveal));
        assert!(!game.round().is_answer_revealed());
        assert_eq!(game.loss_banner(), None);
        assert!(game.take_cues().is_empty());
        assert!(!game.is_advance_pending());
    }

    #[test]
    fn test_admin_actions_require_admin() {
        let mut game = playing();
        assert!(!game.apply(HostAction::JumpToLevel(2)));
        assert!(!game.apply(HostAction::ToggleShowAnswers));

        assert!(game.apply(HostAction::ToggleAdmin));
        assert!(game.apply(HostAction::JumpToLevel(2)));
        assert_eq!(game.round().current_level(), 2);
        assert!(!game.apply(HostAction::JumpToLevel(9)));
        assert!(game.apply(HostAction::ToggleShowAnswers));
        assert!(game.admin().show_answers());
    }

    #[test]
    fn test_reset_score_keeps_level() {
        let mut game = playing();
        game.apply(HostAction::ToggleAdmin);
        game.apply(HostAction::Correct);
        game.apply(HostAction::NextLevel);
        assert!(game.apply(HostAction::ResetScore));
        assert_eq!(game.round().score(), 0);
        assert_eq!(game.round().current_level(), 1);
    }

    #[test]
    fn test_completing_catalog_finishes_game() {
        let mut game = playing();
        for _ in 0..4 {
            game.apply(HostAction::Correct);
            run_for(&mut game, 2000);
        }
        assert_eq!(game.round().current_level(), 4);
        assert!(game.round().is_complete());
        assert_eq!(game.screen(), Screen::Finished);
        assert_eq!(game.round().score(), 40);
        assert!(game.take_cues().contains(&AudioCue::LevelComplete));

        assert!(!game.apply(HostAction::Correct));
        assert!(!game.apply(HostAction::PreviousLevel));
        assert!(!game.apply(HostAction::Hint));
        assert_eq!(game.round().score(), 40);
    }

    #[test]
    fn test_reset_game_after_finish() {
        let mut game = playing();
        for _ in 0..4 {
            game.apply(HostAction::NextLevel);
        }
        assert_eq!(game.screen(), Screen::Finished);

        assert!(game.apply(HostAction::ResetGame));
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.round().current_level(), 0);
        assert_eq!(game.round().score(), 0);
    }

    #[test]
    fn test_return_home_resets_session() {
        let mut game = playing();
        game.apply(HostAction::Correct);
        assert!(game.apply(HostAction::ReturnHome));
        assert_eq!(game.screen(), Screen::Home);
        assert_eq!(game.round().score(), 0);
        assert!(!game.is_advance_pending());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = playing();
        game.apply(HostAction::Hint);
        game.apply(HostAction::ContentHint);
        game.apply(HostAction::Wrong);

        let snap = game.snapshot();
        assert_eq!(snap.screen, Screen::Playing);
        assert_eq!(snap.level_index, 0);
        assert_eq!(snap.level_count, 4);
        assert_eq!(snap.hints_revealed, 1);
        assert_eq!(snap.word_count(), 2);
        assert_eq!(snap.visible_content_hints().len(), 1);
        assert_eq!(snap.attempts_left(), 2);
        assert!(snap.shaking);
        assert!(snap.accepts_answers());
    }

    #[test]
    fn test_seven_attempt_variant() {
        let config = QuizConfig {
            max_wrong_attempts: 7,
            ..QuizConfig::default()
        };
        let mut game = GameController::new(LevelCatalog::builtin(), config);
        game.apply(HostAction::StartGame);
        for _ in 0..6 {
            game.apply(HostAction::Wrong);
        }
        assert!(!game.round().is_answer_revealed());
        game.apply(HostAction::Wrong);
        assert!(game.round().is_answer_revealed());
    }
}
