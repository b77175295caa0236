//! Core quiz logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the picture quiz: the level catalog, the
//! round state machine, the admin toggles, the progressive hint formatter and
//! the controller that ties them together. It has **no dependencies** on the
//! terminal, so every rule can be exercised headless:
//!
//! - **Deterministic**: time only moves through [`GameController::tick`]
//! - **Permissive**: actions outside their precondition are silent no-ops
//! - **Single owner**: one controller owns all session state
//!
//! # Module Structure
//!
//! - [`catalog`]: level records and the built-in catalog
//! - [`hint`]: word splitting and progressive hints
//! - [`round`]: level index, score, reveal flag and per-level counters
//! - [`admin`]: admin panel and answer-peek toggles
//! - [`scheduler`]: cancellable one-shot delayed tasks
//! - [`controller`]: host actions, loss detection, auto-advance
//! - [`snapshot`]: read-only view for the presentation layer
//! - [`config`]: environment configuration
//!
//! # Game Rules
//!
//! - **Correct**: reveals the answer, +10 points, next level after 2000ms
//! - **Wrong**: counts an attempt; reaching the limit (3 by default) loses the level
//! - **Hint**: reveals one more word; giving away every word loses the level
//! - **Loss**: answer revealed without points, next level after a delay
//! - **Completion**: after the last level the game shows the final score
//!
//! # Example
//!
//! ```
//! use picture_quiz_core::GameController;
//! use picture_quiz_types::{HostAction, Screen};
//!
//! let mut game = GameController::default();
//! game.apply(HostAction::StartGame);
//!
//! game.apply(HostAction::Hint);
//! game.apply(HostAction::Correct);
//! assert_eq!(game.round().score(), 10);
//!
//! // The answer stays on screen for two seconds.
//! game.tick(2000);
//! assert_eq!(game.round().current_level(), 1);
//! assert_eq!(game.screen(), Screen::Playing);
//! ```

pub mod admin;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod hint;
pub mod round;
pub mod scheduler;
pub mod snapshot;

pub use picture_quiz_types as types;

pub use admin::AdminState;
pub use catalog::{CatalogError, Level, LevelCatalog};
pub use config::QuizConfig;
pub use controller::GameController;
pub use hint::{progressive_hint, progressive_hint_into, split_words, word_count};
pub use round::RoundState;
pub use scheduler::{ScheduledTask, Scheduler, TaskHandle};
pub use snapshot::QuizSnapshot;
