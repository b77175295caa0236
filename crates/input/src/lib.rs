//! Terminal input module (controller-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key events
//! into [`crate::types::HostAction`]s, taking the current screen and the admin
//! toggle into account.

pub mod map;

pub use picture_quiz_types as types;

pub use map::{handle_key_event, is_admin_chord, should_quit, KeyContext};
