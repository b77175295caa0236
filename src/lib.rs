//! Picture quiz (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single import path:
//! `picture_quiz::{core, input, term, types}`.

pub mod logging;

pub use picture_quiz_core as core;
pub use picture_quiz_input as input;
pub use picture_quiz_term as term;
pub use picture_quiz_types as types;
