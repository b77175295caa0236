//! Terminal presentation for the picture quiz.
//!
//! Rendering is split in two: [`QuizView`] turns a snapshot into a
//! framebuffer without touching the terminal, and [`TerminalRenderer`]
//! flushes framebuffers to the terminal, writing only what changed.
//! [`RenderThrottle`] decides when a new frame is worth drawing at all.

pub mod fb;
pub mod quiz_view;
pub mod render_throttle;
pub mod renderer;

pub use picture_quiz_core as core;
pub use picture_quiz_types as types;

pub use fb::{text_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{QuizView, Viewport};
pub use render_throttle::{fingerprint, RenderThrottle, DEFAULT_KEEPALIVE_MS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
