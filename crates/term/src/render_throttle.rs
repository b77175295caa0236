//! Skip redraws when nothing on screen changed.
//!
//! The quiz screen is static most of the time, so a frame is only rendered
//! when the snapshot fingerprint changes, plus a slow keep-alive redraw that
//! repairs any terminal damage.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Default keep-alive interval between unchanged redraws.
pub const DEFAULT_KEEPALIVE_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    keepalive_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    dirty: bool,
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_KEEPALIVE_MS)
    }
}

impl RenderThrottle {
    pub fn new(keepalive_ms: u64) -> Self {
        Self {
            keepalive_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            dirty: true,
        }
    }

    /// Force the next call to render (first frame, resize).
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders immediately when invalidated or when `fingerprint` changed,
    /// otherwise at most once per keep-alive interval.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = self.dirty
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.keepalive_ms;
        if due {
            self.dirty = false;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}

/// Hash anything on screen into a frame fingerprint.
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
