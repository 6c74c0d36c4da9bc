//! Wheel input.

use web_time::Duration;

use super::PlanetsEngine;
use crate::animation::ScrollOutcome;

/// Pixels per line for line-based wheel deltas.
pub const LINE_HEIGHT_PX: f32 = 40.0;

/// A vertical wheel delta in browser convention: positive scrolls down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// Whole lines (mouse wheels on most desktop platforms).
    Lines(f32),
    /// Pixels (touchpads, browsers).
    Pixels(f32),
}

impl WheelDelta {
    /// The delta in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        match self {
            Self::Lines(lines) => lines * LINE_HEIGHT_PX,
            Self::Pixels(px) => px,
        }
    }
}

impl PlanetsEngine {
    /// Handle a wheel event at `now` (on the [`elapsed`](Self::elapsed)
    /// clock). Throttled events change nothing.
    pub fn handle_wheel(&mut self, delta: WheelDelta, now: Duration) -> ScrollOutcome {
        self.choreographer.on_wheel(delta.pixels(), now)
    }

    /// Current scroll position (section index).
    #[must_use]
    pub fn position(&self) -> usize {
        self.choreographer.position()
    }

    /// Number of scroll positions.
    #[must_use]
    pub fn positions(&self) -> usize {
        self.choreographer.positions()
    }
}
