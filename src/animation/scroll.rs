//! Throttled wheel-input state machine.
//!
//! Holds the only mutable input state of the scene: which of the scroll
//! positions is current, and when the last wheel event was accepted.
//! Events arriving inside the throttle window are dropped, never queued.

use web_time::Duration;

/// Wheel direction derived from the vertical delta.
///
/// Reported with every accepted event but never changes behavior: every
/// accepted event advances to the next position regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel moved toward the user (negative or zero delta).
    Up,
    /// Wheel moved away from the user (positive delta).
    Down,
}

impl ScrollDirection {
    /// Classify a vertical wheel delta.
    #[must_use]
    pub fn from_delta(delta_y: f32) -> Self {
        if delta_y > 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Result of feeding one wheel event to a [`ScrollController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The event arrived inside the throttle window and was dropped.
    Throttled,
    /// The event advanced the scroll position.
    Accepted {
        /// New position in `0..positions`.
        position: usize,
        /// Whether the position wrapped back to 0.
        wrapped: bool,
        /// Direction of the wheel delta.
        direction: ScrollDirection,
    },
}

/// Counter over `positions` slots guarded by a throttle window.
#[derive(Debug, Clone)]
pub struct ScrollController {
    positions: usize,
    throttle: Duration,
    position: usize,
    last_accepted: Option<Duration>,
}

impl ScrollController {
    /// Controller at position 0 that has not accepted any event yet.
    #[must_use]
    pub fn new(positions: usize, throttle: Duration) -> Self {
        Self {
            positions: positions.max(1),
            throttle,
            position: 0,
            last_accepted: None,
        }
    }

    /// Feed a wheel event with vertical delta `delta_y` observed at `now`.
    pub fn on_wheel(&mut self, delta_y: f32, now: Duration) -> ScrollOutcome {
        if let Some(last) = self.last_accepted {
            if now.saturating_sub(last) < self.throttle {
                return ScrollOutcome::Throttled;
            }
        }
        self.last_accepted = Some(now);
        self.position = (self.position + 1) % self.positions;
        ScrollOutcome::Accepted {
            position: self.position,
            wrapped: self.position == 0,
            direction: ScrollDirection::from_delta(delta_y),
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of positions before wrapping.
    #[must_use]
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Time of the last accepted event.
    #[must_use]
    pub fn last_accepted(&self) -> Option<Duration> {
        self.last_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn controller() -> ScrollController {
        ScrollController::new(4, ms(2000))
    }

    #[test]
    fn first_event_is_accepted_even_at_time_zero() {
        let mut c = controller();
        assert_eq!(
            c.on_wheel(1.0, Duration::ZERO),
            ScrollOutcome::Accepted {
                position: 1,
                wrapped: false,
                direction: ScrollDirection::Down,
            }
        );
        assert_eq!(c.last_accepted(), Some(Duration::ZERO));
    }

    #[test]
    fn events_inside_window_leave_state_untouched() {
        let mut c = controller();
        let _ = c.on_wheel(1.0, ms(100));
        let (pos, last) = (c.position(), c.last_accepted());

        for t in [100, 101, 600, 1999, 2099] {
            assert_eq!(c.on_wheel(-1.0, ms(t)), ScrollOutcome::Throttled);
            assert_eq!(c.position(), pos);
            assert_eq!(c.last_accepted(), last);
        }
    }

    #[test]
    fn window_boundary_is_inclusive_of_throttle() {
        let mut c = controller();
        let _ = c.on_wheel(1.0, ms(0));
        assert!(matches!(c.on_wheel(1.0, ms(2000)), ScrollOutcome::Accepted { .. }));
    }

    #[test]
    fn dropped_events_do_not_extend_the_window() {
        let mut c = controller();
        let _ = c.on_wheel(1.0, ms(0));
        assert_eq!(c.on_wheel(1.0, ms(1500)), ScrollOutcome::Throttled);
        assert!(matches!(c.on_wheel(1.0, ms(2100)), ScrollOutcome::Accepted { .. }));
    }

    #[test]
    fn positions_wrap_after_four_accepted_events() {
        let mut c = controller();
        let mut seen = Vec::new();
        for i in 0..9 {
            if let ScrollOutcome::Accepted {
                position, wrapped, ..
            } = c.on_wheel(1.0, ms(i * 2000))
            {
                assert_eq!(wrapped, position == 0);
                seen.push(position);
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn direction_is_reported_not_acted_on() {
        let mut up = controller();
        let mut down = controller();
        let a = up.on_wheel(-3.0, ms(0));
        let b = down.on_wheel(3.0, ms(0));
        assert!(matches!(a, ScrollOutcome::Accepted { direction: ScrollDirection::Up, .. }));
        assert!(matches!(b, ScrollOutcome::Accepted { direction: ScrollDirection::Down, .. }));
        assert_eq!(up.position(), down.position());
        assert_eq!(ScrollDirection::from_delta(0.0), ScrollDirection::Up);
    }

    #[test]
    fn clock_going_backwards_is_throttled() {
        let mut c = controller();
        let _ = c.on_wheel(1.0, ms(5000));
        assert_eq!(c.on_wheel(1.0, ms(1000)), ScrollOutcome::Throttled);
    }
}
