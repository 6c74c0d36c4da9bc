//! Scroll-driven choreography: turns accepted wheel events into tweens.
//!
//! Every accepted event starts two concurrent tweens: the headings shift up
//! by one section height and the orbiting group turns one slot (a quarter
//! turn for four bodies). When the scroll position wraps back to the first
//! section a third tween returns the headings to their resting offset.

use std::f32::consts::TAU;

use web_time::Duration;

use super::scroll::{ScrollController, ScrollOutcome};
use super::tween::{AnimatedValues, TweenEngine, TweenProperty, TweenTarget};
use crate::options::ScrollOptions;
use crate::scene::BODY_COUNT;
use crate::util::easing::EasingFunction;

/// Owns the scroll state, the tween engine and the animated values.
#[derive(Debug)]
pub struct Choreographer {
    scroll: ScrollController,
    tweens: TweenEngine,
    values: AnimatedValues,
    duration: Duration,
    easing: EasingFunction,
    heading_shift: f32,
    yaw_step: f32,
}

impl Choreographer {
    /// Build from scroll options, with one scroll position per orbiting body.
    #[must_use]
    pub fn new(options: &ScrollOptions) -> Self {
        Self {
            scroll: ScrollController::new(BODY_COUNT, Duration::from_millis(options.throttle_ms)),
            tweens: TweenEngine::new(),
            values: AnimatedValues::default(),
            duration: tween_duration(options.tween_duration_secs),
            easing: options.easing,
            heading_shift: options.heading_shift_percent,
            yaw_step: TAU / BODY_COUNT as f32,
        }
    }

    /// Handle a wheel event at `now`, starting tweens if it is accepted.
    pub fn on_wheel(&mut self, delta_y: f32, now: Duration) -> ScrollOutcome {
        let outcome = self.scroll.on_wheel(delta_y, now);
        match outcome {
            ScrollOutcome::Throttled => {
                log::debug!("wheel event at {:?} throttled", now);
            }
            ScrollOutcome::Accepted {
                position,
                wrapped,
                direction,
            } => {
                log::debug!("scroll {direction:?} -> section {position} (wrapped: {wrapped})");
                // Relative targets resolve against the value on screen now.
                let _ = self.tweens.advance(now, &mut self.values);
                self.start(TweenProperty::HeadingOffset, TweenTarget::By(-self.heading_shift), now);
                self.start(TweenProperty::GroupYaw, TweenTarget::By(-self.yaw_step), now);
                if wrapped {
                    self.start(TweenProperty::HeadingOffset, TweenTarget::To(0.0), now);
                }
            }
        }
        outcome
    }

    fn start(&mut self, property: TweenProperty, target: TweenTarget, now: Duration) {
        self.tweens
            .start(&self.values, property, target, now, self.duration, self.easing);
    }

    /// Advance all tweens to `now` and return the resulting values.
    pub fn advance(&mut self, now: Duration) -> AnimatedValues {
        let _ = self.tweens.advance(now, &mut self.values);
        self.values
    }

    /// Current animated values without advancing.
    #[must_use]
    pub fn values(&self) -> AnimatedValues {
        self.values
    }

    /// Current scroll position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.scroll.position()
    }

    /// Number of scroll positions.
    #[must_use]
    pub fn positions(&self) -> usize {
        self.scroll.positions()
    }

    /// Whether any tween is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_idle()
    }

    /// Running tweens, in creation order.
    #[must_use]
    pub fn tweens(&self) -> &TweenEngine {
        &self.tweens
    }
}

/// Tween length for `secs`. Negative values collapse to zero; NaN and values
/// too large for a [`Duration`] fall back to the default length.
fn tween_duration(secs: f32) -> Duration {
    match Duration::try_from_secs_f32(secs) {
        Ok(duration) => duration,
        Err(_) if secs < 0.0 => Duration::ZERO,
        Err(_) => {
            let fallback = ScrollOptions::default().tween_duration_secs;
            log::warn!("tween duration {secs}s out of range, using {fallback}s");
            Duration::from_secs_f32(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn choreographer() -> Choreographer {
        Choreographer::new(&ScrollOptions::default())
    }

    #[test]
    fn accepted_event_starts_heading_and_yaw_tweens() {
        let mut c = choreographer();
        let _ = c.on_wheel(1.0, ms(0));
        let tweens = c.tweens().active();
        assert_eq!(tweens.len(), 2);
        assert_eq!(tweens[0].property, TweenProperty::HeadingOffset);
        assert_eq!(tweens[0].to, -100.0);
        assert_eq!(tweens[1].property, TweenProperty::GroupYaw);
        assert!((tweens[1].to + FRAC_PI_2).abs() < 1e-6);
        assert!(tweens.iter().all(|t| t.duration == ms(1000)));
    }

    #[test]
    fn end_to_end_scroll_scenario() {
        let mut c = choreographer();

        assert!(matches!(c.on_wheel(1.0, ms(0)), ScrollOutcome::Accepted { position: 1, .. }));
        assert_eq!(c.on_wheel(1.0, ms(500)), ScrollOutcome::Throttled);
        assert_eq!(c.position(), 1);

        let halfway = c.advance(ms(500));
        assert!((halfway.heading_offset + 50.0).abs() < 1e-3);
        assert!((halfway.group_yaw + FRAC_PI_2 / 2.0).abs() < 1e-4);

        let settled = c.advance(ms(1000));
        assert_eq!(settled.heading_offset, -100.0);
        assert!((settled.group_yaw + FRAC_PI_2).abs() < 1e-6);
        assert!(!c.is_animating());

        assert!(matches!(c.on_wheel(1.0, ms(2100)), ScrollOutcome::Accepted { position: 2, .. }));
        let v = c.advance(ms(3100));
        assert_eq!(v.heading_offset, -200.0);
        assert!((v.group_yaw + 2.0 * FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn reset_tween_fires_only_on_wrap() {
        let mut c = choreographer();
        for i in 0..4u64 {
            let outcome = c.on_wheel(1.0, ms(i * 3000));
            let ScrollOutcome::Accepted { wrapped, .. } = outcome else {
                panic!("expected accepted event");
            };
            let expected = if wrapped { 3 } else { 2 };
            assert_eq!(c.tweens().active().len(), expected, "event {i}");
            let _ = c.advance(ms(i * 3000 + 1000));
        }
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn wrap_returns_headings_to_rest_and_keeps_turning() {
        let mut c = choreographer();
        for i in 0..4u64 {
            let _ = c.on_wheel(-1.0, ms(i * 3000));
            let _ = c.advance(ms(i * 3000 + 1000));
        }
        let v = c.values();
        assert_eq!(v.heading_offset, 0.0);
        assert!((v.group_yaw + TAU).abs() < 1e-5);
    }

    #[test]
    fn unrepresentable_durations_fall_back_to_default() {
        for text in ["inf", "nan", "1e30"] {
            let toml = format!("[scroll]\ntween_duration_secs = {text}\n");
            let options = crate::options::Options::from_toml(&toml).unwrap();
            let c = Choreographer::new(&options.scroll);
            assert_eq!(c.duration, ms(1000), "tween_duration_secs = {text}");
        }
        let c = Choreographer::new(&ScrollOptions {
            tween_duration_secs: -2.0,
            ..ScrollOptions::default()
        });
        assert_eq!(c.duration, Duration::ZERO);
    }

    #[test]
    fn custom_options_are_honored() {
        let options = ScrollOptions {
            throttle_ms: 100,
            tween_duration_secs: 0.5,
            heading_shift_percent: 50.0,
            easing: EasingFunction::Linear,
        };
        let mut c = Choreographer::new(&options);
        let _ = c.on_wheel(1.0, ms(0));
        assert!(matches!(c.on_wheel(1.0, ms(100)), ScrollOutcome::Accepted { .. }));
        // The second shift starts from -10 (20% into the first one) and,
        // being newer, determines the final value.
        let v = c.advance(ms(2000));
        assert!((v.heading_offset + 60.0).abs() < 1e-3);
    }
}
