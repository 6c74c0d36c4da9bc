//! Time-driven property tweens.
//!
//! A [`Tween`] interpolates one [`TweenProperty`] of [`AnimatedValues`]
//! from the value it had when the tween started to a resolved end value.
//! The [`TweenEngine`] owns the active tweens and applies them in creation
//! order each tick, so when two tweens drive the same property the newer
//! one determines the final value.

use web_time::Duration;

use crate::util::easing::EasingFunction;

/// A property that tweens can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenProperty {
    /// Vertical offset of the heading elements, in percent of their own
    /// height.
    HeadingOffset,
    /// Rotation of the orbiting group about the vertical axis, in radians.
    GroupYaw,
}

/// Where a tween ends, resolved against the property value at start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Relative displacement from the start value (`+=` / `-=`).
    By(f32),
    /// Absolute end value.
    To(f32),
}

impl TweenTarget {
    fn resolve(self, from: f32) -> f32 {
        match self {
            Self::By(delta) => from + delta,
            Self::To(value) => value,
        }
    }
}

/// The values written by tweens and read by the renderer and host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedValues {
    /// Heading offset in percent of own height (0 = resting position).
    pub heading_offset: f32,
    /// Orbiting group yaw in radians.
    pub group_yaw: f32,
}

impl AnimatedValues {
    /// Current value of `property`.
    #[must_use]
    pub fn get(&self, property: TweenProperty) -> f32 {
        match property {
            TweenProperty::HeadingOffset => self.heading_offset,
            TweenProperty::GroupYaw => self.group_yaw,
        }
    }

    fn set(&mut self, property: TweenProperty, value: f32) {
        match property {
            TweenProperty::HeadingOffset => self.heading_offset = value,
            TweenProperty::GroupYaw => self.group_yaw = value,
        }
    }
}

/// A single running interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Driven property.
    pub property: TweenProperty,
    /// Value at start.
    pub from: f32,
    /// Value at completion.
    pub to: f32,
    /// Start time.
    pub start: Duration,
    /// Length of the interpolation.
    pub duration: Duration,
    /// Progress curve.
    pub easing: EasingFunction,
}

impl Tween {
    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Duration) -> f32 {
        let t = self.easing.evaluate(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    /// Whether the tween has reached its end value at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Owns and advances the active tweens.
#[derive(Debug, Default)]
pub struct TweenEngine {
    active: Vec<Tween>,
}

impl TweenEngine {
    /// Create an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween on `property`, resolving `target` against its current
    /// value in `values`.
    pub fn start(
        &mut self,
        values: &AnimatedValues,
        property: TweenProperty,
        target: TweenTarget,
        now: Duration,
        duration: Duration,
        easing: EasingFunction,
    ) {
        let from = values.get(property);
        self.active.push(Tween {
            property,
            from,
            to: target.resolve(from),
            start: now,
            duration,
            easing,
        });
    }

    /// Write every active tween's value at `now` into `values`, in creation
    /// order, then drop the tweens that have finished.
    ///
    /// Returns `true` while any tween is still running.
    pub fn advance(&mut self, now: Duration, values: &mut AnimatedValues) -> bool {
        for tween in &self.active {
            values.set(tween.property, tween.value_at(now));
        }
        self.active.retain(|tween| !tween.is_finished(now));
        !self.active.is_empty()
    }

    /// Number of tweens still running.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Running tweens, in creation order.
    #[must_use]
    pub fn active(&self) -> &[Tween] {
        &self.active
    }

    /// Whether no tween is running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn relative_tween_moves_by_delta() {
        let mut values = AnimatedValues {
            heading_offset: -100.0,
            ..Default::default()
        };
        let mut engine = TweenEngine::new();
        engine.start(
            &values,
            TweenProperty::HeadingOffset,
            TweenTarget::By(-100.0),
            Duration::ZERO,
            SEC,
            EasingFunction::Linear,
        );

        assert!(engine.advance(Duration::from_millis(500), &mut values));
        assert!((values.heading_offset + 150.0).abs() < 1e-4);

        assert!(!engine.advance(Duration::from_millis(1500), &mut values));
        assert_eq!(values.heading_offset, -200.0);
        assert!(engine.is_idle());
    }

    #[test]
    fn absolute_tween_ends_at_value() {
        let mut values = AnimatedValues {
            heading_offset: -300.0,
            ..Default::default()
        };
        let mut engine = TweenEngine::new();
        engine.start(
            &values,
            TweenProperty::HeadingOffset,
            TweenTarget::To(0.0),
            Duration::ZERO,
            SEC,
            EasingFunction::QuadraticInOut,
        );
        let _ = engine.advance(SEC, &mut values);
        assert_eq!(values.heading_offset, 0.0);
    }

    #[test]
    fn newer_tween_wins_on_shared_property() {
        let mut values = AnimatedValues::default();
        let mut engine = TweenEngine::new();
        let easing = EasingFunction::Linear;
        engine.start(
            &values,
            TweenProperty::HeadingOffset,
            TweenTarget::By(-100.0),
            Duration::ZERO,
            SEC,
            easing,
        );
        engine.start(
            &values,
            TweenProperty::HeadingOffset,
            TweenTarget::To(50.0),
            Duration::ZERO,
            SEC,
            easing,
        );
        let _ = engine.advance(Duration::from_millis(500), &mut values);
        assert!((values.heading_offset - 25.0).abs() < 1e-4);
        let _ = engine.advance(SEC, &mut values);
        assert_eq!(values.heading_offset, 50.0);
    }

    #[test]
    fn tweens_on_different_properties_are_independent() {
        let mut values = AnimatedValues::default();
        let mut engine = TweenEngine::new();
        engine.start(
            &values,
            TweenProperty::GroupYaw,
            TweenTarget::By(-1.0),
            Duration::ZERO,
            SEC,
            EasingFunction::Linear,
        );
        engine.start(
            &values,
            TweenProperty::HeadingOffset,
            TweenTarget::By(-100.0),
            Duration::ZERO,
            SEC * 2,
            EasingFunction::Linear,
        );
        assert!(engine.advance(SEC, &mut values));
        assert_eq!(values.group_yaw, -1.0);
        assert!((values.heading_offset + 50.0).abs() < 1e-4);
        assert_eq!(engine.active_count(), 1);
    }

    #[test]
    fn before_start_holds_start_value() {
        let tween = Tween {
            property: TweenProperty::GroupYaw,
            from: 1.0,
            to: 2.0,
            start: SEC * 5,
            duration: SEC,
            easing: EasingFunction::Linear,
        };
        assert_eq!(tween.value_at(SEC), 1.0);
        assert!(!tween.is_finished(SEC));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let tween = Tween {
            property: TweenProperty::GroupYaw,
            from: 1.0,
            to: 2.0,
            start: SEC,
            duration: Duration::ZERO,
            easing: EasingFunction::Linear,
        };
        assert_eq!(tween.value_at(SEC), 2.0);
        assert!(tween.is_finished(Duration::ZERO));
    }
}
