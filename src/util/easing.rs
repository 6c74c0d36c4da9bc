//! Easing functions for tween interpolation.
//!
//! Provides the easing curves available to scroll-driven tweens. All
//! functions map a clamped progress value in `[0, 1]` to an eased value in
//! `[0, 1]`.

use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out (slow start and end, symmetric about t=0.5).
    /// Equivalent to the `power2.inOut` curve of common tweening engines.
    QuadraticInOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for scroll tweens.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_shape() {
        let ease = EasingFunction::QuadraticInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(0.25), 0.125);
        assert_eq!(ease.evaluate(0.5), 0.5);
        assert_eq!(ease.evaluate(0.75), 0.875);
        assert_eq!(ease.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_is_symmetric() {
        let ease = EasingFunction::QuadraticInOut;
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let mirrored = 1.0 - ease.evaluate(1.0 - t);
            assert!((ease.evaluate(t) - mirrored).abs() < 1e-6, "t={t}");
        }
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let ease = EasingFunction::QuadraticInOut;
        assert_eq!(ease.evaluate(-3.0), 0.0);
        assert_eq!(ease.evaluate(7.0), 1.0);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.5), 0.25);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_sqrt_out() {
        let sqrt_out = EasingFunction::SqrtOut;
        assert!((sqrt_out.evaluate(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_quadratic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticInOut);
    }

    #[test]
    fn test_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let w: Wrapper = toml::from_str("easing = \"quadratic_in_out\"").unwrap();
        assert_eq!(w.easing, EasingFunction::QuadraticInOut);

        let w: Wrapper =
            toml::from_str("easing = { cubic_hermite = { c1 = 0.33, c2 = 1.0 } }")
                .unwrap();
        assert_eq!(w.easing, EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 });
    }
}
