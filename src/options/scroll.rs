use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Wheel throttling and scroll tween parameters.
pub struct ScrollOptions {
    /// Minimum interval between accepted wheel events, in milliseconds.
    pub throttle_ms: u64,
    /// Duration of every scroll tween, in seconds.
    pub tween_duration_secs: f32,
    /// How far each accepted scroll shifts the headings, in percent of
    /// their own height.
    pub heading_shift_percent: f32,
    /// Easing curve shared by all scroll tweens.
    pub easing: EasingFunction,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            throttle_ms: 2000,
            tween_duration_secs: 1.0,
            heading_shift_percent: 100.0,
            easing: EasingFunction::QuadraticInOut,
        }
    }
}
