use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// The inward-facing starfield sphere behind the scene.
pub struct BackdropOptions {
    /// Sphere radius. Must stay inside the camera far plane.
    pub radius: f32,
    /// Width and height segment count.
    pub segments: u32,
    /// Constant opacity of the starfield.
    pub opacity: f32,
    /// Number of stars in the procedural starfield used when the texture
    /// fails to load.
    pub fallback_star_count: u32,
    /// Seed for the procedural starfield.
    pub fallback_seed: u64,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            radius: 50.0,
            segments: 64,
            opacity: 0.6,
            fallback_star_count: 2400,
            fallback_seed: 0x5EED_57A2,
        }
    }
}
