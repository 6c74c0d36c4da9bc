use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Environment lighting and clear color.
pub struct LightingOptions {
    /// How strongly the HDR environment tints body surfaces once loaded
    /// (0.0 = unlit texture only, 1.0 = fully environment-modulated).
    pub environment_strength: f32,
    /// Exposure applied to environment samples before blending.
    pub environment_exposure: f32,
    /// Linear RGB clear color behind the backdrop.
    pub clear_color: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            environment_strength: 0.35,
            environment_exposure: 1.0,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}
