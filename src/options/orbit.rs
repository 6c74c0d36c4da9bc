use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Layout and motion of the orbiting bodies.
pub struct OrbitOptions {
    /// Radius of each body sphere.
    pub body_radius: f32,
    /// Width and height segment count of each body sphere.
    pub segments: u32,
    /// Distance of each body from the group center.
    pub orbit_radius: f32,
    /// Constant tilt of the whole group about the X axis, in radians.
    pub tilt: f32,
    /// Vertical offset of the whole group.
    pub vertical_offset: f32,
    /// Self-rotation rate of each body, in radians per second.
    pub spin_rate: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            body_radius: 1.3,
            segments: 62,
            orbit_radius: 4.5,
            tilt: 0.1,
            vertical_offset: -0.8,
            spin_rate: 0.03,
        }
    }
}
