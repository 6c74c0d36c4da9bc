//! CPU-side scene graph: camera, starfield backdrop and the orbiting group.
//!
//! The graph is built once from [`Options`] and then only mutated through
//! three fields: the camera aspect (resize), each body's spin (render
//! loop) and the group yaw (scroll tweens). Spin and yaw are separate
//! transform fields, so the render loop and the tweens never write the
//! same value.

pub mod sphere;

use std::f64::consts::TAU;

use glam::{Mat4, Vec3};
use web_time::Duration;

use crate::camera::Camera;
use crate::options::{BackdropOptions, Options, OrbitOptions};

/// Number of orbiting bodies. Body textures, fallback colors, orbit angle
/// slots and scroll positions all share this count.
pub const BODY_COUNT: usize = 4;

/// Position of body `index` on a circle of `radius` in the XZ plane, with
/// the circle split evenly between `count` bodies.
#[must_use]
pub fn orbit_position(index: usize, count: usize, radius: f32) -> Vec3 {
    let angle = (index as f32 / count as f32) * std::f32::consts::TAU;
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// A single textured sphere in the orbiting group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitBody {
    /// Fixed position relative to the group.
    pub position: Vec3,
    /// Self-rotation about the local Y axis, in radians.
    pub spin: f32,
}

/// The parent transform shared by all orbiting bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitGroup {
    /// Constant tilt about X.
    pub tilt: f32,
    /// Constant vertical offset.
    pub offset_y: f32,
    /// Rotation about the vertical axis, driven by scrolling.
    pub yaw: f32,
    /// Bodies in orbit order.
    pub bodies: [OrbitBody; BODY_COUNT],
    /// Sphere radius shared by every body.
    pub body_radius: f32,
    spin_rate: f32,
}

impl OrbitGroup {
    /// Lay out [`BODY_COUNT`] bodies evenly around the orbit.
    #[must_use]
    pub fn new(options: &OrbitOptions) -> Self {
        let bodies = std::array::from_fn(|i| OrbitBody {
            position: orbit_position(i, BODY_COUNT, options.orbit_radius),
            spin: 0.0,
        });
        Self {
            tilt: options.tilt,
            offset_y: options.vertical_offset,
            yaw: 0.0,
            bodies,
            body_radius: options.body_radius,
            spin_rate: options.spin_rate,
        }
    }

    /// Set every body's spin to `spin_rate * elapsed`, wrapped to one turn.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        let spin = (elapsed.as_secs_f64() * f64::from(self.spin_rate)).rem_euclid(TAU) as f32;
        for body in &mut self.bodies {
            body.spin = spin;
        }
    }

    /// Group transform: offset, then tilt about X, then yaw about Y.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.offset_y, 0.0))
            * Mat4::from_rotation_x(self.tilt)
            * Mat4::from_rotation_y(self.yaw)
    }

    /// World transform of body `index`.
    #[must_use]
    pub fn body_matrix(&self, index: usize) -> Mat4 {
        let body = &self.bodies[index];
        self.matrix() * Mat4::from_translation(body.position) * Mat4::from_rotation_y(body.spin)
    }
}

/// The large inward-facing starfield sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    /// Sphere radius.
    pub radius: f32,
    /// Constant opacity.
    pub opacity: f32,
}

impl Backdrop {
    fn new(options: &BackdropOptions) -> Self {
        Self {
            radius: options.radius,
            opacity: options.opacity,
        }
    }
}

/// Root container of the scene.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    /// Viewing camera.
    pub camera: Camera,
    /// Starfield backdrop.
    pub backdrop: Backdrop,
    /// The orbiting group.
    pub orbit: OrbitGroup,
}

impl SceneGraph {
    /// Build the scene for a viewport of `width` x `height` pixels.
    #[must_use]
    pub fn new(options: &Options, width: u32, height: u32) -> Self {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        Self {
            camera: Camera::from_options(&options.camera, aspect),
            backdrop: Backdrop::new(&options.backdrop),
            orbit: OrbitGroup::new(&options.orbit),
        }
    }

    /// Apply the per-frame animated state: body spin from elapsed time and
    /// the group yaw from the scroll tweens.
    pub fn update(&mut self, elapsed: Duration, group_yaw: f32) {
        self.orbit.set_elapsed(elapsed);
        self.orbit.yaw = group_yaw;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn bodies_split_the_orbit_evenly() {
        let group = OrbitGroup::new(&OrbitOptions::default());
        assert!(approx(group.bodies[0].position, Vec3::new(4.5, 0.0, 0.0)));
        assert!(approx(group.bodies[1].position, Vec3::new(0.0, 0.0, 4.5)));
        assert!(approx(group.bodies[2].position, Vec3::new(-4.5, 0.0, 0.0)));
        assert!(approx(group.bodies[3].position, Vec3::new(0.0, 0.0, -4.5)));
    }

    #[test]
    fn orbit_position_matches_formula() {
        for i in 0..BODY_COUNT {
            let angle = 2.0 * PI * i as f32 / BODY_COUNT as f32;
            let expected = Vec3::new(angle.cos() * 3.0, 0.0, angle.sin() * 3.0);
            assert!(approx(orbit_position(i, BODY_COUNT, 3.0), expected));
        }
    }

    #[test]
    fn spin_follows_elapsed_time() {
        let mut group = OrbitGroup::new(&OrbitOptions::default());
        for secs in [0.0, 1.0, 12.5, 300.0, 10_000.0] {
            group.set_elapsed(Duration::from_secs_f64(secs));
            let expected = (0.03 * secs).rem_euclid(TAU) as f32;
            for body in &group.bodies {
                assert!((body.spin - expected).abs() < 1e-4, "t={secs}");
            }
        }
    }

    #[test]
    fn spin_does_not_touch_group_yaw() {
        let mut scene = SceneGraph::new(&Options::default(), 800, 600);
        scene.update(Duration::from_secs(10), -FRAC_PI_2);
        assert_eq!(scene.orbit.yaw, -FRAC_PI_2);
        scene.orbit.set_elapsed(Duration::from_secs(20));
        assert_eq!(scene.orbit.yaw, -FRAC_PI_2);
    }

    #[test]
    fn group_matrix_applies_tilt_and_offset() {
        let group = OrbitGroup::new(&OrbitOptions::default());
        let origin = group.matrix().transform_point3(Vec3::ZERO);
        assert!(approx(origin, Vec3::new(0.0, -0.8, 0.0)));

        // Body on +Z is tilted by 0.1 rad about X.
        let p = group.body_matrix(1).transform_point3(Vec3::ZERO);
        let expected = Vec3::new(0.0, -0.8 - 4.5 * 0.1f32.sin(), 4.5 * 0.1f32.cos());
        assert!(approx(p, expected));
    }

    #[test]
    fn quarter_turn_of_yaw_moves_each_body_into_the_next_slot() {
        let mut group = OrbitGroup::new(&OrbitOptions::default());
        group.tilt = 0.0;
        group.offset_y = 0.0;
        group.yaw = -FRAC_PI_2;
        let p0 = group.body_matrix(0).transform_point3(Vec3::ZERO);
        assert!(approx(p0, group.bodies[1].position));
    }

    #[test]
    fn scene_aspect_from_viewport() {
        let scene = SceneGraph::new(&Options::default(), 1600, 900);
        assert!((scene.camera.aspect - 1.778).abs() < 1e-3);
        assert_eq!(scene.backdrop.opacity, 0.6);
        assert_eq!(scene.backdrop.radius, 50.0);
    }
}
