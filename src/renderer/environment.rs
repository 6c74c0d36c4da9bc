//! Environment-map parameters consumed by `planets::environment` in WGSL.

use crate::options::LightingOptions;

/// GPU-side environment parameters (16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EnvironmentUniform {
    /// Blend factor between unlit albedo and environment-lit albedo.
    pub strength: f32,
    /// Multiplier on environment radiance.
    pub exposure: f32,
    _pad: [f32; 2],
}

impl EnvironmentUniform {
    /// Parameters with the environment switched off. Used until an HDR map
    /// has been installed.
    #[must_use]
    pub fn disabled(options: &LightingOptions) -> Self {
        Self {
            strength: 0.0,
            exposure: options.environment_exposure,
            _pad: [0.0; 2],
        }
    }

    /// Parameters for an installed environment map.
    #[must_use]
    pub fn enabled(options: &LightingOptions) -> Self {
        Self {
            strength: options.environment_strength.clamp(0.0, 1.0),
            ..Self::disabled(options)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::{Vec2, Vec3};

    use super::*;

    // Mirror of `equirect_uv` in `modules/environment.wgsl`. The top row
    // (`v = 0`) faces +Y.
    fn equirect_uv(dir: Vec3) -> Vec2 {
        let u = dir.z.atan2(dir.x) / (2.0 * PI) + 0.5;
        let v = dir.y.clamp(-1.0, 1.0).acos() / PI;
        Vec2::new(u, v)
    }

    // Mirror of `environment_tint` in `modules/environment.wgsl`.
    fn environment_tint(radiance: Vec3, params: &EnvironmentUniform) -> Vec3 {
        Vec3::ONE.lerp(radiance * params.exposure, params.strength)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn poles_map_to_top_and_bottom_rows() {
        assert!((equirect_uv(Vec3::Y).y - 0.0).abs() < 1e-6);
        assert!((equirect_uv(Vec3::NEG_Y).y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn horizon_directions_sweep_u() {
        assert!(approx(equirect_uv(Vec3::X), Vec2::new(0.5, 0.5)));
        assert!(approx(equirect_uv(Vec3::Z), Vec2::new(0.75, 0.5)));
        assert!(approx(equirect_uv(Vec3::NEG_Z), Vec2::new(0.25, 0.5)));
        let back = equirect_uv(Vec3::NEG_X);
        // atan2 at the seam lands on either edge.
        assert!(back.x.abs() < 1e-5 || (back.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zero_strength_leaves_albedo_untouched() {
        let params = EnvironmentUniform::disabled(&LightingOptions::default());
        assert_eq!(environment_tint(Vec3::new(8.0, 0.1, 2.0), &params), Vec3::ONE);
    }

    #[test]
    fn enabled_strength_blends_toward_radiance() {
        let options = LightingOptions {
            environment_strength: 0.5,
            environment_exposure: 2.0,
            ..LightingOptions::default()
        };
        let params = EnvironmentUniform::enabled(&options);
        let tint = environment_tint(Vec3::splat(0.25), &params);
        assert!(tint.abs_diff_eq(Vec3::splat(0.75), 1e-6));
    }

    #[test]
    fn strength_is_clamped() {
        let options = LightingOptions {
            environment_strength: 3.0,
            ..LightingOptions::default()
        };
        assert_eq!(EnvironmentUniform::enabled(&options).strength, 1.0);
    }
}
