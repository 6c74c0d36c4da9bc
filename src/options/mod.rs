//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (camera, orbit layout, backdrop, scroll behavior,
//! lighting, display, asset locations) are consolidated here. Options
//! serialize to/from TOML so a scene can be restyled without recompiling.

mod assets;
mod backdrop;
mod camera;
mod display;
mod lighting;
mod orbit;
mod scroll;

use std::path::Path;

pub use assets::{AssetOptions, BodyOptions};
pub use backdrop::BackdropOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use lighting::LightingOptions;
pub use orbit::OrbitOptions;
pub use scroll::ScrollOptions;
use serde::{Deserialize, Serialize};

use crate::error::PlanetsError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[scroll]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and placement.
    pub camera: CameraOptions,
    /// Orbiting body layout and motion.
    pub orbit: OrbitOptions,
    /// Starfield backdrop.
    pub backdrop: BackdropOptions,
    /// Wheel throttling and scroll tweens.
    pub scroll: ScrollOptions,
    /// Environment lighting.
    pub lighting: LightingOptions,
    /// Output surface and host document.
    pub display: DisplayOptions,
    /// Texture and environment map locations.
    pub assets: AssetOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::Io`] if the file cannot be read and
    /// [`PlanetsError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, PlanetsError> {
        let content = std::fs::read_to_string(path).map_err(PlanetsError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, PlanetsError> {
        toml::from_str(content).map_err(|e| PlanetsError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::OptionsParse`] if serialization fails and
    /// [`PlanetsError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PlanetsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlanetsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlanetsError::Io)?;
        }
        std::fs::write(path, content).map_err(PlanetsError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[scroll]
throttle_ms = 500
easing = "linear"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.scroll.throttle_ms, 500);
        assert_eq!(opts.scroll.easing, EasingFunction::Linear);
        // Everything else should be default
        assert_eq!(opts.scroll.tween_duration_secs, 1.0);
        assert_eq!(opts.orbit.orbit_radius, 4.5);
        assert_eq!(opts.camera.fovy, 25.0);
        assert_eq!(opts.display.canvas_id, "canvas");
    }

    #[test]
    fn body_list_must_have_one_entry_per_body() {
        let toml_str = r#"
[[assets.bodies]]
texture = "a.png"
color = 1
"#;
        assert!(matches!(
            Options::from_toml(toml_str),
            Err(PlanetsError::OptionsParse(_))
        ));
    }

    #[test]
    fn default_bodies_pair_textures_with_colors() {
        let assets = AssetOptions::default();
        assert_eq!(assets.bodies[0].texture, "csilia/color.png");
        assert_eq!(assets.bodies[0].color_rgba8(), [0, 255, 0, 255]);
        assert_eq!(assets.bodies[3].color_rgba8(), [255, 255, 0, 255]);
    }

    #[test]
    fn antialias_selects_sample_count() {
        let mut display = DisplayOptions::default();
        assert_eq!(display.sample_count(), 4);
        display.antialias = false;
        assert_eq!(display.sample_count(), 1);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("planets-opts-{}", std::process::id()));
        let path = dir.join("scene.toml");
        let mut opts = Options::default();
        opts.backdrop.opacity = 0.25;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(dir);
    }
}
