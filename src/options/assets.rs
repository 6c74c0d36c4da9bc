use serde::{Deserialize, Serialize};

use crate::scene::BODY_COUNT;

/// Where to fetch each texture and what to show until it arrives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetOptions {
    /// Directory (or URL prefix on the web) that relative paths resolve
    /// against.
    pub root: String,
    /// Starfield texture for the backdrop.
    pub star_texture: String,
    /// Equirectangular HDR environment map. Empty disables it.
    pub environment: String,
    /// One entry per orbiting body, in orbit order.
    pub bodies: [BodyOptions; BODY_COUNT],
}

/// Texture and fallback color of a single orbiting body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyOptions {
    /// Surface texture path or URL.
    pub texture: String,
    /// sRGB color (0xRRGGBB) shown until the texture loads, and instead of
    /// it if loading fails.
    pub color: u32,
}

impl BodyOptions {
    fn new(texture: &str, color: u32) -> Self {
        Self {
            texture: texture.to_owned(),
            color,
        }
    }

    /// The fallback color as sRGB bytes.
    #[must_use]
    pub fn color_rgba8(&self) -> [u8; 4] {
        let [_, r, g, b] = self.color.to_be_bytes();
        [r, g, b, 255]
    }
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            root: "assets/textures".into(),
            star_texture: "stars.jpg".into(),
            environment: "https://dl.polyhaven.org/file/ph-assets/HDRIs/hdr/4k/evening_road_01_4k.hdr"
                .into(),
            bodies: [
                BodyOptions::new("csilia/color.png", 0x00ff00),
                BodyOptions::new("earth/map.jpg", 0x0000ff),
                BodyOptions::new("venus/map.jpg", 0xff0000),
                BodyOptions::new("volcanic/color.png", 0xffff00),
            ],
        }
    }
}
