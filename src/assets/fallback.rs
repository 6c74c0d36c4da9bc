//! Placeholder and fallback pixels for surfaces whose asset is missing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::decode::{ColorImage, HdrImage};

/// Size of the procedural starfield (2:1 equirectangular).
pub const STARFIELD_SIZE: (u32, u32) = (2048, 1024);

/// A single-pixel texture of `rgba`.
#[must_use]
pub fn solid_color(rgba: [u8; 4]) -> ColorImage {
    ColorImage {
        width: 1,
        height: 1,
        rgba: rgba.to_vec(),
    }
}

/// A single-pixel neutral environment used before the HDR map arrives.
#[must_use]
pub fn neutral_environment() -> HdrImage {
    HdrImage {
        width: 1,
        height: 1,
        rgba: vec![1.0, 1.0, 1.0, 1.0],
    }
}

/// A deterministic black sky with `star_count` stars of varying size and
/// brightness, used when the starfield texture cannot be loaded.
#[must_use]
pub fn procedural_starfield(width: u32, height: u32, star_count: u32, seed: u64) -> ColorImage {
    let (width, height) = (width.max(1), height.max(1));
    let mut rgba = vec![0u8; (width * height * 4) as usize];
    for px in rgba.chunks_exact_mut(4) {
        px[3] = 255;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..star_count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let brightness: u8 = rng.random_range(90..=255);
        // Slight blue/yellow tint per star.
        let tint: i16 = rng.random_range(-24..=24);
        let color = [
            (i16::from(brightness) + tint).clamp(0, 255) as u8,
            brightness,
            (i16::from(brightness) - tint).clamp(0, 255) as u8,
        ];
        let big = rng.random_bool(0.08);
        plot(&mut rgba, width, height, x, y, color);
        if big {
            plot(&mut rgba, width, height, x + 1, y, color);
            plot(&mut rgba, width, height, x, y + 1, color);
            plot(&mut rgba, width, height, x + 1, y + 1, color);
        }
    }

    ColorImage {
        width,
        height,
        rgba,
    }
}

fn plot(rgba: &mut [u8], width: u32, height: u32, x: u32, y: u32, color: [u8; 3]) {
    if x >= width || y >= height {
        return;
    }
    let offset = ((y * width + x) * 4) as usize;
    rgba[offset..offset + 3].copy_from_slice(&color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_color_is_one_pixel() {
        let img = solid_color([0, 0, 255, 255]);
        assert_eq!((img.width, img.height), (1, 1));
        assert_eq!(img.rgba, vec![0, 0, 255, 255]);
    }

    #[test]
    fn starfield_is_deterministic_per_seed() {
        let a = procedural_starfield(64, 32, 40, 7);
        let b = procedural_starfield(64, 32, 40, 7);
        let c = procedural_starfield(64, 32, 40, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn starfield_is_mostly_dark_and_opaque() {
        let img = procedural_starfield(128, 64, 50, 1);
        assert_eq!(img.rgba.len(), 128 * 64 * 4);
        assert!(img.rgba.chunks_exact(4).all(|px| px[3] == 255));
        let lit = img
            .rgba
            .chunks_exact(4)
            .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
            .count();
        assert!(lit > 0);
        assert!(lit <= 50 * 4);
    }

    #[test]
    fn stars_on_the_edge_do_not_overflow() {
        let img = procedural_starfield(1, 1, 100, 3);
        assert_eq!(img.rgba.len(), 4);
    }
}
