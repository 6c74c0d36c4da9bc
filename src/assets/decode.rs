//! Decoding fetched bytes into CPU pixel buffers.

use image::{imageops::FilterType, DynamicImage, RgbaImage};

use super::AssetSlot;
use crate::error::PlanetsError;

/// 8-bit RGBA pixels in sRGB encoding, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

/// Linear floating-point RGBA pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct HdrImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` floats.
    pub rgba: Vec<f32>,
}

/// Pixels ready for GPU upload.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedImage {
    /// Display-referred color texture.
    Color(ColorImage),
    /// High-dynamic-range environment map.
    Hdr(HdrImage),
}

/// Decode `bytes` for `slot`, shrinking the image so neither side exceeds
/// `max_dimension` (the device texture limit).
///
/// # Errors
///
/// Returns [`PlanetsError::Decode`] if the format is not recognized or
/// the data is corrupt.
pub fn decode(slot: AssetSlot, bytes: &[u8], max_dimension: u32) -> Result<DecodedImage, PlanetsError> {
    let image = fit_within(image::load_from_memory(bytes)?, max_dimension);
    let (width, height) = (image.width(), image.height());
    if slot.is_hdr() {
        Ok(DecodedImage::Hdr(HdrImage {
            width,
            height,
            rgba: image.into_rgba32f().into_raw(),
        }))
    } else {
        Ok(DecodedImage::Color(ColorImage {
            width,
            height,
            rgba: image.into_rgba8().into_raw(),
        }))
    }
}

/// Successively halved copies of `base`, from half size down to 1×1.
/// The base level itself is not included.
#[must_use]
pub fn mip_chain(base: &ColorImage) -> Vec<ColorImage> {
    let Some(mut current) = RgbaImage::from_raw(base.width, base.height, base.rgba.clone()) else {
        log::warn!("{}x{} image has a short pixel buffer", base.width, base.height);
        return Vec::new();
    };
    let mut levels = Vec::new();
    while current.width() > 1 || current.height() > 1 {
        let width = (current.width() / 2).max(1);
        let height = (current.height() / 2).max(1);
        current = image::imageops::resize(&current, width, height, FilterType::Triangle);
        levels.push(ColorImage {
            width,
            height,
            rgba: current.as_raw().clone(),
        });
    }
    levels
}

fn fit_within(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    let max_dimension = max_dimension.max(1);
    if image.width() <= max_dimension && image.height() <= max_dimension {
        return image;
    }
    log::debug!(
        "downscaling {}x{} image to fit {max_dimension}",
        image.width(),
        image.height()
    );
    image.resize(max_dimension, max_dimension, FilterType::Triangle)
}
