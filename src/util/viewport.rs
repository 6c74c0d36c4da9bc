//! Window-to-surface sizing.

/// On-screen and backing-store size of a surface that fills a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Displayed size in logical (CSS) pixels.
    pub logical: (f64, f64),
    /// Backing-store size in physical pixels, at least 1×1.
    pub physical: (u32, u32),
}

impl SurfaceSize {
    /// Size for a window of `logical` pixels at `scale_factor` physical
    /// pixels per logical pixel. Non-finite or non-positive inputs are
    /// treated as 1.
    #[must_use]
    pub fn fill(logical: (f64, f64), scale_factor: f64) -> Self {
        let positive = |v: f64| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        let logical = (positive(logical.0), positive(logical.1));
        let scale = positive(scale_factor);
        let physical = |v: f64| (v * scale).round().max(1.0) as u32;
        Self {
            logical,
            physical: (physical(logical.0), physical(logical.1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_dpi_keeps_logical_size_and_doubles_backing_store() {
        let size = SurfaceSize::fill((800.0, 600.0), 2.0);
        assert_eq!(size.logical, (800.0, 600.0));
        assert_eq!(size.physical, (1600, 1200));
    }

    #[test]
    fn fractional_scale_rounds_backing_store() {
        let size = SurfaceSize::fill((1001.0, 500.0), 1.5);
        assert_eq!(size.physical, (1502, 750));
    }

    #[test]
    fn degenerate_inputs_stay_drawable() {
        let size = SurfaceSize::fill((0.0, f64::NAN), -1.0);
        assert_eq!(size.logical, (1.0, 1.0));
        assert_eq!(size.physical, (1, 1));
    }
}
