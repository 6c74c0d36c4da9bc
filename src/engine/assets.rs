//! Installing completed asset loads, with fallbacks for failures.

use super::PlanetsEngine;
use crate::assets::fallback::{self, STARFIELD_SIZE};
use crate::assets::{AssetEvent, AssetSlot, ColorImage, DecodedImage, HdrImage};
use crate::error::PlanetsError;
use crate::options::Options;
use crate::scene::BODY_COUNT;

/// What a completed load changes in the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetUpdate {
    /// New surface texture for body `n`.
    Body(usize, ColorImage),
    /// New backdrop texture (loaded or procedural).
    Backdrop(ColorImage),
    /// HDR environment map; switches environment shading on.
    Environment(HdrImage),
}

/// Decide what to install for `event`.
///
/// A failed body texture returns `None` so the body keeps its flat color.
/// A failed backdrop texture yields a procedural starfield. A failed
/// environment map returns `None` so environment shading stays off.
#[must_use]
pub fn resolve_asset(event: AssetEvent, options: &Options) -> Option<AssetUpdate> {
    let AssetEvent {
        slot,
        source,
        result,
    } = event;
    match (slot, result) {
        (AssetSlot::Body(i), _) if i >= BODY_COUNT => {
            log::warn!("no body {i} for {source}");
            None
        }
        (AssetSlot::Body(i), Ok(DecodedImage::Color(image))) => {
            log::info!("loaded {source} ({}x{})", image.width, image.height);
            Some(AssetUpdate::Body(i, image))
        }
        (AssetSlot::Backdrop, Ok(DecodedImage::Color(image))) => {
            log::info!("loaded {source} ({}x{})", image.width, image.height);
            Some(AssetUpdate::Backdrop(image))
        }
        (AssetSlot::Environment, Ok(DecodedImage::Hdr(image))) => {
            log::info!("loaded environment {source} ({}x{})", image.width, image.height);
            Some(AssetUpdate::Environment(image))
        }
        (AssetSlot::Body(i), result) => {
            log_failure(&source, result.err());
            log::warn!("body {i} keeps its flat color");
            None
        }
        (AssetSlot::Backdrop, result) => {
            log_failure(&source, result.err());
            log::warn!("using a generated starfield");
            let backdrop = &options.backdrop;
            Some(AssetUpdate::Backdrop(fallback::procedural_starfield(
                STARFIELD_SIZE.0,
                STARFIELD_SIZE.1,
                backdrop.fallback_star_count,
                backdrop.fallback_seed,
            )))
        }
        (AssetSlot::Environment, result) => {
            log_failure(&source, result.err());
            log::warn!("environment lighting stays disabled");
            None
        }
    }
}

fn log_failure(source: &impl std::fmt::Display, error: Option<PlanetsError>) {
    match error {
        Some(e) => log::warn!("{e}"),
        None => log::warn!("{source}: unexpected image kind for this slot"),
    }
}

impl PlanetsEngine {
    /// Drain the asset channel without blocking and install every
    /// completed load (or its fallback).
    pub fn apply_pending_assets(&mut self) {
        while let Ok(event) = self.asset_rx.try_recv() {
            match resolve_asset(event, &self.options) {
                Some(AssetUpdate::Body(i, image)) => {
                    self.renderer.set_body_texture(&self.context, i, &image);
                }
                Some(AssetUpdate::Backdrop(image)) => {
                    self.renderer.set_backdrop_texture(&self.context, &image);
                }
                Some(AssetUpdate::Environment(image)) => {
                    self.renderer.set_environment(&self.context, &image);
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetSource;

    fn event(slot: AssetSlot, result: Result<DecodedImage, PlanetsError>) -> AssetEvent {
        AssetEvent {
            slot,
            source: AssetSource::Local("x".into()),
            result,
        }
    }

    fn failure() -> Result<DecodedImage, PlanetsError> {
        Err(PlanetsError::asset_load("x", "not found"))
    }

    #[test]
    fn loaded_body_texture_is_installed() {
        let image = fallback::solid_color([1, 2, 3, 255]);
        let update = resolve_asset(
            event(AssetSlot::Body(2), Ok(DecodedImage::Color(image.clone()))),
            &Options::default(),
        );
        assert_eq!(update, Some(AssetUpdate::Body(2, image)));
    }

    #[test]
    fn failed_body_keeps_its_placeholder() {
        let update = resolve_asset(event(AssetSlot::Body(0), failure()), &Options::default());
        assert_eq!(update, None);
    }

    #[test]
    fn failed_backdrop_gets_a_generated_starfield() {
        let options = Options::default();
        let Some(AssetUpdate::Backdrop(image)) =
            resolve_asset(event(AssetSlot::Backdrop, failure()), &options)
        else {
            panic!("expected backdrop fallback");
        };
        assert_eq!((image.width, image.height), STARFIELD_SIZE);
        let expected = fallback::procedural_starfield(
            STARFIELD_SIZE.0,
            STARFIELD_SIZE.1,
            options.backdrop.fallback_star_count,
            options.backdrop.fallback_seed,
        );
        assert_eq!(image, expected);
    }

    #[test]
    fn environment_only_accepts_hdr() {
        let options = Options::default();
        let hdr = fallback::neutral_environment();
        assert_eq!(
            resolve_asset(
                event(AssetSlot::Environment, Ok(DecodedImage::Hdr(hdr.clone()))),
                &options
            ),
            Some(AssetUpdate::Environment(hdr))
        );
        let color = fallback::solid_color([0; 4]);
        assert_eq!(
            resolve_asset(
                event(AssetSlot::Environment, Ok(DecodedImage::Color(color))),
                &options
            ),
            None
        );
        assert_eq!(
            resolve_asset(event(AssetSlot::Environment, failure()), &options),
            None
        );
    }

    #[test]
    fn unknown_body_index_is_ignored() {
        let image = fallback::solid_color([0; 4]);
        let update = resolve_asset(
            event(AssetSlot::Body(BODY_COUNT), Ok(DecodedImage::Color(image))),
            &Options::default(),
        );
        assert_eq!(update, None);
    }
}
