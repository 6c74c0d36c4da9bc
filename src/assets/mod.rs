//! Asynchronous texture and environment-map loading.
//!
//! Loads are fire-and-forget: each stream (body textures, backdrop
//! texture, environment map) runs independently and posts one
//! [`AssetEvent`] per asset over an [`AssetSender`]. The engine drains the
//! channel before every frame; until an event arrives the affected surface
//! keeps its placeholder. Failures arrive as `Err` and are replaced with a
//! fallback by the engine.

pub mod decode;
pub mod fallback;
#[cfg(feature = "viewer")]
pub mod native;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

use std::fmt;
use std::sync::mpsc;

pub use decode::{ColorImage, DecodedImage, HdrImage};

use crate::error::PlanetsError;
use crate::options::AssetOptions;
use crate::scene::BODY_COUNT;

/// Which scene surface an asset feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    /// Surface texture of orbiting body `n`.
    Body(usize),
    /// Starfield texture of the backdrop sphere.
    Backdrop,
    /// HDR environment map.
    Environment,
}

impl AssetSlot {
    /// Whether the slot expects high-dynamic-range data.
    #[must_use]
    pub fn is_hdr(self) -> bool {
        matches!(self, Self::Environment)
    }
}

/// Where an asset's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Path relative to the working directory (native) or page (web).
    Local(String),
    /// Absolute `http://` or `https://` URL.
    Remote(String),
}

impl AssetSource {
    /// Resolve `path` against `root`. URLs and absolute paths are kept
    /// as-is.
    #[must_use]
    pub fn resolve(root: &str, path: &str) -> Self {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Self::Remote(path.to_owned());
        }
        if root.is_empty() || path.starts_with('/') {
            return Self::Local(path.to_owned());
        }
        let root = root.trim_end_matches('/');
        let path = path.trim_start_matches("./");
        Self::Local(format!("{root}/{path}"))
    }

    /// The path or URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local(s) | Self::Remote(s) => s,
        }
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One asset to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    /// Destination surface.
    pub slot: AssetSlot,
    /// Origin of the bytes.
    pub source: AssetSource,
}

/// A completed (or failed) load.
#[derive(Debug)]
pub struct AssetEvent {
    /// Destination surface.
    pub slot: AssetSlot,
    /// Origin of the bytes, for logging.
    pub source: AssetSource,
    /// Decoded pixels, or why they could not be produced.
    pub result: Result<DecodedImage, PlanetsError>,
}

/// Sending half of the asset completion channel.
pub type AssetSender = mpsc::Sender<AssetEvent>;
/// Receiving half of the asset completion channel.
pub type AssetReceiver = mpsc::Receiver<AssetEvent>;

/// An independent, internally ordered group of requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStream {
    /// Stream name (used for thread names and logs).
    pub name: &'static str,
    /// Requests, loaded in order.
    pub requests: Vec<AssetRequest>,
}

/// Split the configured assets into the three independent load streams:
/// body textures, backdrop texture and environment map. An empty
/// environment path yields an empty environment stream.
#[must_use]
pub fn streams(options: &AssetOptions) -> [AssetStream; 3] {
    let bodies = (0..BODY_COUNT)
        .map(|i| AssetRequest {
            slot: AssetSlot::Body(i),
            source: AssetSource::resolve(&options.root, &options.bodies[i].texture),
        })
        .collect();
    let backdrop = vec![AssetRequest {
        slot: AssetSlot::Backdrop,
        source: AssetSource::resolve(&options.root, &options.star_texture),
    }];
    let environment = if options.environment.is_empty() {
        Vec::new()
    } else {
        vec![AssetRequest {
            slot: AssetSlot::Environment,
            source: AssetSource::resolve(&options.root, &options.environment),
        }]
    };
    [
        AssetStream {
            name: "asset-bodies",
            requests: bodies,
        },
        AssetStream {
            name: "asset-backdrop",
            requests: backdrop,
        },
        AssetStream {
            name: "asset-environment",
            requests: environment,
        },
    ]
}

/// Turn fetched bytes (or a fetch failure) into an [`AssetEvent`].
#[must_use]
pub fn complete(
    request: AssetRequest,
    bytes: Result<Vec<u8>, PlanetsError>,
    max_dimension: u32,
) -> AssetEvent {
    let result = bytes.and_then(|bytes| decode::decode(request.slot, &bytes, max_dimension));
    AssetEvent {
        slot: request.slot,
        source: request.source,
        result,
    }
}
