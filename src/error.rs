//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the planets crate.
#[derive(Debug)]
pub enum PlanetsError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Failed to fetch an asset from disk or the network.
    AssetLoad {
        /// The path or URL that was requested.
        source: String,
        /// Human-readable failure reason.
        reason: String,
    },
    /// Fetched bytes could not be decoded as an image.
    Decode(String),
    /// WGSL composition failure.
    Shader(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl PlanetsError {
    /// Build an [`AssetLoad`](Self::AssetLoad) error for `source`.
    pub fn asset_load(source: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::AssetLoad {
            source: source.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for PlanetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::AssetLoad { source, reason } => {
                write!(f, "failed to load {source}: {reason}")
            }
            Self::Decode(msg) => write!(f, "image decode error: {msg}"),
            Self::Shader(msg) => write!(f, "shader error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PlanetsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for PlanetsError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for PlanetsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for PlanetsError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e.to_string())
    }
}
