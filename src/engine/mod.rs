//! The scene engine: owns the GPU context, the scene graph, the
//! choreography and the asset channel, and turns host callbacks (frames,
//! wheel events, resizes) into state changes and draws.
//!
//! The engine never schedules itself. The host (the winit viewer or the
//! browser's `requestAnimationFrame` loop) calls [`PlanetsEngine::frame`]
//! once per display refresh and forwards input as it arrives.

mod assets;
mod construction;
mod frame;
mod input;

pub use assets::{resolve_asset, AssetUpdate};
pub use input::WheelDelta;

use web_time::{Duration, Instant};

use crate::animation::Choreographer;
use crate::assets::{AssetReceiver, AssetSender};
use crate::gpu::render_context::RenderContext;
use crate::options::Options;
use crate::renderer::SceneRenderer;
use crate::scene::SceneGraph;

/// Page elements that slide with the scroll position.
///
/// Offsets are percentages of each element's own height; `-100.0` moves
/// an element up by exactly its height. An implementation with no elements
/// does nothing.
pub trait HeadingTargets {
    /// Move every heading to `percent` of its own height.
    fn apply_offset_percent(&mut self, percent: f32);
}

/// Heading targets for hosts without a heading stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHeadings;

impl HeadingTargets for NoHeadings {
    fn apply_offset_percent(&mut self, _percent: f32) {}
}

/// The running scene.
pub struct PlanetsEngine {
    context: RenderContext,
    renderer: SceneRenderer,
    scene: SceneGraph,
    choreographer: Choreographer,
    headings: Box<dyn HeadingTargets>,
    applied_heading_offset: Option<f32>,
    asset_tx: AssetSender,
    asset_rx: AssetReceiver,
    start: Instant,
    options: Options,
}

impl PlanetsEngine {
    /// Sender for asset completions; hand a clone to each loader.
    #[must_use]
    pub fn asset_sender(&self) -> AssetSender {
        self.asset_tx.clone()
    }

    /// Largest texture side the device accepts.
    #[must_use]
    pub fn max_texture_dimension(&self) -> u32 {
        self.context.max_texture_dimension()
    }

    /// Time since the engine was created. All animation timestamps are
    /// measured on this clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The CPU-side scene graph.
    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }
}
