//! Engine construction.

use std::sync::mpsc;

use web_time::Instant;

use super::{HeadingTargets, PlanetsEngine};
use crate::animation::Choreographer;
use crate::error::PlanetsError;
use crate::gpu::render_context::RenderContext;
use crate::options::Options;
use crate::renderer::SceneRenderer;
use crate::scene::SceneGraph;

impl PlanetsEngine {
    /// Create the GPU context for `target` and build the scene.
    ///
    /// `size` is the surface size in physical pixels. No assets are
    /// requested here; the host starts loads with
    /// [`asset_sender`](Self::asset_sender) once the engine exists, and
    /// the scene draws with placeholders until they arrive.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::Gpu`] if no adapter, device or surface is
    /// available, or [`PlanetsError::Shader`] if the shaders fail to compose.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
        headings: Box<dyn HeadingTargets>,
    ) -> Result<Self, PlanetsError> {
        let context =
            RenderContext::new(target, size, options.display.sample_count()).await?;
        let (width, height) = context.size();
        log::info!(
            "surface {width}x{height}, {:?}, {}x MSAA",
            context.format(),
            context.sample_count
        );

        let renderer = SceneRenderer::new(&context, &options)?;
        let scene = SceneGraph::new(&options, width, height);
        let choreographer = Choreographer::new(&options.scroll);
        let (asset_tx, asset_rx) = mpsc::channel();

        Ok(Self {
            context,
            renderer,
            scene,
            choreographer,
            headings,
            applied_heading_offset: None,
            asset_tx,
            asset_rx,
            start: Instant::now(),
            options,
        })
    }
}
