//! Per-frame update, drawing and resize.

use web_time::Duration;

use super::PlanetsEngine;

impl PlanetsEngine {
    /// Advance the scene to `now` (on the [`elapsed`](Self::elapsed)
    /// clock) and draw it.
    ///
    /// Pending asset completions are installed first, then the tweens
    /// advance and the headings, body spin and group yaw are written
    /// before the draw reads them.
    pub fn frame(&mut self, now: Duration) {
        self.apply_pending_assets();

        let values = self.choreographer.advance(now);
        if self.applied_heading_offset != Some(values.heading_offset) {
            self.headings.apply_offset_percent(values.heading_offset);
            self.applied_heading_offset = Some(values.heading_offset);
        }
        self.scene.update(now, values.group_yaw);
        self.renderer.update(&self.context.queue, &self.scene);

        match self.renderer.render(&self.context) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.context.reconfigure();
            }
            Err(e) => log::error!("render error: {e}"),
        }
    }

    /// Resize the surface, camera and attachments. Zero-sized dimensions
    /// (a minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.context.resize(width, height) {
            return;
        }
        self.scene.camera.resize(width, height);
        self.renderer.resize(&self.context);
        log::debug!("resized to {width}x{height}, aspect {:.4}", self.scene.camera.aspect);
    }
}
