//! Standalone scene window backed by winit.
//!
//! ```no_run
//! # use planets::Viewer;
//! Viewer::builder()
//!     .with_title("Planets")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    animation::ScrollOutcome,
    assets,
    engine::{NoHeadings, PlanetsEngine, WheelDelta},
    error::PlanetsError,
    options::Options,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title (defaults to `display.title` from the options).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let options = self.options.unwrap_or_default();
        let title = self.title.unwrap_or_else(|| options.display.title.clone());
        Viewer { options, title }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::Viewer`] if the event loop cannot be created
    /// or exits abnormally, or the engine's error if initialization fails.
    pub fn run(self) -> Result<(), PlanetsError> {
        let event_loop = EventLoop::new().map_err(|e| PlanetsError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            title: self.title,
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PlanetsError::Viewer(e.to_string()))?;
        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<PlanetsEngine>,
    options: Option<Options>,
    title: String,
    init_error: Option<PlanetsError>,
}

/// Window title for scroll position `position` of `positions`.
fn section_title(title: &str, position: usize, positions: usize) -> String {
    format!("{title} - {}/{positions}", position + 1)
}

/// Convert a winit wheel delta (positive = up) to browser convention
/// (positive = down).
fn wheel_delta(delta: MouseScrollDelta) -> WheelDelta {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => WheelDelta::Lines(-y),
        #[allow(clippy::cast_possible_truncation)]
        MouseScrollDelta::PixelDelta(pos) => WheelDelta::Pixels(-pos.y as f32),
    }
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlanetsError) {
        log::error!("{error}");
        self.init_error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(options) = self.options.take() else {
            return;
        };

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(logical_w, logical_h))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, PlanetsError::Viewer(e.to_string()));
                return;
            }
        };

        let inner = window.inner_size();
        let engine = match pollster::block_on(PlanetsEngine::new(
            window.clone(),
            (inner.width, inner.height),
            options,
            Box::new(NoHeadings),
        )) {
            Ok(engine) => engine,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        if let Err(e) = assets::native::spawn_loads(
            &engine.options().assets,
            engine.max_texture_dimension(),
            &engine.asset_sender(),
        ) {
            // Surfaces without a loader keep their placeholders.
            log::warn!("{e}");
        }

        window.set_title(&section_title(&self.title, engine.position(), engine.positions()));
        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine) else {
            return;
        };

        match event {
            WindowEvent::Resized(size) => {
                engine.resize(size.width, size.height);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let now = engine.elapsed();
                if let ScrollOutcome::Accepted { position, .. } =
                    engine.handle_wheel(wheel_delta(delta), now)
                {
                    window.set_title(&section_title(&self.title, position, engine.positions()));
                }
            }
            WindowEvent::RedrawRequested => {
                let now = engine.elapsed();
                engine.frame(now);
                window.request_redraw();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_counts_sections_from_one() {
        assert_eq!(section_title("Planets", 0, 4), "Planets - 1/4");
        assert_eq!(section_title("Planets", 3, 4), "Planets - 4/4");
    }

    #[test]
    fn wheel_deltas_follow_browser_sign() {
        assert_eq!(
            wheel_delta(MouseScrollDelta::LineDelta(0.0, -1.0)),
            WheelDelta::Lines(1.0)
        );
        let pos = winit::dpi::PhysicalPosition::new(0.0, 30.0);
        assert_eq!(
            wheel_delta(MouseScrollDelta::PixelDelta(pos)),
            WheelDelta::Pixels(-30.0)
        );
    }
}
