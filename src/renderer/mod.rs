//! GPU rendering of the scene graph.

pub mod environment;
pub mod mesh;
mod scene_renderer;

pub use scene_renderer::SceneRenderer;
