//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, texture upload, shared
//! pipeline boilerplate, and shader composition.

/// Shared bind group layout and pipeline helpers.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Sampled textures and render attachments.
pub mod texture;
