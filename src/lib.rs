// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// Tests assert with unwrap/panic.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! A decorative wgpu scene: a starfield backdrop, four textured spheres
//! orbiting in a tilted group, optional HDR environment shading, and
//! scroll-driven heading and rotation tweens.
//!
//! # Key entry points
//!
//! - [`engine::PlanetsEngine`] - owns the GPU context and scene; the host
//!   calls [`frame`](engine::PlanetsEngine::frame) every display refresh
//!   and forwards wheel and resize events
//! - [`options::Options`] - runtime configuration (camera, orbit, backdrop,
//!   scroll, lighting, display, assets), loadable from TOML
//! - [`animation`] - wheel throttling, tweens and the scroll choreography,
//!   all driven by explicit timestamps
//! - [`assets`] - asynchronous texture loading over a channel, with
//!   fallbacks
//!
//! # Architecture
//!
//! Scene state lives on one thread. Texture and environment-map loads run
//! on named background threads natively (or `fetch` futures on the web)
//! and post results over an `mpsc` channel; the engine drains it without
//! blocking at the start of each frame. Each frame advances the tweens,
//! writes heading offsets, body spin and group yaw, uploads uniforms and
//! draws the backdrop followed by the bodies in one multisampled pass.

pub mod animation;
pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use engine::PlanetsEngine;
pub use error::PlanetsError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
