//! Shared utilities.

pub mod easing;
pub mod viewport;
