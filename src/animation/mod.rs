//! Scroll-driven animation: wheel throttling, tweens, and the choreography
//! that connects them.
//!
//! All types here take explicit timestamps (a [`Duration`](web_time::Duration)
//! since scene start) so they run without a window or GPU.

pub mod choreography;
pub mod scroll;
pub mod tween;

pub use choreography::Choreographer;
pub use scroll::{ScrollController, ScrollDirection, ScrollOutcome};
pub use tween::{AnimatedValues, Tween, TweenEngine, TweenProperty, TweenTarget};
