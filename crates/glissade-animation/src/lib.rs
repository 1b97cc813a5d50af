//! Animation support for Glissade.
//!
//! Provides easing curves, tween specifications, and [`TimelineAnimation`],
//! the frame-clock-driven scalar timeline that runs the non-interactive
//! remainder of a transition.

mod easing;
mod timeline;

pub use easing::{AnimationSpec, Easing, Lerp};
pub use timeline::TimelineAnimation;
