//! Shared layout and timing constants for the pop transition.
//!
//! Bar heights and offsets are in logical units and match the stock
//! navigation metrics the transition approximates. Treat them as a set:
//! the frame decision tables in `frame.rs` assume these exact values.

use glissade_graphics::Color;

/// Height of the navigation bar, including the status-bar area.
pub const NAVIGATION_BAR_HEIGHT: f32 = 64.0;

/// Height of the tab bar.
pub const TAB_BAR_HEIGHT: f32 = 49.0;

/// Fraction of the container width the incoming screen starts shifted left.
/// Matches the parallax offset of the stock pop animation.
pub const PARALLAX_FACTOR: f32 = 0.3;

/// Width of the drop shadow along the outgoing screen's left edge.
pub const SHADOW_WIDTH: f32 = 4.0;

/// Opacity of the left-edge shadow.
pub const SHADOW_OPACITY: f32 = 0.2;

/// Starting alpha of the dimming overlay placed over the incoming screen.
/// The revealed screen sits under a slightly darker veil that fades out
/// alongside the motion.
pub const DIMMING_ALPHA: f32 = 0.25;

/// Height of the separator line drawn above the tab-bar snapshot.
pub const SEPARATOR_HEIGHT: f32 = 1.0;

/// Color of the tab-bar separator line.
pub const SEPARATOR_COLOR: Color = Color::from_rgb_u8(194, 194, 194);

/// Duration of an interactive (gesture-driven) transition, in milliseconds.
/// Also the delay before the recognizer is re-enabled after a cancelled
/// transition.
pub const INTERACTIVE_DURATION_MILLIS: u64 = 300;

/// Duration of a non-interactive pop, approximating the stock animation.
pub const NON_INTERACTIVE_DURATION_MILLIS: u64 = 250;

/// Completion fraction above which releasing the gesture finishes the pop.
/// Exactly this value cancels.
pub const FINISH_THRESHOLD: f32 = 0.5;
