//! Temporary visual overlays created for one pop animation.
//!
//! Everything in here lives exactly as long as a single transition: created
//! by the animator's prepare step, mutated while the animation runs, and torn
//! down unconditionally when it resolves, whether it completed or cancelled.

use std::cell::Cell;
use std::rc::Rc;

use glissade_graphics::{Color, Rect, Size};

use crate::metrics::{DIMMING_ALPHA, SEPARATOR_COLOR, SEPARATOR_HEIGHT};
use crate::screen::TabBar;

/// Semi-transparent veil over the incoming screen, faded out alongside the
/// motion.
#[derive(Debug)]
pub struct DimmingOverlay {
    bounds: Rect,
    color: Color,
    alpha: Cell<f32>,
}

impl DimmingOverlay {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            color: Color::BLACK,
            alpha: Cell::new(DIMMING_ALPHA),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alpha(&self) -> f32 {
        self.alpha.get()
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.alpha.set(alpha.clamp(0.0, 1.0));
    }
}

/// Snapshot of the shared tab bar, shown in place of the real bar while its
/// visibility flips mid-animation, plus the hairline separator above it.
#[derive(Debug)]
pub struct TabBarSnapshot {
    frame: Rect,
    captured_size: Size,
    separator: Rect,
    separator_color: Color,
}

impl TabBarSnapshot {
    pub fn new(frame: Rect, captured_size: Size) -> Self {
        Self {
            frame,
            captured_size,
            separator: Rect::new(0.0, -SEPARATOR_HEIGHT, frame.width, SEPARATOR_HEIGHT),
            separator_color: SEPARATOR_COLOR,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn captured_size(&self) -> Size {
        self.captured_size
    }

    /// Separator line frame, relative to the snapshot.
    pub fn separator(&self) -> Rect {
        self.separator
    }

    pub fn separator_color(&self) -> Color {
        self.separator_color
    }
}

/// Overlay attached to a screen view for the duration of one animation.
#[derive(Clone, Debug)]
pub enum Overlay {
    Dimming(Rc<DimmingOverlay>),
    TabBarSnapshot(Rc<TabBarSnapshot>),
}

impl Overlay {
    pub fn same_as(&self, other: &Overlay) -> bool {
        match (self, other) {
            (Overlay::Dimming(a), Overlay::Dimming(b)) => Rc::ptr_eq(a, b),
            (Overlay::TabBarSnapshot(a), Overlay::TabBarSnapshot(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Everything one transition needs to undo at the end.
pub struct TransitionArtifacts {
    pub dimming: Rc<DimmingOverlay>,
    pub tab_bar_snapshot: Option<Rc<TabBarSnapshot>>,
    /// Clip state of the outgoing view before the shadow was attached.
    pub previous_clips_to_bounds: bool,
    /// The shared bar whose alpha was dropped for the snapshot, if any.
    pub dimmed_tab_bar: Option<TabBar>,
}
