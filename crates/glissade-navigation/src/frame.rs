//! Frame computation for the incoming screen and the tab-bar overlay.
//!
//! Both functions are pure: all externally-owned visibility state is
//! gathered into a [`PopLayoutQuery`] up front, so the decision tables can be
//! exercised exhaustively without a view hierarchy.

use glissade_graphics::{Rect, Size};

use crate::metrics::{NAVIGATION_BAR_HEIGHT, TAB_BAR_HEIGHT};

/// Read-only layout inputs for one pop transition.
///
/// `from_hides_navigation_bar` is the bar state captured when the outgoing
/// screen was shown; the remaining fields describe the incoming screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopLayoutQuery {
    pub from_hides_navigation_bar: bool,
    pub to_hides_navigation_bar: bool,
    pub extends_under_top_bar: bool,
    pub extends_under_bottom_bar: bool,
    pub tab_bar_hidden: bool,
}

/// Frame the incoming screen animates into.
///
/// The table reproduces the stock pop placement for every combination of bar
/// visibility and content-extension flags: three outer branches on the
/// navigation-bar pair, four inner branches on tab-bar visibility and the
/// extension edges. A screen extended under both bars keeps its current
/// frame.
pub fn incoming_view_frame(current: Rect, query: &PopLayoutQuery) -> Rect {
    let width = current.width;
    let height = current.height;
    let under_top = query.extends_under_top_bar;
    let under_bottom = query.extends_under_bottom_bar;

    if query.from_hides_navigation_bar && !query.to_hides_navigation_bar {
        if !query.tab_bar_hidden && !under_top && !under_bottom {
            Rect::new(0.0, 0.0, width, height)
        } else if !under_top && !under_bottom {
            Rect::new(0.0, NAVIGATION_BAR_HEIGHT, width, height - NAVIGATION_BAR_HEIGHT)
        } else if !under_top {
            Rect::new(0.0, NAVIGATION_BAR_HEIGHT, width, height - TAB_BAR_HEIGHT)
        } else if !under_bottom {
            Rect::new(0.0, NAVIGATION_BAR_HEIGHT, width, height - NAVIGATION_BAR_HEIGHT)
        } else {
            current
        }
    } else if query.from_hides_navigation_bar {
        if !query.tab_bar_hidden && !under_top && !under_bottom {
            Rect::new(0.0, 0.0, width, height)
        } else if !under_top && !under_bottom {
            Rect::new(0.0, 0.0, width, height)
        } else if !under_top {
            Rect::new(
                0.0,
                NAVIGATION_BAR_HEIGHT,
                width,
                height - TAB_BAR_HEIGHT - NAVIGATION_BAR_HEIGHT,
            )
        } else if !under_bottom {
            Rect::new(0.0, NAVIGATION_BAR_HEIGHT, width, height - NAVIGATION_BAR_HEIGHT)
        } else {
            current
        }
    } else {
        if !query.tab_bar_hidden && !under_top && !under_bottom {
            Rect::new(0.0, 0.0, width, height - TAB_BAR_HEIGHT)
        } else if !under_top && !under_bottom {
            Rect::new(0.0, NAVIGATION_BAR_HEIGHT, width, height)
        } else if !under_top {
            Rect::new(0.0, NAVIGATION_BAR_HEIGHT, width, height - TAB_BAR_HEIGHT)
        } else if !under_bottom {
            Rect::new(0.0, NAVIGATION_BAR_HEIGHT, width, height)
        } else {
            current
        }
    }
}

/// Vertical placement of the temporary tab-bar overlay inside the incoming
/// screen, keyed by the same query. The overlay is pinned to the bottom of
/// the view except when neither bar consideration applies, in which case it
/// sits just below the view and slides in with it.
pub fn tab_bar_overlay_frame(view_frame: Rect, bar_size: Size, query: &PopLayoutQuery) -> Rect {
    let height = view_frame.height;

    if query.from_hides_navigation_bar && !query.tab_bar_hidden {
        Rect::new(0.0, height - TAB_BAR_HEIGHT, bar_size.width, bar_size.height)
    } else if query.from_hides_navigation_bar && !query.extends_under_bottom_bar {
        Rect::new(
            0.0,
            height - NAVIGATION_BAR_HEIGHT,
            bar_size.width,
            bar_size.height,
        )
    } else if query.extends_under_bottom_bar {
        Rect::new(0.0, height - bar_size.height, bar_size.width, bar_size.height)
    } else {
        Rect::new(0.0, height, bar_size.width, bar_size.height)
    }
}

#[cfg(test)]
#[path = "tests/frame_tests.rs"]
mod tests;
