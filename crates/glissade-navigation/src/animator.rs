//! The parallax pop animator.
//!
//! Seek-based: `prepare` sets up initial state and artifacts, `seek` places
//! every animated property for a completion fraction, and `finish` tears the
//! artifacts down. A percent-driven runner maps gesture progress or a timeline
//! onto `seek`, which keeps every intermediate state reachable from tests.

use std::rc::Rc;

use glissade_graphics::Rect;

use crate::artifacts::{DimmingOverlay, Overlay, TabBarSnapshot, TransitionArtifacts};
use crate::frame::{incoming_view_frame, tab_bar_overlay_frame, PopLayoutQuery};
use crate::metrics::{
    DIMMING_ALPHA, INTERACTIVE_DURATION_MILLIS, NON_INTERACTIVE_DURATION_MILLIS, PARALLAX_FACTOR,
};
use crate::screen::{tab_bar_hidden_for, ScreenFlags, ScreenView, TabBar};

/// Everything a single pop transition animates between.
///
/// The view handles are optional: a context that cannot resolve either view
/// produces a transition that mutates nothing.
#[derive(Clone)]
pub struct TransitionContext {
    pub container: Rect,
    pub from_view: Option<ScreenView>,
    pub to_view: Option<ScreenView>,
    pub from_flags: ScreenFlags,
    pub to_flags: ScreenFlags,
    pub tab_bar: Option<TabBar>,
    pub is_interactive: bool,
}

struct PreparedState {
    to_frame: Rect,
    parallax_offset: f32,
    artifacts: TransitionArtifacts,
}

/// Animates a pop between the outgoing screen (sliding out right) and the
/// incoming one (sliding in from a parallax offset on the left).
pub struct PopTransitionAnimator {
    from_hides_navigation_bar: bool,
    /// Incoming view of the running animation, held only so a cancelled
    /// transition can restore its transform. Cleared on every exit path.
    to_view: Option<ScreenView>,
    prepared: Option<PreparedState>,
}

impl PopTransitionAnimator {
    pub fn new() -> Self {
        Self {
            from_hides_navigation_bar: false,
            to_view: None,
            prepared: None,
        }
    }

    /// Navigation-bar state captured when the outgoing screen was shown.
    pub fn set_from_hides_navigation_bar(&mut self, hidden: bool) {
        self.from_hides_navigation_bar = hidden;
    }

    pub fn from_hides_navigation_bar(&self) -> bool {
        self.from_hides_navigation_bar
    }

    pub fn duration_millis(&self, interactive: bool) -> u64 {
        if interactive {
            INTERACTIVE_DURATION_MILLIS
        } else {
            NON_INTERACTIVE_DURATION_MILLIS
        }
    }

    /// Sets up initial placement and artifacts for one pop.
    ///
    /// Returns false without mutating anything when either view is missing;
    /// the transition then degrades to a visual no-op.
    pub fn prepare(&mut self, ctx: &TransitionContext) -> bool {
        let (Some(from), Some(to)) = (ctx.from_view.clone(), ctx.to_view.clone()) else {
            log::warn!("pop transition skipped: missing from/to view");
            return false;
        };

        let query = PopLayoutQuery {
            from_hides_navigation_bar: self.from_hides_navigation_bar,
            to_hides_navigation_bar: ctx.to_flags.hides_navigation_bar,
            extends_under_top_bar: ctx.to_flags.extends_under_top_bar,
            extends_under_bottom_bar: ctx.to_flags.extends_under_bottom_bar,
            tab_bar_hidden: tab_bar_hidden_for(ctx.tab_bar.as_ref(), &ctx.to_flags),
        };

        let to_frame = incoming_view_frame(to.frame(), &query);
        let parallax_offset = -ctx.container.width * PARALLAX_FACTOR;
        to.set_frame(to_frame);
        to.set_translation_x(parallax_offset);

        // Left-edge shadow on the outgoing view; clipping is disabled so the
        // shadow stays visible, and restored at teardown.
        let previous_clips_to_bounds = from.clips_to_bounds();
        from.add_left_edge_shadow();
        from.set_clips_to_bounds(false);

        let dimming = Rc::new(DimmingOverlay::new(Rect::from_size(to_frame.size())));
        to.add_overlay(Overlay::Dimming(Rc::clone(&dimming)));

        let tab_bar_snapshot = self.install_tab_bar_snapshot(ctx, &to, to_frame, &query);
        let dimmed_tab_bar = tab_bar_snapshot.as_ref().and(ctx.tab_bar.clone());

        self.to_view = Some(to);
        self.prepared = Some(PreparedState {
            to_frame,
            parallax_offset,
            artifacts: TransitionArtifacts {
                dimming,
                tab_bar_snapshot,
                previous_clips_to_bounds,
                dimmed_tab_bar,
            },
        });
        true
    }

    /// Places every animated property at completion fraction `progress`.
    pub fn seek(&self, ctx: &TransitionContext, progress: f32) {
        let Some(prepared) = &self.prepared else {
            return;
        };
        let (Some(from), Some(to)) = (&ctx.from_view, &ctx.to_view) else {
            return;
        };

        let p = progress.clamp(0.0, 1.0);
        to.set_translation_x(prepared.parallax_offset * (1.0 - p));
        from.set_translation_x(prepared.to_frame.width * p);
        prepared.artifacts.dimming.set_alpha(DIMMING_ALPHA * (1.0 - p));
    }

    /// Tears down artifacts and restores shared state.
    ///
    /// Runs on both outcomes. A cancelled transition additionally resets the
    /// incoming view's transform so a retried pop starts clean.
    pub fn finish(&mut self, ctx: &TransitionContext, completed: bool) {
        if let Some(prepared) = self.prepared.take() {
            if let Some(to) = &ctx.to_view {
                to.remove_overlay(&Overlay::Dimming(Rc::clone(&prepared.artifacts.dimming)));
                if let Some(snapshot) = &prepared.artifacts.tab_bar_snapshot {
                    to.remove_overlay(&Overlay::TabBarSnapshot(Rc::clone(snapshot)));
                }
            }
            if let Some(from) = &ctx.from_view {
                from.reset_layer();
                from.set_clips_to_bounds(prepared.artifacts.previous_clips_to_bounds);
            }
            if let Some(tab_bar) = &prepared.artifacts.dimmed_tab_bar {
                if tab_bar.alpha() == 0.0 {
                    tab_bar.set_alpha(1.0);
                }
            }
        }

        if !completed {
            if let Some(to) = &self.to_view {
                to.reset_layer();
            }
        }
        self.to_view = None;
    }

    /// The tab bar is about to reappear when the incoming screen shows it and
    /// the outgoing one hid it. Toggling real visibility mid-animation causes
    /// a layout jump, so a snapshot stands in while the real bar is
    /// transparent.
    fn install_tab_bar_snapshot(
        &self,
        ctx: &TransitionContext,
        to: &ScreenView,
        to_frame: Rect,
        query: &PopLayoutQuery,
    ) -> Option<Rc<TabBarSnapshot>> {
        let tab_bar = ctx.tab_bar.as_ref()?;
        let to_hidden = tab_bar.is_hidden_for(&ctx.to_flags);
        let from_hidden = tab_bar.is_hidden_for(&ctx.from_flags);
        if to_hidden || !from_hidden {
            return None;
        }

        let bar_frame = tab_bar_overlay_frame(to_frame, tab_bar.bounds(), query);
        let snapshot = Rc::new(TabBarSnapshot::new(bar_frame, tab_bar.bounds()));
        to.add_overlay(Overlay::TabBarSnapshot(Rc::clone(&snapshot)));
        tab_bar.set_alpha(0.0);
        Some(snapshot)
    }
}

impl Default for PopTransitionAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
