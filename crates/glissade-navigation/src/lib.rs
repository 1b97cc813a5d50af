//! Interactive swipe-back navigation transitions for stacked screens.
//!
//! A pan started anywhere on screen — not just at the edge — drives a custom
//! pop animation with parallax, an edge shadow, dimming, and tab-bar
//! special-casing. The pieces compose left to right:
//!
//! pointer samples → [`DirectionalDragRecognizer`] →
//! [`NavigationCoordinator`] → [`TransitionProgressController`] →
//! [`InteractiveTransition`] → [`PopTransitionAnimator`]
//!
//! Hosts own the screen stack contents and all bar-visibility state; the
//! coordinator reads them and only ever mutates transition visuals and
//! recognizer enablement. Time comes exclusively from the host via
//! `RuntimeHandle::drain_frame_callbacks`.

pub mod animator;
pub mod artifacts;
pub mod coordinator;
pub mod frame;
pub mod metrics;
pub mod progress;
pub mod screen;
pub mod transition;

pub use animator::{PopTransitionAnimator, TransitionContext};
pub use artifacts::{DimmingOverlay, Overlay, TabBarSnapshot, TransitionArtifacts};
pub use coordinator::NavigationCoordinator;
pub use frame::{incoming_view_frame, tab_bar_overlay_frame, PopLayoutQuery};
pub use progress::{ReleaseDecision, TransitionProgress, TransitionProgressController};
pub use screen::{Screen, ScreenFlags, ScreenId, ScreenView, TabBar};
pub use transition::{InteractiveTransition, TransitionHandle, TransitionOutcome};

pub use glissade_gesture::{
    DirectionalDragRecognizer, GesturePhase, PanDirection, PanSample, PointerSample,
};
