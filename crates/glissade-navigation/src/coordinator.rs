//! Navigation coordinator.
//!
//! Owns the screen stack, feeds pointer input through the directional
//! recognizer, drives interactive pops through the progress controller, and
//! is the only writer of recognizer enablement. Cancelled transitions never
//! produce a did-show, so the recognizer is maintained here with a delayed,
//! supersedable re-enable.

use std::cell::RefCell;
use std::rc::Rc;

use glissade_core::{RuntimeHandle, TimerRegistration};
use glissade_gesture::{DirectionalDragRecognizer, GesturePhase, PanDirection, PointerSample};
use glissade_graphics::Rect;

use crate::animator::{PopTransitionAnimator, TransitionContext};
use crate::metrics::INTERACTIVE_DURATION_MILLIS;
use crate::progress::{ReleaseDecision, TransitionProgressController};
use crate::screen::{Screen, ScreenId, ScreenView, TabBar};
use crate::transition::{InteractiveTransition, TransitionHandle, TransitionOutcome};

type DidShowCallback = Rc<dyn Fn(ScreenId) + 'static>;

struct CoordinatorState {
    container: Rect,
    stack: Vec<Screen>,
    navigation_bar_hidden: bool,
    tab_bar: Option<TabBar>,
    recognizer: DirectionalDragRecognizer,
    animator: Rc<RefCell<PopTransitionAnimator>>,
    progress: TransitionProgressController,
    active_transition: Option<InteractiveTransition>,
    /// Pending post-cancel re-enable. Replacing or clearing it cancels the
    /// underlying timer, which is what guards against a stale callback
    /// re-enabling the recognizer after a newer session changed the state.
    pending_enable: Option<TimerRegistration>,
    on_did_show: Option<DidShowCallback>,
}

/// Coordinates a stack of screens and their pop transitions.
#[derive(Clone)]
pub struct NavigationCoordinator {
    inner: Rc<RefCell<CoordinatorState>>,
    runtime: RuntimeHandle,
}

impl NavigationCoordinator {
    pub fn new(runtime: RuntimeHandle, container: Rect) -> Self {
        let mut recognizer = DirectionalDragRecognizer::new(PanDirection::Right);
        recognizer.set_enabled(false);
        Self {
            inner: Rc::new(RefCell::new(CoordinatorState {
                container,
                stack: Vec::new(),
                navigation_bar_hidden: false,
                tab_bar: None,
                recognizer,
                animator: Rc::new(RefCell::new(PopTransitionAnimator::new())),
                progress: TransitionProgressController::new(),
                active_transition: None,
                pending_enable: None,
                on_did_show: None,
            })),
            runtime,
        }
    }

    pub fn set_tab_bar(&self, tab_bar: TabBar) {
        self.inner.borrow_mut().tab_bar = Some(tab_bar);
    }

    pub fn tab_bar(&self) -> Option<TabBar> {
        self.inner.borrow().tab_bar.clone()
    }

    /// Current navigation-bar visibility, owned by the host. The animator's
    /// captured flag is re-derived from this on the next did-show, not here.
    pub fn set_navigation_bar_hidden(&self, hidden: bool) {
        self.inner.borrow_mut().navigation_bar_hidden = hidden;
    }

    pub fn navigation_bar_hidden(&self) -> bool {
        self.inner.borrow().navigation_bar_hidden
    }

    pub fn set_on_did_show(&self, callback: impl Fn(ScreenId) + 'static) {
        self.inner.borrow_mut().on_did_show = Some(Rc::new(callback));
    }

    pub fn stack_depth(&self) -> usize {
        self.inner.borrow().stack.len()
    }

    pub fn top_screen_id(&self) -> Option<ScreenId> {
        self.inner.borrow().stack.last().map(Screen::id)
    }

    pub fn screen_view(&self, id: ScreenId) -> Option<ScreenView> {
        self.inner
            .borrow()
            .stack
            .iter()
            .find(|screen| screen.id() == id)
            .map(|screen| screen.view().clone())
    }

    pub fn is_gesture_enabled(&self) -> bool {
        self.inner.borrow().recognizer.is_enabled()
    }

    /// Flips a screen's interactive-pop opt-out. Takes effect at the next
    /// enablement decision (did-show or post-cancel re-enable), not
    /// immediately.
    pub fn set_interactive_pop_disabled(&self, id: ScreenId, disabled: bool) {
        let mut state = self.inner.borrow_mut();
        if let Some(screen) = state.stack.iter_mut().find(|screen| screen.id() == id) {
            screen.flags.interactive_pop_disabled = disabled;
        }
    }

    /// Pushes with the default (non-animated) treatment and fires did-show.
    pub fn push(&self, screen: Screen) {
        {
            let mut state = self.inner.borrow_mut();
            log::debug!("push screen {}", screen.id());
            state.stack.push(screen);
        }
        after_shown(&self.inner);
    }

    /// Programmatic animated pop, run through the same animator
    /// non-interactively. Returns `None` when there is nothing to pop or a
    /// transition is already in flight.
    pub fn pop(&self) -> Option<TransitionHandle> {
        let mut state = self.inner.borrow_mut();
        if state.stack.len() < 2
            || state.active_transition.is_some()
            || !state.progress.is_idle()
        {
            return None;
        }

        let ctx = pop_context(&state, false);
        let weak = Rc::downgrade(&self.inner);
        let transition = InteractiveTransition::begin(
            Rc::clone(&state.animator),
            ctx,
            &self.runtime,
            move |outcome| {
                if let Some(inner) = weak.upgrade() {
                    resolve_transition(&inner, outcome);
                }
            },
        );
        let handle = transition.handle();
        log::debug!("pop began (depth {})", state.stack.len());
        transition.finish();
        state.active_transition = Some(transition);
        Some(handle)
    }

    /// Feeds one raw pointer sample through the recognizer and into the
    /// transition machinery.
    pub fn handle_pointer(&self, sample: &PointerSample) {
        let mut state = self.inner.borrow_mut();
        let Some(pan) = state.recognizer.filter(sample) else {
            return;
        };

        match pan.phase {
            GesturePhase::Began => {
                if state.active_transition.is_some() {
                    log::debug!("pan ignored: transition already in flight");
                    return;
                }
                let stack_len = state.stack.len();
                if !state.progress.begin(stack_len) {
                    return;
                }
                // A new session supersedes any pending re-enable.
                state.pending_enable = None;

                let ctx = pop_context(&state, true);
                let weak = Rc::downgrade(&self.inner);
                let transition = InteractiveTransition::begin(
                    Rc::clone(&state.animator),
                    ctx,
                    &self.runtime,
                    move |outcome| {
                        if let Some(inner) = weak.upgrade() {
                            resolve_transition(&inner, outcome);
                        }
                    },
                );
                log::debug!("interactive pop began (depth {})", state.stack.len());
                state.active_transition = Some(transition);
            }
            GesturePhase::Changed => {
                let width = state.container.width;
                if let Some(fraction) = state.progress.update(pan.translation, width) {
                    if let Some(transition) = &state.active_transition {
                        transition.update(fraction);
                    }
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => match state.progress.release() {
                Some(ReleaseDecision::Finish) => {
                    log::debug!("pan released: finishing pop");
                    if let Some(transition) = &state.active_transition {
                        transition.finish();
                    }
                }
                Some(ReleaseDecision::Cancel) => {
                    log::debug!("pan released: cancelling pop");
                    if let Some(transition) = &state.active_transition {
                        transition.cancel();
                    }
                    // A cancelled transition reports no did-show, so the
                    // recognizer state is maintained here: disabled now,
                    // re-enabled after the animation duration if the top
                    // screen still permits it then.
                    state.recognizer.set_enabled(false);
                    self.schedule_reenable(&mut state);
                }
                None => {}
            },
            GesturePhase::Failed => {}
        }
    }

    /// Handle for the transition currently in flight, if any.
    pub fn active_transition_handle(&self) -> Option<TransitionHandle> {
        self.inner
            .borrow()
            .active_transition
            .as_ref()
            .map(InteractiveTransition::handle)
    }

    fn schedule_reenable(&self, state: &mut CoordinatorState) {
        let weak = Rc::downgrade(&self.inner);
        let registration = self.runtime.frame_clock().with_delay_millis(
            INTERACTIVE_DURATION_MILLIS,
            move |_| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let mut state = inner.borrow_mut();
                state.pending_enable = None;
                let allowed = state.stack.len() >= 2
                    && state
                        .stack
                        .last()
                        .map(|screen| !screen.flags.interactive_pop_disabled)
                        .unwrap_or(false);
                log::trace!("post-cancel re-enable: {}", allowed);
                state.recognizer.set_enabled(allowed);
            },
        );
        state.pending_enable = Some(registration);
    }
}

fn pop_context(state: &CoordinatorState, interactive: bool) -> TransitionContext {
    let depth = state.stack.len();
    let from = &state.stack[depth - 1];
    let to = &state.stack[depth - 2];
    TransitionContext {
        container: state.container,
        from_view: Some(from.view().clone()),
        to_view: Some(to.view().clone()),
        from_flags: from.flags,
        to_flags: to.flags,
        tab_bar: state.tab_bar.clone(),
        is_interactive: interactive,
    }
}

/// Post-transition bookkeeping shared by push and successful pops: re-derive
/// the animator's captured bar flag and the recognizer enablement from the
/// new top screen, then notify the host.
fn after_shown(inner: &Rc<RefCell<CoordinatorState>>) {
    let (callback, shown) = {
        let mut state = inner.borrow_mut();
        state.pending_enable = None;
        let hidden = state.navigation_bar_hidden;
        state.animator.borrow_mut().set_from_hides_navigation_bar(hidden);

        if state.stack.len() < 2 {
            state.recognizer.set_enabled(false);
        } else {
            let opt_out = state
                .stack
                .last()
                .map(|screen| screen.flags.interactive_pop_disabled)
                .unwrap_or(true);
            state.recognizer.set_enabled(!opt_out);
        }
        (
            state.on_did_show.clone(),
            state.stack.last().map(Screen::id),
        )
    };
    if let (Some(callback), Some(id)) = (callback, shown) {
        callback(id);
    }
}

fn resolve_transition(inner: &Rc<RefCell<CoordinatorState>>, outcome: TransitionOutcome) {
    let completed = {
        let mut state = inner.borrow_mut();
        state.active_transition = None;
        state.progress.transition_resolved();
        if outcome.is_completed() {
            let popped = state.stack.pop();
            if let Some(screen) = popped {
                log::debug!("pop committed: screen {} removed", screen.id());
            }
            true
        } else {
            log::debug!("pop cancelled: stack unchanged");
            false
        }
    };
    if completed {
        after_shown(inner);
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
