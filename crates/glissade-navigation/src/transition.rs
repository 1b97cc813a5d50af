//! Percent-driven transition runner.
//!
//! An [`InteractiveTransition`] maps gesture progress onto the animator while
//! the finger is down, then hands the remaining portion to a frame-clock
//! timeline on finish or cancel. Resolution is an explicit asynchronous
//! result: observers await a [`TransitionHandle`] instead of racing callbacks
//! against real time.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use glissade_animation::{AnimationSpec, Easing, TimelineAnimation};
use glissade_core::RuntimeHandle;

use crate::animator::{PopTransitionAnimator, TransitionContext};

/// How a transition ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    Completed,
    Cancelled,
}

impl TransitionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransitionOutcome::Completed)
    }
}

struct HandleState {
    outcome: Option<TransitionOutcome>,
    waker: Option<Waker>,
}

/// Future resolving once the transition's animation has fully torn down.
pub struct TransitionHandle {
    state: Rc<RefCell<HandleState>>,
}

impl Future for TransitionHandle {
    type Output = TransitionOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.state.borrow_mut();
        if let Some(outcome) = state.outcome {
            Poll::Ready(outcome)
        } else {
            state.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RunnerPhase {
    Seeking,
    Animating,
    Resolved,
}

struct TransitionInner {
    animator: Rc<RefCell<PopTransitionAnimator>>,
    ctx: TransitionContext,
    fraction: Cell<f32>,
    phase: Cell<RunnerPhase>,
    timeline: TimelineAnimation,
    handle: Rc<RefCell<HandleState>>,
    on_complete: RefCell<Option<Box<dyn FnOnce(TransitionOutcome) + 'static>>>,
}

impl TransitionInner {
    fn resolve(inner: &Rc<Self>, outcome: TransitionOutcome) {
        if inner.phase.get() == RunnerPhase::Resolved {
            return;
        }
        inner.phase.set(RunnerPhase::Resolved);
        inner
            .animator
            .borrow_mut()
            .finish(&inner.ctx, outcome.is_completed());

        {
            let mut handle = inner.handle.borrow_mut();
            handle.outcome = Some(outcome);
            if let Some(waker) = handle.waker.take() {
                waker.wake();
            }
        }
        if let Some(on_complete) = inner.on_complete.borrow_mut().take() {
            on_complete(outcome);
        }
    }
}

/// One pop transition, interactive or not. Created per pop, never reused.
pub struct InteractiveTransition {
    inner: Rc<TransitionInner>,
}

impl InteractiveTransition {
    /// Prepares the animator and starts tracking at fraction zero.
    ///
    /// `on_complete` fires exactly once, on the frame the transition
    /// resolves; a prepare that cannot resolve its views still resolves the
    /// transition, just without visuals.
    pub fn begin(
        animator: Rc<RefCell<PopTransitionAnimator>>,
        ctx: TransitionContext,
        runtime: &RuntimeHandle,
        on_complete: impl FnOnce(TransitionOutcome) + 'static,
    ) -> Self {
        animator.borrow_mut().prepare(&ctx);
        let inner = Rc::new(TransitionInner {
            animator,
            ctx,
            fraction: Cell::new(0.0),
            phase: Cell::new(RunnerPhase::Seeking),
            timeline: TimelineAnimation::new(runtime.clone()),
            handle: Rc::new(RefCell::new(HandleState {
                outcome: None,
                waker: None,
            })),
            on_complete: RefCell::new(Some(Box::new(on_complete))),
        });
        Self { inner }
    }

    pub fn is_interactive(&self) -> bool {
        self.inner.ctx.is_interactive
    }

    pub fn percent_complete(&self) -> f32 {
        self.inner.fraction.get()
    }

    /// Seeks the animation directly to `fraction` (linear by contract while
    /// the gesture drives it).
    pub fn update(&self, fraction: f32) {
        if self.inner.phase.get() != RunnerPhase::Seeking {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.inner.fraction.set(fraction);
        self.inner.animator.borrow().seek(&self.inner.ctx, fraction);
    }

    /// Animates the remaining portion to completion.
    pub fn finish(&self) {
        self.run_timeline(1.0, TransitionOutcome::Completed);
    }

    /// Animates back to the original state.
    pub fn cancel(&self) {
        self.run_timeline(0.0, TransitionOutcome::Cancelled);
    }

    /// Future resolving with this transition's outcome.
    pub fn handle(&self) -> TransitionHandle {
        TransitionHandle {
            state: Rc::clone(&self.inner.handle),
        }
    }

    fn run_timeline(&self, target: f32, outcome: TransitionOutcome) {
        if self.inner.phase.get() != RunnerPhase::Seeking {
            return;
        }
        self.inner.phase.set(RunnerPhase::Animating);

        let fraction = self.inner.fraction.get();
        let total = self
            .inner
            .animator
            .borrow()
            .duration_millis(self.inner.ctx.is_interactive);
        let remaining = (target - fraction).abs();
        let duration = (total as f32 * remaining).round() as u64;
        let easing = if self.inner.ctx.is_interactive {
            Easing::Linear
        } else {
            Easing::EaseInOut
        };

        let animator = Rc::clone(&self.inner.animator);
        let ctx = self.inner.ctx.clone();
        let weak_frames = Rc::downgrade(&self.inner);
        let on_frame = move |value: f32| {
            if let Some(inner) = weak_frames.upgrade() {
                inner.fraction.set(value);
            }
            animator.borrow().seek(&ctx, value);
        };

        let weak = Rc::downgrade(&self.inner);
        let on_end = move || {
            if let Some(inner) = weak.upgrade() {
                TransitionInner::resolve(&inner, outcome);
            }
        };

        self.inner.timeline.start(
            fraction,
            target,
            AnimationSpec::tween(duration, easing),
            on_frame,
            on_end,
        );
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
