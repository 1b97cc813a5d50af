//! Frame-driven scalar timeline.
//!
//! Drives a single f32 value between two fractions using the runtime's frame
//! callback system, invoking a per-frame apply callback and a one-shot end
//! callback.

use glissade_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::easing::{AnimationSpec, Lerp};

struct TimelineState {
    start_fraction: f32,
    target_fraction: f32,
    spec: AnimationSpec,
    /// Frame time when the animation started (used for deterministic timing).
    start_time_nanos: Cell<Option<u64>>,
    /// Current frame callback registration (kept alive to continue animation).
    registration: Option<FrameCallbackRegistration>,
    is_running: Cell<bool>,
}

/// Schedules the next timeline frame. Called recursively to drive the
/// animation forward until the linear progress reaches 1.
fn schedule_next_frame<F, G>(
    state: Rc<RefCell<Option<TimelineState>>>,
    frame_clock: FrameClock,
    on_frame: F,
    on_end: G,
) where
    F: Fn(f32) + 'static,
    G: FnOnce() + 'static,
{
    let state_for_closure = state.clone();
    let frame_clock_for_closure = frame_clock.clone();
    let on_end = RefCell::new(Some(on_end));

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let should_continue = {
            let state_guard = state_for_closure.borrow();
            let Some(timeline) = state_guard.as_ref() else {
                return;
            };

            if !timeline.is_running.get() {
                return;
            }

            let start_time = match timeline.start_time_nanos.get() {
                Some(value) => value,
                None => {
                    timeline.start_time_nanos.set(Some(frame_time_nanos));
                    frame_time_nanos
                }
            };

            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (timeline.spec.duration_millis * 1_000_000).max(1);
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let eased = timeline.spec.easing.transform(linear_progress);
            let value = timeline
                .start_fraction
                .lerp(&timeline.target_fraction, eased);

            on_frame(value);

            if linear_progress >= 1.0 {
                timeline.is_running.set(false);
            }

            linear_progress < 1.0
        };

        if should_continue {
            if let Some(on_end_fn) = on_end.borrow_mut().take() {
                schedule_next_frame(
                    state_for_closure.clone(),
                    frame_clock_for_closure.clone(),
                    on_frame,
                    on_end_fn,
                );
            }
        } else if let Some(end_fn) = on_end.borrow_mut().take() {
            end_fn();
        }
    });

    // Store the registration to keep the callback alive.
    if let Some(timeline) = state.borrow_mut().as_mut() {
        timeline.registration = Some(registration);
    }
}

/// Drives a scalar fraction along a tween on the runtime's frame clock.
pub struct TimelineAnimation {
    state: Rc<RefCell<Option<TimelineState>>>,
    frame_clock: FrameClock,
}

impl TimelineAnimation {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock: runtime.frame_clock(),
        }
    }

    /// Starts animating from `start_fraction` to `target_fraction`.
    ///
    /// `on_frame` receives the eased value each frame, including the final
    /// target value exactly once before `on_end` runs. A degenerate tween
    /// (zero remaining duration) still takes one frame to complete.
    pub fn start<F, G>(
        &self,
        start_fraction: f32,
        target_fraction: f32,
        spec: AnimationSpec,
        on_frame: F,
        on_end: G,
    ) where
        F: Fn(f32) + 'static,
        G: FnOnce() + 'static,
    {
        self.cancel();

        let timeline = TimelineState {
            start_fraction,
            target_fraction,
            spec,
            start_time_nanos: Cell::new(None),
            registration: None,
            is_running: Cell::new(true),
        };
        *self.state.borrow_mut() = Some(timeline);

        schedule_next_frame(self.state.clone(), self.frame_clock.clone(), on_frame, on_end);
    }

    /// Stops the timeline without invoking `on_end`.
    pub fn cancel(&self) {
        if let Some(timeline) = self.state.borrow_mut().take() {
            timeline.is_running.set(false);
            drop(timeline.registration);
        }
    }

    pub fn is_running(&self) -> bool {
        self.state
            .borrow()
            .as_ref()
            .is_some_and(|timeline| timeline.is_running.get())
    }
}

impl Clone for TimelineAnimation {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            frame_clock: self.frame_clock.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/timeline_tests.rs"]
mod tests;
