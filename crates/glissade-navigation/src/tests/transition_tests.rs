use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use glissade_core::{DefaultScheduler, Runtime};
use glissade_graphics::Rect;

use crate::screen::{ScreenFlags, ScreenView};

const FRAME: u64 = 16_666_667;
const CONTAINER: Rect = Rect::new(0.0, 0.0, 320.0, 568.0);

fn context(interactive: bool) -> TransitionContext {
    TransitionContext {
        container: CONTAINER,
        from_view: Some(ScreenView::new(CONTAINER)),
        to_view: Some(ScreenView::new(CONTAINER)),
        from_flags: ScreenFlags::default(),
        to_flags: ScreenFlags::default(),
        tab_bar: None,
        is_interactive: interactive,
    }
}

fn animator() -> Rc<RefCell<PopTransitionAnimator>> {
    Rc::new(RefCell::new(PopTransitionAnimator::new()))
}

fn poll(handle: &mut TransitionHandle) -> Option<TransitionOutcome> {
    let waker = futures_task::noop_waker();
    let mut cx = Context::from_waker(&waker);
    match Pin::new(handle).poll(&mut cx) {
        Poll::Ready(outcome) => Some(outcome),
        Poll::Pending => None,
    }
}

fn drain_until_resolved(
    runtime: &Runtime,
    handle: &mut TransitionHandle,
    start: u64,
) -> (u64, TransitionOutcome) {
    let runtime_handle = runtime.handle();
    let mut frame_time = start;
    for _ in 0..64 {
        runtime_handle.drain_frame_callbacks(frame_time);
        if let Some(outcome) = poll(handle) {
            return (frame_time, outcome);
        }
        frame_time += FRAME;
    }
    panic!("transition never resolved");
}

#[test]
fn update_seeks_views_directly() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let ctx = context(true);
    let transition =
        InteractiveTransition::begin(animator(), ctx.clone(), &runtime.handle(), |_| {});

    transition.update(0.25);
    assert_eq!(transition.percent_complete(), 0.25);
    let to = ctx.to_view.as_ref().unwrap();
    let from = ctx.from_view.as_ref().unwrap();
    assert_eq!(to.layer().translation_x, -72.0);
    assert_eq!(from.layer().translation_x, 80.0);

    // Out-of-range input clamps rather than overshooting.
    transition.update(1.8);
    assert_eq!(transition.percent_complete(), 1.0);
}

#[test]
fn finish_resolves_completed_and_tears_down() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let completions = Rc::new(Cell::new(0u32));
    let completions_in_callback = Rc::clone(&completions);

    let ctx = context(true);
    let transition = InteractiveTransition::begin(
        animator(),
        ctx.clone(),
        &runtime.handle(),
        move |outcome| {
            assert!(outcome.is_completed());
            completions_in_callback.set(completions_in_callback.get() + 1);
        },
    );
    transition.update(0.6);
    transition.finish();

    let mut handle = transition.handle();
    assert!(poll(&mut handle).is_none());
    let (_, outcome) = drain_until_resolved(&runtime, &mut handle, 0);

    assert_eq!(outcome, TransitionOutcome::Completed);
    assert_eq!(completions.get(), 1);
    let to = ctx.to_view.as_ref().unwrap();
    let from = ctx.from_view.as_ref().unwrap();
    assert!(to.overlays().is_empty());
    assert_eq!(to.layer().translation_x, 0.0);
    assert_eq!(from.layer().translation_x, 0.0);
}

#[test]
fn cancel_resolves_cancelled_and_restores_incoming_view() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let ctx = context(true);
    let transition =
        InteractiveTransition::begin(animator(), ctx.clone(), &runtime.handle(), |_| {});
    transition.update(0.2);
    transition.cancel();

    let mut handle = transition.handle();
    let (_, outcome) = drain_until_resolved(&runtime, &mut handle, 0);

    assert_eq!(outcome, TransitionOutcome::Cancelled);
    let to = ctx.to_view.as_ref().unwrap();
    assert_eq!(to.layer().translation_x, 0.0);
    assert!(to.overlays().is_empty());
}

#[test]
fn finish_duration_scales_with_remaining_fraction() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let runtime_handle = runtime.handle();
    let transition =
        InteractiveTransition::begin(animator(), context(true), &runtime_handle, |_| {});
    transition.update(0.5);
    transition.finish();

    let mut handle = transition.handle();
    // Remaining half of a 300 ms interactive transition: 150 ms.
    runtime_handle.drain_frame_callbacks(0);
    runtime_handle.drain_frame_callbacks(140_000_000);
    assert!(poll(&mut handle).is_none());
    runtime_handle.drain_frame_callbacks(155_000_000);
    assert_eq!(poll(&mut handle), Some(TransitionOutcome::Completed));
}

#[test]
fn second_decision_is_ignored() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let transition =
        InteractiveTransition::begin(animator(), context(true), &runtime.handle(), |_| {});
    transition.update(0.8);
    transition.finish();
    // Late cancel after the finish decision must not flip the outcome.
    transition.cancel();

    let mut handle = transition.handle();
    let (_, outcome) = drain_until_resolved(&runtime, &mut handle, 0);
    assert_eq!(outcome, TransitionOutcome::Completed);
}

#[test]
fn unresolved_views_still_resolve_the_transition() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let mut ctx = context(false);
    ctx.from_view = None;
    let transition = InteractiveTransition::begin(animator(), ctx, &runtime.handle(), |_| {});
    transition.finish();

    let mut handle = transition.handle();
    let (_, outcome) = drain_until_resolved(&runtime, &mut handle, 0);
    assert_eq!(outcome, TransitionOutcome::Completed);
}

#[test]
fn non_interactive_pop_runs_at_stock_duration() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let runtime_handle = runtime.handle();
    let ctx = context(false);
    let transition = InteractiveTransition::begin(animator(), ctx.clone(), &runtime_handle, |_| {});
    transition.finish();

    let mut handle = transition.handle();
    runtime_handle.drain_frame_callbacks(0);
    runtime_handle.drain_frame_callbacks(240_000_000);
    assert!(poll(&mut handle).is_none());

    // Ease-in-out motion: past the midpoint of the duration the outgoing
    // view is beyond half way across.
    let from = ctx.from_view.as_ref().unwrap();
    assert!(from.layer().translation_x > 160.0);

    runtime_handle.drain_frame_callbacks(255_000_000);
    assert_eq!(poll(&mut handle), Some(TransitionOutcome::Completed));
}
