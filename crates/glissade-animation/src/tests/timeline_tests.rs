use super::*;

use crate::Easing;
use glissade_core::{DefaultScheduler, Runtime};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

const FRAME: u64 = 16_666_667; // ~60 FPS

fn runtime() -> Runtime {
    Runtime::new(Arc::new(DefaultScheduler))
}

#[test]
fn timeline_reaches_target_and_reports_intermediate_values() {
    let runtime = runtime();
    let handle = runtime.handle();
    let timeline = TimelineAnimation::new(handle.clone());

    let samples = Rc::new(RefCell::new(Vec::new()));
    let finished = Rc::new(Cell::new(false));
    let samples_in_frame = Rc::clone(&samples);
    let finished_flag = Rc::clone(&finished);

    timeline.start(
        0.0,
        1.0,
        AnimationSpec::linear(100),
        move |value| samples_in_frame.borrow_mut().push(value),
        move || finished_flag.set(true),
    );

    let mut frame_time = 0u64;
    for _ in 0..16 {
        if !timeline.is_running() && finished.get() {
            break;
        }
        handle.drain_frame_callbacks(frame_time);
        frame_time += FRAME;
    }

    assert!(finished.get());
    let samples = samples.borrow();
    assert!(samples.iter().any(|v| *v > 0.0 && *v < 1.0));
    assert_eq!(*samples.last().unwrap(), 1.0);
    assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn zero_duration_tween_completes_in_one_frame() {
    let runtime = runtime();
    let handle = runtime.handle();
    let timeline = TimelineAnimation::new(handle.clone());

    let last = Rc::new(Cell::new(-1.0f32));
    let finished = Rc::new(Cell::new(false));
    let last_in_frame = Rc::clone(&last);
    let finished_flag = Rc::clone(&finished);

    timeline.start(
        0.6,
        1.0,
        AnimationSpec::linear(0),
        move |value| last_in_frame.set(value),
        move || finished_flag.set(true),
    );

    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(FRAME);

    assert!(finished.get());
    assert_eq!(last.get(), 1.0);
}

#[test]
fn cancel_stops_frames_and_suppresses_on_end() {
    let runtime = runtime();
    let handle = runtime.handle();
    let timeline = TimelineAnimation::new(handle.clone());

    let finished = Rc::new(Cell::new(false));
    let finished_flag = Rc::clone(&finished);

    timeline.start(0.0, 1.0, AnimationSpec::linear(100), |_| {}, move || {
        finished_flag.set(true)
    });
    handle.drain_frame_callbacks(0);
    timeline.cancel();

    for frame in 1..=10 {
        handle.drain_frame_callbacks(frame * FRAME);
    }

    assert!(!finished.get());
    assert!(!timeline.is_running());
}

#[test]
fn restart_supersedes_previous_timeline() {
    let runtime = runtime();
    let handle = runtime.handle();
    let timeline = TimelineAnimation::new(handle.clone());

    let first_finished = Rc::new(Cell::new(false));
    let first_flag = Rc::clone(&first_finished);
    timeline.start(0.0, 1.0, AnimationSpec::linear(100), |_| {}, move || {
        first_flag.set(true)
    });
    handle.drain_frame_callbacks(0);

    let second_finished = Rc::new(Cell::new(false));
    let second_flag = Rc::clone(&second_finished);
    timeline.start(1.0, 0.0, AnimationSpec::linear(50), |_| {}, move || {
        second_flag.set(true)
    });

    let mut frame_time = FRAME;
    for _ in 0..10 {
        handle.drain_frame_callbacks(frame_time);
        frame_time += FRAME;
    }

    assert!(!first_finished.get());
    assert!(second_finished.get());
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!((end - 1.0).abs() < 0.01, "End should be ~1 for {:?}", easing);
    }
}

#[test]
fn ease_in_out_is_symmetric_about_midpoint() {
    let quarter = Easing::EaseInOut.transform(0.25);
    let three_quarters = Easing::EaseInOut.transform(0.75);
    assert!((quarter + three_quarters - 1.0).abs() < 0.01);
    assert!((Easing::EaseInOut.transform(0.5) - 0.5).abs() < 0.01);
}
