//! Single-threaded runtime with frame callbacks and delayed callbacks.
//!
//! The registry mirrors a frame-driven UI runtime: callbacks are id-keyed so
//! registrations can be cancelled, and everything fires inside
//! [`RuntimeHandle::drain_frame_callbacks`], which the host calls once per
//! frame with the frame timestamp in nanoseconds.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;

pub type FrameCallbackId = u64;
pub type TimerId = u64;

/// Scheduler for hosts that poll the runtime themselves and need no wakeup.
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct TimerEntry {
    id: TimerId,
    deadline_nanos: u64,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<FrameCallbackId>,
    timers: RefCell<Vec<TimerEntry>>,
    next_timer_id: Cell<TimerId>,
    last_frame_time_nanos: Cell<u64>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            timers: RefCell::new(Vec::new()),
            next_timer_id: Cell::new(1),
            last_frame_time_nanos: Cell::new(0),
        }
    }

    fn register_frame_callback(
        &self,
        callback: Box<dyn FnOnce(u64) + 'static>,
    ) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.scheduler.schedule_frame();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    /// Registers a one-shot callback firing on the first frame whose timestamp
    /// reaches `last_frame_time + delay`.
    fn register_timer(&self, delay_nanos: u64, callback: Box<dyn FnOnce(u64) + 'static>) -> TimerId {
        let id = self.next_timer_id.get();
        self.next_timer_id.set(id + 1);
        let deadline_nanos = self.last_frame_time_nanos.get().saturating_add(delay_nanos);
        self.timers.borrow_mut().push(TimerEntry {
            id,
            deadline_nanos,
            callback: Some(callback),
        });
        self.scheduler.schedule_frame();
        id
    }

    fn cancel_timer(&self, id: TimerId) {
        let mut timers = self.timers.borrow_mut();
        if let Some(index) = timers.iter().position(|entry| entry.id == id) {
            timers.remove(index);
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn has_timers(&self) -> bool {
        !self.timers.borrow().is_empty()
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.last_frame_time_nanos.set(frame_time_nanos);

        // Drain outside the borrow: callbacks are free to register new
        // callbacks or timers for the next frame.
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        for callback in pending {
            callback(frame_time_nanos);
        }

        let mut due: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::new();
        {
            let mut timers = self.timers.borrow_mut();
            let mut index = 0;
            while index < timers.len() {
                if timers[index].deadline_nanos <= frame_time_nanos {
                    let mut entry = timers.remove(index);
                    if let Some(callback) = entry.callback.take() {
                        due.push(callback);
                    }
                } else {
                    index += 1;
                }
            }
        }
        for callback in due {
            callback(frame_time_nanos);
        }
    }
}

#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Arc::new(DefaultScheduler))
    }
}

/// Weak handle onto a [`Runtime`]. Registration through a handle whose runtime
/// is gone is a no-op.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    pub fn register_timer(
        &self,
        delay_nanos: u64,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<TimerId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_timer(delay_nanos, Box::new(callback)))
    }

    pub fn cancel_timer(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_timer(id);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.has_frame_callbacks())
    }

    pub fn has_timers(&self) -> bool {
        self.inner.upgrade().is_some_and(|inner| inner.has_timers())
    }

    /// Fires all registered frame callbacks, then every timer whose deadline
    /// has been reached, using `frame_time_nanos` as the current time.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    /// Timestamp of the most recent drained frame.
    pub fn last_frame_time_nanos(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.last_frame_time_nanos.get())
            .unwrap_or(0)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
