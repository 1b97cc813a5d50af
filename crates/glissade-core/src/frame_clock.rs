use crate::runtime::{FrameCallbackId, RuntimeHandle, TimerId};

/// Clock facade over a runtime's frame callback registry.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    /// Registers a one-shot callback for the next frame, receiving the frame
    /// timestamp in nanoseconds.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let runtime = self.runtime.clone();
        match runtime.register_frame_callback(callback) {
            Some(id) => FrameCallbackRegistration::new(runtime, id),
            None => FrameCallbackRegistration::inactive(runtime),
        }
    }

    /// Registers a one-shot callback firing once `delay_millis` of frame time
    /// has elapsed.
    pub fn with_delay_millis(
        &self,
        delay_millis: u64,
        callback: impl FnOnce(u64) + 'static,
    ) -> TimerRegistration {
        let runtime = self.runtime.clone();
        match runtime.register_timer(delay_millis * 1_000_000, callback) {
            Some(id) => TimerRegistration::new(runtime, id),
            None => TimerRegistration::inactive(runtime),
        }
    }
}

/// Handle to a pending frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(runtime: RuntimeHandle, id: FrameCallbackId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

/// Handle to a pending delayed callback. Dropping it cancels the callback.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    fn new(runtime: RuntimeHandle, id: TimerId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}
