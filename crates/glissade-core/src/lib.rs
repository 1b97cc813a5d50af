//! Runtime services for Glissade.
//!
//! Hosts own the event loop and feed time into the runtime by calling
//! [`RuntimeHandle::drain_frame_callbacks`] with a frame timestamp. Everything
//! scheduled here — per-frame animation steps and delayed one-shot callbacks —
//! fires from that single entry point, which keeps gesture, animation, and
//! timer handling on one thread and makes tests fully deterministic.

pub mod frame_clock;
pub mod platform;
pub mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock, TimerRegistration};
pub use platform::{Clock, RuntimeScheduler, SystemClock};
pub use runtime::{DefaultScheduler, FrameCallbackId, Runtime, RuntimeHandle, TimerId};
