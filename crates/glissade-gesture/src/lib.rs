//! Pointer event model and directional drag recognition.
//!
//! Raw pointer samples flow through a [`DirectionalDragRecognizer`], which
//! either recognizes them into pan samples (with translation measured from the
//! session start) or swallows them when the drag's dominant direction does not
//! match the configured one.

mod direction;
mod event;
mod recognizer;

pub use direction::PanDirection;
pub use event::{GesturePhase, PanSample, PointerSample};
pub use recognizer::DirectionalDragRecognizer;
