//! Directional drag recognizer.
//!
//! Tracks one drag session at a time and fails the session permanently when
//! the first non-zero velocity sample points away from the required direction.
//! Recognition is late: the recognized `Began` is emitted on the movement that
//! passes the direction check, so a failed session never reaches the handler
//! at all.

use glissade_graphics::Point;

use crate::direction::PanDirection;
use crate::event::{GesturePhase, PanSample, PointerSample};

/// Per-session drag state. Lives from the raw `Began` sample until the
/// session ends, then is dropped so the next touch sequence starts clean.
struct DragSession {
    start_position: Point,
    has_determined_direction: bool,
    failed: bool,
    recognized: bool,
}

impl DragSession {
    fn new(start_position: Point) -> Self {
        Self {
            start_position,
            has_determined_direction: false,
            failed: false,
            recognized: false,
        }
    }

    fn translation(&self, position: Point) -> Point {
        position.offset_from(self.start_position)
    }
}

/// Single-pointer pan recognizer constrained to one direction.
pub struct DirectionalDragRecognizer {
    required_direction: PanDirection,
    enabled: bool,
    session: Option<DragSession>,
}

impl DirectionalDragRecognizer {
    pub fn new(required_direction: PanDirection) -> Self {
        Self {
            required_direction,
            enabled: true,
            session: None,
        }
    }

    pub fn required_direction(&self) -> PanDirection {
        self.required_direction
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables recognition. Disabling tears down any in-flight
    /// session, so the next touch sequence starts from scratch.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.session = None;
        }
        self.enabled = enabled;
    }

    /// True once the current session has sampled a non-zero velocity.
    pub fn has_determined_direction(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.has_determined_direction)
    }

    /// True when the current session failed the direction check.
    pub fn is_failed(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.failed)
    }

    /// Feeds one raw pointer sample through the recognizer.
    ///
    /// Returns the recognized pan sample to deliver, or `None` when the
    /// sample is swallowed (recognizer disabled, session failed, or direction
    /// still pending).
    pub fn filter(&mut self, sample: &PointerSample) -> Option<PanSample> {
        if !self.enabled {
            return None;
        }

        match sample.phase {
            GesturePhase::Began => {
                self.session = Some(DragSession::new(sample.position));
                None
            }
            GesturePhase::Changed => {
                let required = self.required_direction;
                let session = self.session.as_mut()?;
                if session.failed {
                    return None;
                }

                // Check direction only on the first non-zero velocity sample.
                if !session.has_determined_direction {
                    let direction = PanDirection::from_velocity(sample.velocity)?;
                    session.has_determined_direction = true;
                    if direction != required {
                        session.failed = true;
                        log::debug!(
                            "drag rejected: dominant direction {:?}, required {:?}",
                            direction,
                            required
                        );
                        return None;
                    }
                }

                let translation = session.translation(sample.position);
                let phase = if session.recognized {
                    GesturePhase::Changed
                } else {
                    session.recognized = true;
                    log::trace!("drag recognized toward {:?}", required);
                    GesturePhase::Began
                };
                Some(PanSample {
                    phase,
                    translation,
                    velocity: sample.velocity,
                })
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                let session = self.session.take()?;
                if !session.recognized {
                    return None;
                }
                Some(PanSample {
                    phase: sample.phase,
                    translation: session.translation(sample.position),
                    velocity: sample.velocity,
                })
            }
            GesturePhase::Failed => {
                self.session = None;
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/recognizer_tests.rs"]
mod tests;
