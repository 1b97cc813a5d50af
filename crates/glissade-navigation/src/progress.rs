//! Gesture-to-progress state machine.
//!
//! Converts an in-progress drag into a completion fraction and turns the
//! release into a finish-or-cancel decision. `Idle → Active → {Completing,
//! Cancelling} → Idle`; at most one transition's progress exists at a time.

use glissade_graphics::Point;

use crate::metrics::FINISH_THRESHOLD;

/// Live progress of one interactive transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionProgress {
    pub completion_fraction: f32,
    pub is_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Active,
    Completing,
    Cancelling,
}

/// What to do with the running transition when the finger lifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    Finish,
    Cancel,
}

pub struct TransitionProgressController {
    phase: Phase,
    progress: Option<TransitionProgress>,
}

impl TransitionProgressController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            progress: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn completion_fraction(&self) -> Option<f32> {
        self.progress.map(|progress| progress.completion_fraction)
    }

    /// Starts tracking a new interactive transition.
    ///
    /// Only allowed from idle with at least two stacked screens; any other
    /// begin is refused and the session's remaining events become no-ops.
    pub fn begin(&mut self, stack_depth: usize) -> bool {
        if self.phase != Phase::Idle || stack_depth <= 1 {
            return false;
        }
        self.phase = Phase::Active;
        self.progress = Some(TransitionProgress {
            completion_fraction: 0.0,
            is_active: true,
        });
        true
    }

    /// Folds a new cumulative translation into the completion fraction.
    ///
    /// Progress is horizontal and one-directional: a leftward (negative)
    /// translation clamps to zero rather than inverting.
    pub fn update(&mut self, translation: Point, container_width: f32) -> Option<f32> {
        if self.phase != Phase::Active {
            return None;
        }
        let fraction = if translation.x > 0.0 && container_width > 0.0 {
            (translation.x / container_width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if let Some(progress) = self.progress.as_mut() {
            progress.completion_fraction = fraction;
        }
        Some(fraction)
    }

    /// Decides the outcome when the gesture ends or is cancelled by the
    /// system. Strictly more than half the width finishes; exactly half
    /// cancels.
    pub fn release(&mut self) -> Option<ReleaseDecision> {
        if self.phase != Phase::Active {
            return None;
        }
        let fraction = self
            .progress
            .map(|progress| progress.completion_fraction)
            .unwrap_or(0.0);
        if fraction > FINISH_THRESHOLD {
            self.phase = Phase::Completing;
            Some(ReleaseDecision::Finish)
        } else {
            self.phase = Phase::Cancelling;
            Some(ReleaseDecision::Cancel)
        }
    }

    /// Called when the transition's animation resolves, on either outcome.
    pub fn transition_resolved(&mut self) {
        self.phase = Phase::Idle;
        self.progress = None;
    }
}

impl Default for TransitionProgressController {
    fn default() -> Self {
        Self::new()
    }
}
