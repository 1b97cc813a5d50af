use glissade_graphics::Point;

/// Lifecycle phase of a gesture event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

/// Raw single-pointer sample delivered by the host.
///
/// `position` is in container coordinates; `velocity` is in units per second
/// at the time of the sample. Multi-pointer input is not modeled: hosts
/// tracking more than one pointer deliver only the first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub phase: GesturePhase,
    pub position: Point,
    pub velocity: Point,
}

impl PointerSample {
    pub fn new(phase: GesturePhase, position: Point, velocity: Point) -> Self {
        Self {
            phase,
            position,
            velocity,
        }
    }
}

/// A recognized pan sample, produced once a drag session passes the direction
/// filter. `translation` is cumulative from the session's start position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSample {
    pub phase: GesturePhase,
    pub translation: Point,
    pub velocity: Point,
}
