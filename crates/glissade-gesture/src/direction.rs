use glissade_graphics::Point;

/// Cardinal pan directions, in declaration order.
///
/// The order matters: when two axis projections tie for the largest value,
/// the first declared direction wins. That tie-break is inherited behavior,
/// kept as-is rather than tightened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Left,
    Down,
    Right,
}

impl PanDirection {
    /// Returns the dominant direction of a velocity vector, or `None` when the
    /// vector is zero.
    ///
    /// The dominant direction is the one whose signed axis projection is
    /// largest among `[-v.y, -v.x, v.y, v.x]`.
    pub fn from_velocity(velocity: Point) -> Option<PanDirection> {
        if velocity.is_zero() {
            return None;
        }

        let projections = [
            (PanDirection::Up, -velocity.y),
            (PanDirection::Left, -velocity.x),
            (PanDirection::Down, velocity.y),
            (PanDirection::Right, velocity.x),
        ];

        let mut best = projections[0];
        for candidate in &projections[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        Some(best.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(
            PanDirection::from_velocity(Point::new(120.0, 10.0)),
            Some(PanDirection::Right)
        );
        assert_eq!(
            PanDirection::from_velocity(Point::new(-300.0, 90.0)),
            Some(PanDirection::Left)
        );
        assert_eq!(
            PanDirection::from_velocity(Point::new(5.0, -80.0)),
            Some(PanDirection::Up)
        );
        assert_eq!(
            PanDirection::from_velocity(Point::new(-2.0, 44.0)),
            Some(PanDirection::Down)
        );
    }

    #[test]
    fn zero_velocity_has_no_direction() {
        assert_eq!(PanDirection::from_velocity(Point::ZERO), None);
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        // Equal-magnitude diagonal: Down (declared before Right) wins.
        assert_eq!(
            PanDirection::from_velocity(Point::new(50.0, 50.0)),
            Some(PanDirection::Down)
        );
        // Up ties Left: Up is declared first.
        assert_eq!(
            PanDirection::from_velocity(Point::new(-50.0, -50.0)),
            Some(PanDirection::Up)
        );
    }
}
