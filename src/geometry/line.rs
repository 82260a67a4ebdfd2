//! Line: A segment described by an anchor and a polar vector.

use super::position::{Position, Vector};

/// A segment from `position` to `position + vector`.
///
/// Endpoints are derived on every call and never cached, so changing
/// either field moves both endpoints together.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Anchor of the segment.
    pub position: Position,
    /// Offset from the anchor to the far end.
    pub vector: Vector,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub const fn new(position: Position, vector: Vector) -> Self {
        Self { position, vector }
    }

    /// The anchor endpoint.
    #[inline]
    pub const fn point1(&self) -> Position {
        self.position
    }

    /// The far endpoint.
    #[inline]
    pub fn point2(&self) -> Position {
        let (dx, dy) = self.vector.components();
        self.position.offset(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point1_is_anchor() {
        let line = Line::new(Position::new(7.0, 9.0), Vector::new(1.0, 4.0));
        assert_eq!(line.point1(), Position::new(7.0, 9.0));
    }

    #[test]
    fn test_endpoints_follow_mutation() {
        let mut line = Line::new(Position::new(0.0, 0.0), Vector::from_degrees(0.0, 10.0));
        let before = line.point2();
        assert!((before.x - 10.0).abs() < 1e-12);

        line.position = Position::new(5.0, 5.0);
        line.vector = Vector::from_degrees(90.0, 20.0);

        let after = line.point2();
        assert_eq!(line.point1(), Position::new(5.0, 5.0));
        assert!((after.x - 5.0).abs() < 1e-9);
        assert!((after.y - 25.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn point2_matches_polar_offset(
            x in -1.0e4f64..1.0e4,
            y in -1.0e4f64..1.0e4,
            length in -1.0e3f64..1.0e3,
            angle in -10.0f64..10.0,
        ) {
            let p2 = Line::new(Position::new(x, y), Vector::new(angle, length)).point2();
            prop_assert!((p2.x - (x + length * angle.cos())).abs() < 1e-6);
            prop_assert!((p2.y - (y + length * angle.sin())).abs() < 1e-6);
        }
    }
}
