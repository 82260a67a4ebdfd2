//! Position and Vector value types.

use super::polar::{from_polar, to_radians};

/// A cartesian point in scene coordinates.
///
/// Positions are values: updates replace the whole point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward, like device pixels).
    pub y: f64,
}

impl Position {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this position moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Round to the nearest device pixel.
    ///
    /// Halves round away from zero; values outside `i32` saturate.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// A polar offset: a direction in radians and a length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Direction in radians, measured from the +x axis toward +y.
    pub angle: f64,
    /// Length of the offset.
    pub length: f64,
}

impl Vector {
    /// Create a vector from an angle in radians and a length.
    #[inline]
    pub const fn new(angle: f64, length: f64) -> Self {
        Self { angle, length }
    }

    /// Create a vector from an angle in degrees and a length.
    #[inline]
    pub fn from_degrees(degrees: f64, length: f64) -> Self {
        Self::new(to_radians(degrees), length)
    }

    /// The cartesian `(dx, dy)` this vector spans.
    #[inline]
    pub fn components(self) -> (f64, f64) {
        from_polar(self.length, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_half_away_from_zero() {
        assert_eq!(Position::new(1.5, -1.5).rounded(), (2, -2));
        assert_eq!(Position::new(149.6, 150.4).rounded(), (150, 150));
    }

    #[test]
    fn test_rounded_saturates() {
        assert_eq!(Position::new(1e12, -1e12).rounded(), (i32::MAX, i32::MIN));
    }

    #[test]
    fn test_offset_returns_new_value() {
        let origin = Position::ORIGIN;
        let moved = origin.offset(3.0, 4.0);
        assert_eq!(origin, Position::new(0.0, 0.0));
        assert_eq!(moved, Position::new(3.0, 4.0));
    }

    #[test]
    fn test_vector_from_degrees() {
        let (dx, dy) = Vector::from_degrees(90.0, 2.0).components();
        assert!(dx.abs() < 1e-12);
        assert!((dy - 2.0).abs() < 1e-12);
    }
}
