//! Polar/cartesian and angle unit conversions.

/// Convert a polar offset into a cartesian `(dx, dy)` pair.
///
/// Total over all reals. A negative `length` points the opposite way.
#[inline]
pub fn from_polar(length: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (length * cos, length * sin)
}

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
