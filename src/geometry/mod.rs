//! Geometry: Plain-value 2D primitives for the scene.
//!
//! Everything here is pure and `Copy`:
//! - [`Position`]: a cartesian point
//! - [`Vector`]: a polar offset (angle in radians, length)
//! - [`Line`]: a segment anchored at a position and extended by a vector
//!
//! All storage is floating point. Conversion to device pixels happens only
//! at the draw boundary via [`Position::rounded`].

mod line;
mod polar;
mod position;

pub use line::Line;
pub use polar::{from_polar, to_radians};
pub use position::{Position, Vector};
