//! Layout module: Integer rectangles and sizes in device pixels.
//!
//! Used to describe panel sizes, off-screen buffer extents and the
//! areas copied during a blit.

mod rect;

pub use rect::{Rect, Size};
