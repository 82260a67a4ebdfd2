//! Buffer module: Pixel storage for the double-buffered draw pipeline.
//!
//! This module contains:
//! - [`Rgb`]: True-color pixel representation
//! - [`PixelBuffer`]: A grid of pixels used as off-screen target and surface
//! - raster routines on [`PixelBuffer`]: clipped line stroking and filled circles

#[allow(clippy::module_inception)]
mod buffer;
mod color;
mod raster;

pub use buffer::PixelBuffer;
pub use color::Rgb;
