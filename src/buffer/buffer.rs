//! PixelBuffer: A grid of pixels used as the off-screen draw target.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Pixels are stored in row-major order.

use super::color::Rgb;
use crate::error::{PanelError, Result};
use crate::layout::{Rect, Size};

/// A grid of pixels.
///
/// The buffer stores pixels in a contiguous `Vec` for cache efficiency.
/// Access is in row-major order: `index = y * width + x`.
///
/// Allocation goes through [`PixelBuffer::try_new`] so that running out of
/// memory surfaces as [`PanelError::BufferAllocation`] instead of aborting.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Contiguous pixel storage (row-major order).
    pixels: Vec<Rgb>,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
}

impl PixelBuffer {
    /// Allocate a buffer of the given size, filled with black.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::BufferAllocation`] if the pixel storage cannot
    /// be reserved.
    pub fn try_new(size: Size) -> Result<Self> {
        Self::try_filled(size, Rgb::BLACK)
    }

    /// Allocate a buffer of the given size, filled with `color`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::BufferAllocation`] if the pixel storage cannot
    /// be reserved.
    pub fn try_filled(size: Size, color: Rgb) -> Result<Self> {
        let failed = || PanelError::BufferAllocation {
            width: size.width,
            height: size.height,
        };
        let len = usize::try_from(size.area()).map_err(|_| failed())?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| failed())?;
        pixels.resize(len, color);

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the buffer size.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get a reference to the underlying pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at signed device coordinates.
    ///
    /// Returns `false` (and draws nothing) if the point is off the buffer.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = color;
            true
        } else {
            false
        }
    }

    /// Fill the entire buffer with one color.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Check whether every pixel has the given color.
    pub fn is_cleared_to(&self, color: Rgb) -> bool {
        self.pixels.iter().all(|&p| p == color)
    }

    /// Fill the horizontal span `x1..=x2` on row `y`, clipped to the buffer.
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgb) {
        let Ok(y) = u32::try_from(y) else {
            return;
        };
        if y >= self.height || self.width == 0 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0).unsigned_abs();
        let Ok(end) = u32::try_from(x2) else {
            return;
        };
        let end = end.min(self.width - 1);
        if start > end {
            return;
        }

        let row = (y as usize) * (self.width as usize);
        self.pixels[row + start as usize..=row + end as usize].fill(color);
    }

    /// Copy `area` of `source` into the same area of `self`.
    ///
    /// The area is clipped to both buffers. This is the blit primitive used
    /// to move a finished frame onto a visible surface.
    pub fn copy_rect_from(&mut self, source: &Self, area: Rect) {
        let area = area
            .intersection(&Rect::from_size(self.size()))
            .intersection(&Rect::from_size(source.size()));
        if area.is_empty() {
            return;
        }

        let span = area.width as usize;
        for y in area.y..area.bottom() {
            let (Some(dst), Some(src)) = (self.index_of(area.x, y), source.index_of(area.x, y))
            else {
                continue;
            };
            self.pixels[dst..dst + span].copy_from_slice(&source.pixels[src..src + span]);
        }
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Get memory usage in bytes (approximate).
    pub fn memory_usage(&self) -> usize {
        self.pixels.capacity() * std::mem::size_of::<Rgb>() + std::mem::size_of::<Self>()
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("memory_bytes", &self.memory_usage())
            .finish()
    }
}
