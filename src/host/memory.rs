//! `MemoryHost`: A headless window host backed by a pixel buffer.
//!
//! Handles are cheap clones sharing one surface, so a test can keep a
//! handle while the panel owns another.

use super::WindowHost;
use crate::buffer::{PixelBuffer, Rgb};
use crate::layout::{Rect, Size};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct Surface {
    /// Size reported to `create_panel`.
    size: Size,
    /// Visible pixels; `None` until created and after destruction.
    pixels: Option<PixelBuffer>,
    blits: u64,
    destroyed: bool,
}

/// In-memory window host.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    surface: Arc<Mutex<Surface>>,
}

impl MemoryHost {
    /// Create a host whose panel will report `size`.
    pub fn new(size: Size) -> Self {
        Self {
            surface: Arc::new(Mutex::new(Surface {
                size,
                pixels: None,
                blits: 0,
                destroyed: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Surface> {
        self.surface.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the visible surface, if the panel exists.
    pub fn snapshot(&self) -> Option<PixelBuffer> {
        self.lock().pixels.clone()
    }

    /// The visible pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.lock().pixels.as_ref()?.get(x, y)
    }

    /// Size of the visible surface, if the panel exists.
    pub fn surface_size(&self) -> Option<Size> {
        self.lock().pixels.as_ref().map(PixelBuffer::size)
    }

    /// Number of blits performed so far.
    pub fn blit_count(&self) -> u64 {
        self.lock().blits
    }

    /// Whether `destroy_panel` has been called.
    pub fn is_destroyed(&self) -> bool {
        self.lock().destroyed
    }
}

impl WindowHost for MemoryHost {
    fn create_panel(&mut self) -> io::Result<Size> {
        let mut surface = self.lock();
        let size = surface.size;
        let pixels = PixelBuffer::try_new(size).map_err(io::Error::other)?;
        surface.pixels = Some(pixels);
        surface.destroyed = false;
        Ok(size)
    }

    /// The surface follows the size of the frames it is given, mirroring a
    /// panel that was resized by its window.
    fn blit(&mut self, source: &PixelBuffer, area: Rect) -> io::Result<()> {
        let mut surface = self.lock();
        let Some(pixels) = surface.pixels.as_mut() else {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "blit to a panel that does not exist",
            ));
        };
        if pixels.size() != source.size() {
            *pixels = PixelBuffer::try_new(source.size()).map_err(io::Error::other)?;
        }
        pixels.copy_rect_from(source, area);
        surface.size = source.size();
        surface.blits += 1;
        Ok(())
    }

    fn destroy_panel(&mut self) {
        let mut surface = self.lock();
        surface.pixels = None;
        surface.destroyed = true;
    }
}
