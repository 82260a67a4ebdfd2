//! Host: The narrow interface between the panel core and a window system.
//!
//! A window host owns the visible surface. The core never draws to it
//! directly; it only asks the host to copy finished off-screen frames.
//!
//! ```text
//! ┌──────────────┐  PanelEvent   ┌─────────────────┐  blit(buffer)  ┌─────────────┐
//! │ host adapter │ ────────────▶ │ PanelController │ ─────────────▶ │ WindowHost  │
//! └──────────────┘               └─────────────────┘                └─────────────┘
//! ```
//!
//! Event delivery is the adapter's job: it translates native events into
//! [`PanelEvent`](crate::actor::PanelEvent)s and sends them to the panel.

mod memory;

pub use memory::MemoryHost;

use crate::buffer::PixelBuffer;
use crate::layout::{Rect, Size};
use std::io;

/// A window system surface the panel can present frames on.
pub trait WindowHost: Send {
    /// Create the panel surface and report its current size.
    fn create_panel(&mut self) -> io::Result<Size>;

    /// Copy `area` of the off-screen `source` onto the visible surface.
    fn blit(&mut self, source: &PixelBuffer, area: Rect) -> io::Result<()>;

    /// Destroy the panel surface. Must tolerate being called once only.
    fn destroy_panel(&mut self);
}

impl<H: WindowHost + ?Sized> WindowHost for Box<H> {
    fn create_panel(&mut self) -> io::Result<Size> {
        (**self).create_panel()
    }

    fn blit(&mut self, source: &PixelBuffer, area: Rect) -> io::Result<()> {
        (**self).blit(source, area)
    }

    fn destroy_panel(&mut self) {
        (**self).destroy_panel();
    }
}
