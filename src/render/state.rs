//! `RenderState`: Everything a frame is drawn from.

use super::pipeline::{draw_scene, DrawStyle};
use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::geometry::Position;
use crate::layout::Size;
use crate::scene::Scene;

/// Cursor, scene and off-screen buffer of one running panel.
///
/// Owned by exactly one controller. Every field is replaced as a whole:
/// the cursor on pointer motion, the buffer on resize.
#[derive(Debug)]
pub struct RenderState {
    cursor: Position,
    scene: Scene,
    buffer: PixelBuffer,
}

impl RenderState {
    /// Create a state with the cursor at the origin and a cleared buffer
    /// of `size`.
    ///
    /// # Errors
    ///
    /// Fails if the off-screen buffer cannot be allocated.
    pub fn new(scene: Scene, size: Size) -> Result<Self> {
        Ok(Self {
            cursor: Position::ORIGIN,
            scene,
            buffer: PixelBuffer::try_new(size)?,
        })
    }

    /// Current cursor position.
    #[inline]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// Replace the cursor position.
    #[inline]
    pub const fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// The walls being drawn.
    #[inline]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The off-screen buffer.
    #[inline]
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Redraw the off-screen buffer from the cursor and scene.
    pub(crate) fn compose(&mut self, style: &DrawStyle) {
        draw_scene(&mut self.buffer, self.cursor, &self.scene, style);
    }

    /// Size of the off-screen buffer.
    #[inline]
    pub const fn buffer_size(&self) -> Size {
        self.buffer.size()
    }

    /// Install a new off-screen buffer, returning the one it replaces.
    pub(crate) fn replace_buffer(&mut self, buffer: PixelBuffer) -> PixelBuffer {
        std::mem::replace(&mut self.buffer, buffer)
    }
}
