//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::buffer::Rgb;
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering. The last emitted colors are remembered so
/// runs of equal pixels do not repeat SGR sequences.
pub struct OutputBuffer {
    data: Vec<u8>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            fg: None,
            bg: None,
        }
    }

    /// Create a buffer sized for a large terminal frame (64KB).
    pub fn new() -> Self {
        Self::with_capacity(65536)
    }

    /// Clear the buffer for reuse and forget the emitted colors.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
        self.fg = None;
        self.bg = None;
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u32, y: u32) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    /// Set foreground color (true color), skipping repeats.
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        if self.fg != Some(color) {
            let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
            self.fg = Some(color);
        }
    }

    /// Set background color (true color), skipping repeats.
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        if self.bg != Some(color) {
            let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
            self.bg = Some(color);
        }
    }

    /// Emit one cell showing `top` over `bottom`.
    #[inline]
    pub fn half_block(&mut self, top: Rgb, bottom: Rgb) {
        self.set_fg(top);
        self.set_bg(bottom);
        self.data.extend_from_slice("▀".as_bytes());
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
        self.fg = None;
        self.bg = None;
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
