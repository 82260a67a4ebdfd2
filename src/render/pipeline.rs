//! `DrawPipeline`: Compose a frame off-screen, then present it in one blit.
//!
//! Two entry points:
//! - [`DrawPipeline::render_frame`] redraws the scene and cursor, then blits
//! - [`DrawPipeline::blit_only`] re-presents the last frame untouched

use super::state::RenderState;
use crate::buffer::{PixelBuffer, Rgb};
use crate::error::Result;
use crate::geometry::Position;
use crate::host::WindowHost;
use crate::layout::Rect;
use crate::scene::Scene;
use std::time::Instant;

/// Colors and marker size used when drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStyle {
    /// Color the buffer is cleared to.
    pub background: Rgb,
    /// Fill color of the cursor marker.
    pub marker: Rgb,
    /// Stroke color of the walls.
    pub wall: Rgb,
    /// Radius of the cursor marker in pixels.
    pub marker_radius: i32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            marker: Rgb::RED,
            wall: Rgb::WHITE,
            marker_radius: 5,
        }
    }
}

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Frames composed by `render_frame`.
    pub frames: u64,
    /// Blits issued to the host (frames plus re-presents).
    pub blits: u64,
    /// Average render time in microseconds.
    pub avg_render_us: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

impl RenderStats {
    fn record_frame(&mut self, started: Instant) {
        self.frames += 1;
        self.last_render_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        // Smoothed average
        if self.avg_render_us == 0 {
            self.avg_render_us = self.last_render_us;
        } else {
            self.avg_render_us = (self.avg_render_us * 15 + self.last_render_us) / 16;
        }
    }
}

/// Draw the cursor marker and every wall into `buffer`, after clearing it.
///
/// Coordinates are rounded to device pixels here and nowhere else.
pub fn draw_scene(buffer: &mut PixelBuffer, cursor: Position, scene: &Scene, style: &DrawStyle) {
    buffer.clear(style.background);
    buffer.fill_circle(cursor.rounded(), style.marker_radius, style.marker);
    for wall in scene.iter() {
        buffer.draw_line(wall.point1().rounded(), wall.point2().rounded(), style.wall);
    }
}

/// The double-buffered draw routine of one panel.
#[derive(Debug, Default)]
pub struct DrawPipeline {
    style: DrawStyle,
    stats: RenderStats,
}

impl DrawPipeline {
    /// Create a pipeline drawing with `style`.
    pub fn new(style: DrawStyle) -> Self {
        Self {
            style,
            stats: RenderStats::default(),
        }
    }

    /// The style frames are drawn with.
    pub const fn style(&self) -> &DrawStyle {
        &self.style
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Compose a full frame into the off-screen buffer and present it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to blit.
    pub fn render_frame<H>(&mut self, state: &mut RenderState, host: &mut H) -> Result<()>
    where
        H: WindowHost + ?Sized,
    {
        let started = Instant::now();
        state.compose(&self.style);
        self.present(state.buffer(), host)?;
        self.stats.record_frame(started);
        tracing::trace!(
            frame = self.stats.frames,
            render_us = self.stats.last_render_us,
            "frame rendered"
        );
        Ok(())
    }

    /// Present the existing off-screen buffer without redrawing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to blit.
    pub fn blit_only<H>(&mut self, state: &RenderState, host: &mut H) -> Result<()>
    where
        H: WindowHost + ?Sized,
    {
        self.present(state.buffer(), host)
    }

    /// Clear `buffer` to the background color and present it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to blit.
    pub fn present_cleared<H>(&mut self, buffer: &mut PixelBuffer, host: &mut H) -> Result<()>
    where
        H: WindowHost + ?Sized,
    {
        buffer.clear(self.style.background);
        self.present(buffer, host)
    }

    fn present<H>(&mut self, buffer: &PixelBuffer, host: &mut H) -> Result<()>
    where
        H: WindowHost + ?Sized,
    {
        host.blit(buffer, Rect::from_size(buffer.size()))?;
        self.stats.blits += 1;
        Ok(())
    }
}
