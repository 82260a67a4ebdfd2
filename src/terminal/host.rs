//! `TerminalHost`: Presents panel frames on the terminal's alternate screen.

use super::output::OutputBuffer;
use super::CellMapping;
use crate::buffer::{PixelBuffer, Rgb};
use crate::host::WindowHost;
use crate::layout::{Rect, Size};
use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};

/// A window host whose panel is the whole terminal.
pub struct TerminalHost {
    /// Terminal stdout handle.
    stdout: Stdout,
    /// Pre-allocated output buffer.
    output: OutputBuffer,
    mapping: CellMapping,
    /// Whether the terminal is currently in panel mode.
    active: bool,
}

impl TerminalHost {
    /// Create a host showing one displayed pixel per `scale`×`scale` panel
    /// pixels. Nothing is touched until the panel is created.
    pub fn new(scale: u32) -> Self {
        Self {
            stdout: io::stdout(),
            output: OutputBuffer::new(),
            mapping: CellMapping::new(scale),
            active: false,
        }
    }

    /// The cell/pixel mapping in use.
    pub const fn mapping(&self) -> CellMapping {
        self.mapping
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            cursor::Show,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }
}

impl WindowHost for TerminalHost {
    fn create_panel(&mut self) -> io::Result<Size> {
        let (cols, rows) = terminal::size()?;

        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide
        )?;

        let size = self.mapping.panel_size(cols, rows);
        tracing::info!(cols, rows, panel = ?size, scale = self.mapping.scale(), "terminal panel created");
        Ok(size)
    }

    fn blit(&mut self, source: &PixelBuffer, area: Rect) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let cells = self
            .mapping
            .cells_covering(area)
            .intersection(&Rect::new(0, 0, u32::from(cols), u32::from(rows)));
        if cells.is_empty() {
            return Ok(());
        }

        let pixel = |col: u32, pixel_row: u32| {
            let (x, y) = self.mapping.sample(col, pixel_row);
            source.get(x, y).unwrap_or(Rgb::BLACK)
        };

        self.output.clear();
        for row in cells.y..cells.bottom() {
            self.output.cursor_move(cells.x, row);
            for col in cells.x..cells.right() {
                self.output.half_block(pixel(col, 2 * row), pixel(col, 2 * row + 1));
            }
        }
        self.output.reset_attrs();
        self.output.flush_to(&mut self.stdout)
    }

    fn destroy_panel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        self.destroy_panel();
    }
}
