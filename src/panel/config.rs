//! Configuration for a panel.

use crate::layout::Size;
use crate::render::DrawStyle;
use std::time::Duration;

/// Default redraw cadence in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 20;

/// Smallest width and height an off-screen buffer is allocated with.
pub const MIN_BUFFER_EDGE: u32 = 30;

/// Configuration for a panel.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Time between redraw ticks.
    pub tick_interval: Duration,
    /// Off-screen buffers are never smaller than this.
    pub min_buffer_size: Size,
    /// Colors and marker size.
    pub style: DrawStyle,
    /// Capacity of the host event channel.
    pub event_capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            min_buffer_size: Size::new(MIN_BUFFER_EDGE, MIN_BUFFER_EDGE),
            style: DrawStyle::default(),
            event_capacity: 64,
        }
    }
}

impl PanelConfig {
    /// Set the redraw cadence. Zero is raised to one millisecond.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, millis: u64) -> Self {
        self.tick_interval = Duration::from_millis(millis.max(1));
        self
    }

    /// Set the drawing style.
    #[must_use]
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// Size of the off-screen buffer for a panel of `requested` size.
    pub fn buffer_size_for(&self, requested: Size) -> Size {
        requested.at_least(self.min_buffer_size)
    }
}
