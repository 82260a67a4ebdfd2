//! Message types for actor communication.
//!
//! [`PanelEvent`] is the protocol between a window host adapter and the
//! panel. Host adapters translate native events into these variants.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

/// Events delivered to a running panel.
///
/// The enum is non-exhaustive: new host notifications may be added, and a
/// panel ignores any variant it has no behavior for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum PanelEvent {
    /// The panel was resized.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },

    /// The pointer moved over the panel.
    PointerMoved {
        /// X coordinate in panel pixels.
        x: f64,
        /// Y coordinate in panel pixels.
        y: f64,
    },

    /// A mouse button was pressed.
    PointerPressed(MouseButton),

    /// A mouse button was released.
    PointerReleased(MouseButton),

    /// The host asks for the surface to be repainted.
    Expose,

    /// The redraw timer fired.
    TimerTick,

    /// Focus gained.
    FocusGained,

    /// Focus lost.
    FocusLost,

    /// Tear the panel down.
    Shutdown,
}
