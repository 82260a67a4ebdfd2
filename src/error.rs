//! Error types shared across the panel core and its host adapters.

use std::io;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Failures that end the life of a panel instance.
///
/// Geometry is total and unknown events are ignored, so the only errors
/// are resource failures and lifecycle contract violations.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The off-screen buffer could not be allocated.
    #[error("failed to allocate {width}x{height} off-screen buffer")]
    BufferAllocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The window host reported a failure.
    #[error("window host error: {0}")]
    Host(#[from] io::Error),

    /// `init` was called on a controller that already left `Uninitialized`.
    #[error("panel is already initialized")]
    AlreadyInitialized,

    /// The OS refused to spawn an actor thread.
    #[error("failed to spawn {name} thread: {source}")]
    ActorSpawn {
        /// Thread name.
        name: &'static str,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The panel thread panicked before it could tear down cleanly.
    #[error("panel thread panicked")]
    ActorPanicked,
}
