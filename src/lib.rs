//! # Raycaster
//!
//! A double-buffered 2D panel that draws a fixed room of wall segments and a
//! marker following the pointer, redrawn on a fixed tick.
//!
//! Despite the name there is no ray casting: walls are stored and stroked,
//! the cursor is tracked, and nothing is intersected.
//!
//! ## Core Concepts
//!
//! - **Geometry as values**: positions, polar vectors and lines are `Copy`
//!   values; line endpoints are always derived, never cached
//! - **Double-buffered rendering**: frames are composed off-screen and
//!   presented in one blit, so the surface never shows a partial frame
//! - **Explicit lifecycle**: `Uninitialized → Running → Terminated`, with the
//!   redraw timer created by `init` and joined by `shutdown`
//! - **Actor model**: one thread owns each panel; host events and timer
//!   ticks are serialized through a single loop
//!
//! ## Example
//!
//! ```rust
//! use raycaster::{MemoryHost, PanelConfig, PanelController, PanelEvent, Rgb, Size};
//!
//! let host = MemoryHost::new(Size::new(800, 800));
//! let mut panel = PanelController::new(host.clone(), PanelConfig::default());
//! panel.init()?;
//!
//! panel.handle(PanelEvent::PointerMoved { x: 150.0, y: 150.0 })?;
//! panel.handle(PanelEvent::TimerTick)?;
//! assert_eq!(host.pixel(150, 150), Some(Rgb::RED));
//!
//! panel.shutdown();
//! # Ok::<(), raycaster::PanelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod error;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod panel;
pub mod render;
pub mod scene;
pub mod terminal;

// Re-exports for convenience
pub use actor::{InputActor, InputEvent, MouseButton, Panel, PanelEvent, Tick, TickerActor};
pub use buffer::{PixelBuffer, Rgb};
pub use error::{PanelError, Result};
pub use geometry::{from_polar, to_radians, Line, Position, Vector};
pub use host::{MemoryHost, WindowHost};
pub use layout::{Rect, Size};
pub use panel::{PanelConfig, PanelController, PanelState, DEFAULT_TICK_INTERVAL_MS, MIN_BUFFER_EDGE};
pub use render::{draw_scene, DrawPipeline, DrawStyle, RenderState, RenderStats};
pub use scene::{build_scene, Scene};
pub use terminal::{CellMapping, TerminalHost};
