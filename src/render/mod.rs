//! Render module: The state a panel draws from and the double-buffered
//! pipeline that draws it.
//!
//! Frames are always composed off-screen and handed to the window host in a
//! single blit, so the visible surface never shows a partial frame.

mod pipeline;
mod state;

pub use pipeline::{draw_scene, DrawPipeline, DrawStyle, RenderStats};
pub use state::RenderState;
