//! Actor Model: Message-passing concurrency for the panel.
//!
//! This module implements a simple actor system using crossbeam channels:
//! - **Ticker Actor**: Fires the periodic redraw, dropping late ticks
//! - **Panel Actor**: Owns the controller, serializes events and ticks
//! - **Input Actor**: Polls terminal events, forwards them to the application
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  InputEvent  ┌─────────────┐  PanelEvent  ┌──────────────┐
//! │ Input Thread │ ───────────▶ │ Application │ ───────────▶ │              │
//! └──────────────┘              └─────────────┘              │ Panel Thread │
//! ┌──────────────┐         Tick                              │              │
//! │Ticker Thread │ ─────────────────────────────────────────▶│              │
//! └──────────────┘                                           └──────────────┘
//! ```

mod input;
mod messages;
mod panel;
mod ticker;

pub use input::{InputActor, InputEvent};
pub use messages::{MouseButton, PanelEvent};
pub use panel::Panel;
pub use ticker::{Tick, TickerActor};
