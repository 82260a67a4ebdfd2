//! Panel module: Lifecycle of one drawing panel.
//!
//! [`PanelController`] is a synchronous state machine
//! (`Uninitialized → Running → Terminated`) driven by
//! [`PanelEvent`](crate::actor::PanelEvent)s. It can be exercised directly
//! in tests; [`Panel`](crate::actor::Panel) runs it on its own thread.

mod config;
mod controller;

pub use config::{PanelConfig, DEFAULT_TICK_INTERVAL_MS, MIN_BUFFER_EDGE};
pub use controller::{PanelController, PanelState};
