//! `PanelController`: The panel state machine.
//!
//! ```text
//!                init                 Shutdown
//! Uninitialized ──────▶ Running ─────────────▶ Terminated
//!                        │  ▲
//!                        └──┘ Resize, PointerMoved, TimerTick, Expose
//! ```
//!
//! Every transition either replaces part of the render state as a whole or
//! leaves it untouched, so ticks and host events may arrive in any order.

use crate::actor::{PanelEvent, Tick, TickerActor};
use crate::buffer::PixelBuffer;
use crate::error::{PanelError, Result};
use crate::geometry::Position;
use crate::host::WindowHost;
use crate::layout::Size;
use crate::render::{DrawPipeline, RenderState, RenderStats};
use crate::scene::build_scene;
use crossbeam_channel::Receiver;

use super::config::PanelConfig;

/// Lifecycle state of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Created, `init` not yet called.
    Uninitialized,
    /// Surface, buffer and timer are live.
    Running,
    /// Torn down; every event is ignored.
    Terminated,
}

#[derive(Debug)]
enum Phase {
    Uninitialized,
    Running {
        state: RenderState,
        timer: TickerActor,
    },
    Terminated,
}

/// Drives one panel through its lifecycle.
#[derive(Debug)]
pub struct PanelController<H: WindowHost> {
    host: H,
    config: PanelConfig,
    pipeline: DrawPipeline,
    phase: Phase,
}

impl<H: WindowHost> PanelController<H> {
    /// Create an uninitialized controller for `host`.
    pub fn new(host: H, config: PanelConfig) -> Self {
        let pipeline = DrawPipeline::new(config.style);
        Self {
            host,
            config,
            pipeline,
            phase: Phase::Uninitialized,
        }
    }

    /// Create the panel surface, its off-screen buffer and redraw timer.
    ///
    /// # Errors
    ///
    /// Fails if the controller is not `Uninitialized`, or if the surface,
    /// buffer or timer cannot be created. A failure after the surface was
    /// created destroys it again and leaves the controller `Terminated`.
    pub fn init(&mut self) -> Result<()> {
        if !matches!(self.phase, Phase::Uninitialized) {
            return Err(PanelError::AlreadyInitialized);
        }

        let panel_size = self.host.create_panel()?;
        match self.start(panel_size) {
            Ok(running) => {
                self.phase = running;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "panel initialization failed");
                self.host.destroy_panel();
                self.phase = Phase::Terminated;
                Err(err)
            }
        }
    }

    fn start(&self, panel_size: Size) -> Result<Phase> {
        let buffer_size = self.config.buffer_size_for(panel_size);
        let state = RenderState::new(build_scene(), buffer_size)?;
        let timer = TickerActor::spawn(self.config.tick_interval)?;

        tracing::info!(
            panel = ?panel_size,
            buffer = ?buffer_size,
            tick = ?self.config.tick_interval,
            walls = state.scene().len(),
            "panel running"
        );
        Ok(Phase::Running { state, timer })
    }

    /// Apply one event.
    ///
    /// Events are ignored while `Uninitialized` or `Terminated`, as are
    /// variants a running panel has no behavior for.
    ///
    /// # Errors
    ///
    /// Returns an error if a resize buffer cannot be allocated or the host
    /// fails to blit. A failed resize keeps the previous buffer.
    pub fn handle(&mut self, event: PanelEvent) -> Result<()> {
        let state = match &mut self.phase {
            Phase::Running { state, .. } => state,
            Phase::Uninitialized => {
                tracing::warn!(?event, "event before init ignored");
                return Ok(());
            }
            Phase::Terminated => {
                tracing::debug!(?event, "event after shutdown ignored");
                return Ok(());
            }
        };

        match event {
            PanelEvent::Resize { width, height } => {
                let size = self.config.buffer_size_for(Size::new(width, height));
                let mut fresh = PixelBuffer::try_new(size)?;
                self.pipeline.present_cleared(&mut fresh, &mut self.host)?;
                let old = state.replace_buffer(fresh);
                tracing::debug!(from = ?old.size(), to = ?size, "off-screen buffer resized");
                drop(old);
            }
            PanelEvent::PointerMoved { x, y } => {
                state.set_cursor(Position::new(x, y));
            }
            PanelEvent::TimerTick => {
                self.pipeline.render_frame(state, &mut self.host)?;
            }
            PanelEvent::Expose => {
                self.pipeline.blit_only(state, &mut self.host)?;
            }
            PanelEvent::Shutdown => self.shutdown(),
            other => {
                tracing::debug!(event = ?other, "event ignored");
            }
        }
        Ok(())
    }

    /// Cancel the timer, release the buffer and destroy the surface.
    ///
    /// Returns once the timer thread has exited. Calling it again is a
    /// no-op.
    pub fn shutdown(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Terminated) {
            Phase::Running { state, timer } => {
                timer.join();
                drop(state);
                self.host.destroy_panel();
                tracing::info!(
                    frames = self.pipeline.stats().frames,
                    blits = self.pipeline.stats().blits,
                    "panel terminated"
                );
            }
            Phase::Uninitialized => {
                tracing::debug!("shutdown before init");
            }
            Phase::Terminated => {
                tracing::warn!("shutdown called on a terminated panel");
            }
        }
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> PanelState {
        match self.phase {
            Phase::Uninitialized => PanelState::Uninitialized,
            Phase::Running { .. } => PanelState::Running,
            Phase::Terminated => PanelState::Terminated,
        }
    }

    /// The render state, while running.
    pub const fn render_state(&self) -> Option<&RenderState> {
        match &self.phase {
            Phase::Running { state, .. } => Some(state),
            _ => None,
        }
    }

    /// Current cursor position, while running.
    pub fn cursor(&self) -> Option<Position> {
        self.render_state().map(RenderState::cursor)
    }

    /// Size of the off-screen buffer, while running.
    pub fn buffer_size(&self) -> Option<Size> {
        self.render_state().map(RenderState::buffer_size)
    }

    /// The redraw timer's tick channel, while running.
    pub fn tick_receiver(&self) -> Option<Receiver<Tick>> {
        match &self.phase {
            Phase::Running { timer, .. } => Some(timer.receiver().clone()),
            _ => None,
        }
    }

    /// Draw statistics.
    pub const fn stats(&self) -> &RenderStats {
        self.pipeline.stats()
    }

    /// The configuration this panel runs with.
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// The window host.
    pub const fn host(&self) -> &H {
        &self.host
    }
}

impl<H: WindowHost> Drop for PanelController<H> {
    fn drop(&mut self) {
        if matches!(self.phase, Phase::Running { .. }) {
            self.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::host::MemoryHost;
    use std::time::Duration;

    /// Long enough that the timer never fires during a test.
    fn quiet_config() -> PanelConfig {
        PanelConfig {
            tick_interval: Duration::from_secs(3600),
            ..PanelConfig::default()
        }
    }

    fn running(size: Size) -> (PanelController<MemoryHost>, MemoryHost) {
        let host = MemoryHost::new(size);
        let mut controller = PanelController::new(host.clone(), quiet_config());
        controller.init().unwrap();
        (controller, host)
    }

    #[test]
    fn test_init_allocates_panel_sized_buffer() {
        let (controller, host) = running(Size::new(800, 800));
        assert_eq!(controller.state(), PanelState::Running);
        assert_eq!(controller.buffer_size(), Some(Size::new(800, 800)));
        assert_eq!(controller.cursor(), Some(Position::ORIGIN));
        assert_eq!(controller.render_state().unwrap().scene().len(), 10);
        assert!(controller.tick_receiver().is_some());
        assert_eq!(host.surface_size(), Some(Size::new(800, 800)));
    }

    #[test]
    fn test_init_clamps_small_panel() {
        let (controller, _host) = running(Size::new(5, 12));
        assert_eq!(controller.buffer_size(), Some(Size::new(30, 30)));
    }

    #[test]
    fn test_init_twice_fails() {
        let (mut controller, _host) = running(Size::new(100, 100));
        assert!(matches!(controller.init(), Err(PanelError::AlreadyInitialized)));
        assert_eq!(controller.state(), PanelState::Running);
    }

    #[test]
    fn test_init_allocation_failure_terminates() {
        let host = MemoryHost::new(Size::new(30, 30));
        let mut controller = PanelController::new(
            host.clone(),
            PanelConfig {
                min_buffer_size: Size::new(u32::MAX, u32::MAX),
                ..quiet_config()
            },
        );

        let err = controller.init().unwrap_err();
        assert!(matches!(err, PanelError::BufferAllocation { .. }));
        assert_eq!(controller.state(), PanelState::Terminated);
        assert!(host.is_destroyed());
    }

    #[test]
    fn test_pointer_then_tick_renders_frame() {
        let (mut controller, host) = running(Size::new(800, 800));

        controller
            .handle(PanelEvent::PointerMoved { x: 150.0, y: 150.0 })
            .unwrap();
        controller.handle(PanelEvent::TimerTick).unwrap();

        assert_eq!(controller.cursor(), Some(Position::new(150.0, 150.0)));
        assert_eq!(host.pixel(150, 150), Some(Rgb::RED));
        assert_eq!(host.pixel(400, 50), Some(Rgb::WHITE));
        assert_eq!(host.pixel(275, 200), Some(Rgb::WHITE));
        assert_eq!(host.pixel(400, 650), Some(Rgb::WHITE));
        assert_eq!(controller.stats().frames, 1);
    }

    #[test]
    fn test_pointer_motion_does_not_draw() {
        let (mut controller, host) = running(Size::new(100, 100));
        controller
            .handle(PanelEvent::PointerMoved { x: 1.0, y: 2.0 })
            .unwrap();
        assert_eq!(host.blit_count(), 0);
    }

    #[test]
    fn test_resize_replaces_and_clears_buffer() {
        let (mut controller, host) = running(Size::new(800, 800));
        controller
            .handle(PanelEvent::PointerMoved { x: 40.0, y: 40.0 })
            .unwrap();
        controller.handle(PanelEvent::TimerTick).unwrap();

        controller
            .handle(PanelEvent::Resize {
                width: 640,
                height: 480,
            })
            .unwrap();

        let state = controller.render_state().unwrap();
        assert_eq!(state.buffer_size(), Size::new(640, 480));
        assert!(state.buffer().is_cleared_to(Rgb::BLACK));
        assert!(host.snapshot().unwrap().is_cleared_to(Rgb::BLACK));
        assert_eq!(host.surface_size(), Some(Size::new(640, 480)));
    }

    #[test]
    fn test_resize_is_clamped() {
        let (mut controller, _host) = running(Size::new(800, 800));
        controller
            .handle(PanelEvent::Resize {
                width: 10,
                height: 10,
            })
            .unwrap();
        assert_eq!(controller.buffer_size(), Some(Size::new(30, 30)));

        controller
            .handle(PanelEvent::Resize {
                width: 0,
                height: 500,
            })
            .unwrap();
        assert_eq!(controller.buffer_size(), Some(Size::new(30, 500)));
    }

    #[test]
    fn test_resize_allocation_failure_keeps_state() {
        let (mut controller, _host) = running(Size::new(100, 100));
        let err = controller
            .handle(PanelEvent::Resize {
                width: u32::MAX,
                height: u32::MAX,
            })
            .unwrap_err();
        assert!(matches!(err, PanelError::BufferAllocation { .. }));
        assert_eq!(controller.state(), PanelState::Running);
        assert_eq!(controller.buffer_size(), Some(Size::new(100, 100)));
    }

    #[test]
    fn test_expose_reblits_without_redraw() {
        let (mut controller, host) = running(Size::new(100, 100));
        controller
            .handle(PanelEvent::PointerMoved { x: 20.0, y: 20.0 })
            .unwrap();
        controller.handle(PanelEvent::TimerTick).unwrap();
        controller
            .handle(PanelEvent::PointerMoved { x: 80.0, y: 20.0 })
            .unwrap();

        controller.handle(PanelEvent::Expose).unwrap();
        let first = host.snapshot().unwrap();
        controller.handle(PanelEvent::Expose).unwrap();

        assert_eq!(host.snapshot().unwrap(), first);
        assert_eq!(host.pixel(20, 20), Some(Rgb::RED));
        assert_eq!(host.pixel(80, 20), Some(Rgb::BLACK));
        assert_eq!(controller.stats().frames, 1);
        assert_eq!(host.blit_count(), 3);
    }

    #[test]
    fn test_unhandled_events_are_ignored() {
        let (mut controller, host) = running(Size::new(100, 100));
        controller
            .handle(PanelEvent::PointerPressed(crate::actor::MouseButton::Left))
            .unwrap();
        controller
            .handle(PanelEvent::PointerReleased(crate::actor::MouseButton::Left))
            .unwrap();
        controller.handle(PanelEvent::FocusLost).unwrap();
        assert_eq!(controller.state(), PanelState::Running);
        assert_eq!(host.blit_count(), 0);
    }

    #[test]
    fn test_events_before_init_are_ignored() {
        let host = MemoryHost::new(Size::new(100, 100));
        let mut controller = PanelController::new(host.clone(), quiet_config());
        controller.handle(PanelEvent::TimerTick).unwrap();
        assert_eq!(controller.state(), PanelState::Uninitialized);
        assert_eq!(host.blit_count(), 0);
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let (mut controller, host) = running(Size::new(100, 100));
        let ticks = controller.tick_receiver().unwrap();

        controller.handle(PanelEvent::Shutdown).unwrap();

        assert_eq!(controller.state(), PanelState::Terminated);
        assert!(controller.render_state().is_none());
        assert!(controller.tick_receiver().is_none());
        assert!(host.is_destroyed());
        // Timer thread has exited, so its sender is gone.
        while ticks.try_recv().is_ok() {}
        assert!(ticks.recv_timeout(Duration::from_millis(20)).is_err());
    }

    #[test]
    fn test_events_after_shutdown_are_noops() {
        let (mut controller, host) = running(Size::new(100, 100));
        controller.shutdown();
        let blits = host.blit_count();

        controller.handle(PanelEvent::TimerTick).unwrap();
        controller
            .handle(PanelEvent::PointerMoved { x: 5.0, y: 5.0 })
            .unwrap();
        controller.handle(PanelEvent::Expose).unwrap();

        assert_eq!(host.blit_count(), blits);
        assert_eq!(controller.cursor(), None);
    }

    #[test]
    fn test_double_shutdown_is_harmless() {
        let (mut controller, host) = running(Size::new(100, 100));
        controller.shutdown();
        controller.shutdown();
        assert_eq!(controller.state(), PanelState::Terminated);
        assert!(host.is_destroyed());
    }

    #[test]
    fn test_drop_tears_down() {
        let (controller, host) = running(Size::new(100, 100));
        drop(controller);
        assert!(host.is_destroyed());
    }
}
