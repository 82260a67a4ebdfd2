//! Panel Actor: Runs a [`PanelController`] on a dedicated thread.
//!
//! Host events and timer ticks are two independent sources. The panel
//! thread is their single consumer, so transitions never overlap and the
//! off-screen buffer is only ever touched by one thread.

use super::messages::PanelEvent;
use crate::error::{PanelError, Result};
use crate::host::WindowHost;
use crate::panel::{PanelConfig, PanelController};
use crossbeam_channel::{bounded, never, select, Receiver, Sender};
use std::thread::{self, JoinHandle};

const THREAD_NAME: &str = "raycaster-panel";

/// Handle to a running panel.
///
/// Dropping the handle shuts the panel down and waits for it.
#[derive(Debug)]
pub struct Panel {
    /// Host event sender.
    events: Sender<PanelEvent>,
    /// Handle to the panel thread.
    handle: Option<JoinHandle<Result<()>>>,
}

impl Panel {
    /// Initialize a panel on `host` and start its event loop.
    ///
    /// Initialization runs on the caller's thread so that construction
    /// failures are returned here.
    ///
    /// # Errors
    ///
    /// Returns the controller's `init` error, or
    /// [`PanelError::ActorSpawn`] if the panel thread cannot start.
    pub fn spawn<H>(host: H, config: PanelConfig) -> Result<Self>
    where
        H: WindowHost + 'static,
    {
        let (events_tx, events_rx) = bounded(config.event_capacity);
        let mut controller = PanelController::new(host, config);
        controller.init()?;

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || Self::run_loop(controller, &events_rx))
            .map_err(|source| PanelError::ActorSpawn {
                name: THREAD_NAME,
                source,
            })?;

        Ok(Self {
            events: events_tx,
            handle: Some(handle),
        })
    }

    /// A sender host adapters can deliver events through.
    pub fn events(&self) -> Sender<PanelEvent> {
        self.events.clone()
    }

    /// Deliver one event. Returns `false` if the panel has stopped.
    pub fn send(&self, event: PanelEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Check whether the panel thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Shut the panel down and wait until its timer, buffer and surface are
    /// released.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the panel early, if any, or
    /// [`PanelError::ActorPanicked`].
    pub fn shutdown(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        // Fails only if the loop already exited on its own.
        let _ = self.events.send(PanelEvent::Shutdown);
        handle.join().map_err(|_| PanelError::ActorPanicked)?
    }

    /// Main panel loop.
    fn run_loop<H: WindowHost>(
        mut controller: PanelController<H>,
        events: &Receiver<PanelEvent>,
    ) -> Result<()> {
        let mut ticks = controller.tick_receiver().unwrap_or_else(never);

        let result = loop {
            let event = select! {
                recv(events) -> event => Some(event.unwrap_or(PanelEvent::Shutdown)),
                recv(ticks) -> tick => tick.ok().map(|_| PanelEvent::TimerTick),
            };
            let Some(event) = event else {
                tracing::warn!("redraw timer stopped");
                ticks = never();
                continue;
            };

            if event == PanelEvent::Shutdown {
                break Ok(());
            }
            if let Err(err) = controller.handle(event) {
                tracing::error!(error = %err, ?event, "panel stopped");
                break Err(err);
            }
        };

        controller.shutdown();
        result
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            tracing::error!(error = %err, "panel shut down with error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::host::MemoryHost;
    use crate::layout::Size;
    use std::time::{Duration, Instant};

    fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn test_ticks_drive_redraw() {
        let host = MemoryHost::new(Size::new(800, 800));
        let config = PanelConfig::default().with_tick_interval_ms(5);
        let panel = Panel::spawn(host.clone(), config).unwrap();

        assert!(panel.send(PanelEvent::PointerMoved { x: 150.0, y: 150.0 }));
        assert!(wait_for(|| host.pixel(150, 150) == Some(Rgb::RED)));
        assert_eq!(host.pixel(400, 50), Some(Rgb::WHITE));

        panel.shutdown().unwrap();
        assert!(host.is_destroyed());
    }

    #[test]
    fn test_shutdown_is_synchronous() {
        let host = MemoryHost::new(Size::new(100, 100));
        let config = PanelConfig::default().with_tick_interval_ms(1);
        let panel = Panel::spawn(host.clone(), config).unwrap();
        let events = panel.events();

        panel.shutdown().unwrap();

        assert!(host.is_destroyed());
        let blits = host.blit_count();
        assert!(events.send(PanelEvent::TimerTick).is_err());
        thread::sleep(Duration::from_millis(20));
        assert_eq!(host.blit_count(), blits);
    }

    #[test]
    fn test_resize_event_through_channel() {
        let host = MemoryHost::new(Size::new(200, 200));
        let panel = Panel::spawn(host.clone(), PanelConfig::default()).unwrap();

        panel.send(PanelEvent::Resize {
            width: 10,
            height: 10,
        });
        assert!(wait_for(|| host.surface_size() == Some(Size::new(30, 30))));

        panel.shutdown().unwrap();
    }

    #[test]
    fn test_fatal_error_reported_on_shutdown() {
        let host = MemoryHost::new(Size::new(100, 100));
        let panel = Panel::spawn(host.clone(), PanelConfig::default()).unwrap();

        panel.send(PanelEvent::Resize {
            width: u32::MAX,
            height: u32::MAX,
        });
        assert!(wait_for(|| !panel.is_running()));
        assert!(host.is_destroyed());
        assert!(matches!(
            panel.shutdown(),
            Err(PanelError::BufferAllocation { .. })
        ));
    }

    #[test]
    fn test_drop_shuts_down() {
        let host = MemoryHost::new(Size::new(100, 100));
        let panel = Panel::spawn(host.clone(), PanelConfig::default()).unwrap();
        drop(panel);
        assert!(host.is_destroyed());
    }
}
