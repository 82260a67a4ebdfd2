//! Input Actor: Dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to capture mouse, resize and focus events, translating them into
//! [`PanelEvent`]s in panel pixel coordinates.

use super::messages::{MouseButton, PanelEvent};
use crate::error::{PanelError, Result};
use crate::terminal::CellMapping;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const THREAD_NAME: &str = "raycaster-input";

/// What the input thread reports to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// An event for the panel.
    Panel(PanelEvent),
    /// The user asked to quit (Esc, `q`, or Ctrl+C).
    Quit,
    /// Polling the terminal failed.
    Error(String),
}

/// Input actor that polls terminal events.
#[derive(Debug)]
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the application.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    /// * `mapping` - Cell to panel pixel mapping of the terminal host.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::ActorSpawn`] if the OS refuses the thread.
    pub fn spawn(
        sender: Sender<InputEvent>,
        poll_timeout: Duration,
        mapping: CellMapping,
    ) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout, mapping);
            })
            .map_err(|source| PanelError::ActorSpawn {
                name: THREAD_NAME,
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(
        sender: &Sender<InputEvent>,
        shutdown: &Arc<AtomicBool>,
        poll_timeout: Duration,
        mapping: CellMapping,
    ) {
        while !shutdown.load(Ordering::Relaxed) {
            let outcome = match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => Self::convert_event(event, mapping),
                    Err(e) => Some(InputEvent::Error(e.to_string())),
                },
                Ok(false) => None,
                Err(e) => Some(InputEvent::Error(e.to_string())),
            };

            if let Some(input_event) = outcome {
                if sender.send(input_event).is_err() {
                    // Receiver dropped, exit
                    break;
                }
            }
        }
    }

    /// Convert a crossterm event to an [`InputEvent`].
    pub fn convert_event(event: Event, mapping: CellMapping) -> Option<InputEvent> {
        let panel = match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                let quit = match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => true,
                    KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
                    _ => false,
                };
                return quit.then_some(InputEvent::Quit);
            }
            Event::Mouse(mouse) => Self::convert_mouse_event(mouse, mapping)?,
            Event::Resize(cols, rows) => {
                let size = mapping.panel_size(cols, rows);
                PanelEvent::Resize {
                    width: size.width,
                    height: size.height,
                }
            }
            // Returning to the terminal may have left stale content on screen.
            Event::FocusGained => PanelEvent::Expose,
            Event::FocusLost => PanelEvent::FocusLost,
            _ => return None,
        };
        Some(InputEvent::Panel(panel))
    }

    /// Convert a crossterm mouse event to a [`PanelEvent`].
    fn convert_mouse_event(mouse: event::MouseEvent, mapping: CellMapping) -> Option<PanelEvent> {
        match mouse.kind {
            event::MouseEventKind::Down(button) => {
                Some(PanelEvent::PointerPressed(Self::convert_mouse_button(button)))
            }
            event::MouseEventKind::Up(button) => {
                Some(PanelEvent::PointerReleased(Self::convert_mouse_button(button)))
            }
            event::MouseEventKind::Moved | event::MouseEventKind::Drag(_) => {
                let (x, y) = mapping.cell_center(mouse.column, mouse.row);
                Some(PanelEvent::PointerMoved { x, y })
            }
            _ => None,
        }
    }

    /// Convert crossterm `MouseButton` to ours.
    const fn convert_mouse_button(button: event::MouseButton) -> MouseButton {
        match button {
            event::MouseButton::Left => MouseButton::Left,
            event::MouseButton::Right => MouseButton::Right,
            event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
