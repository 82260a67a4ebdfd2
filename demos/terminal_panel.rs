//! Terminal panel: Run the panel on the terminal's alternate screen.
//!
//! Move the mouse to drag the marker around the room. Quit with `q`, Esc
//! or Ctrl+C.

use clap::Parser;
use crossbeam_channel::bounded;
use raycaster::{
    InputActor, InputEvent, Panel, PanelConfig, TerminalHost, DEFAULT_TICK_INTERVAL_MS,
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Double-buffered wall-and-cursor panel in the terminal")]
struct Args {
    /// Redraw cadence in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_interval_ms: u64,

    /// Panel pixels per displayed pixel.
    #[arg(long, default_value_t = 4)]
    scale: u32,

    /// Write logs here (the terminal is taken by the panel).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&PathBuf>) -> std::io::Result<()> {
    if let Some(path) = path {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let host = TerminalHost::new(args.scale);
    let mapping = host.mapping();
    let config = PanelConfig::default().with_tick_interval_ms(args.tick_interval_ms);
    let panel = Panel::spawn(host, config)?;

    let (input_tx, input_rx) = bounded(64);
    let input = InputActor::spawn(input_tx, Duration::from_millis(10), mapping)?;

    while let Ok(event) = input_rx.recv() {
        match event {
            InputEvent::Panel(event) => {
                if !panel.send(event) {
                    break;
                }
            }
            InputEvent::Quit => break,
            InputEvent::Error(message) => {
                tracing::warn!(%message, "terminal input error");
            }
        }
    }

    input.join();
    panel.shutdown()?;
    Ok(())
}
