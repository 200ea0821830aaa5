//! Terminal host for the flow grid.

pub mod app;
mod widgets;

use std::{
    io::{self, stdout, Stdout},
    time::Duration,
};

use app::App;
use clap::Args;
use crossterm::{
    event::EventStream,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::{config::GridArgs, error::Result};

/// Options for the interactive grid.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Interval between animation frames, in milliseconds
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    pub frame_ms: u64,
}

pub async fn run(args: &RunArgs) -> Result<()> {
    let size = crossterm::terminal::size()?;
    let mut app = App::new(&args.grid, Size::new(size.0, size.1))?;

    enable_raw_mode()?;
    // Whatever happens after raw mode is on, the terminal is restored below.
    let result = match enter_terminal() {
        Ok(mut terminal) => {
            run_app(&mut terminal, &mut app, Duration::from_millis(args.frame_ms)).await
        }
        Err(e) => Err(e.into()),
    };
    app.teardown();

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut frames = interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(?frame_interval, "Entering event loop");

    while !app.should_exit {
        if app.take_redraw() {
            terminal.draw(|frame| app.render(frame))?;
        }

        tokio::select! {
            maybe_event = event_stream.next() => match maybe_event {
                Some(Ok(event)) => app.handle_event(&event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = frames.tick(), if app.has_pending_frame() => {
                app.on_frame();
            }
        }
    }

    Ok(())
}
