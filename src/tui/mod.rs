// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The event loop (keyboard input, redraw ticks, auto-refresh)
// - Handing desktop snapshots gathered off-thread back to the visible page

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod theme;
pub mod ui;

use anyhow::{Context, Result};
use app::{App, RefreshJob, Refreshed};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// `tokio::select!` waits on whichever comes first:
/// 1. Keyboard input
/// 2. Redraw tick (expires toasts)
/// 3. Refresh tick (starts an off-thread snapshot if enabled)
/// 4. A finished snapshot
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let mut refresh_interval = tokio::time::interval(app.refresh_interval());
    refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick fires immediately; the start page just queried
    refresh_interval.reset();

    let (refresh_tx, mut refresh_rx) = mpsc::channel::<Refreshed>(4);

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press {
                            app.handle_key(key);
                        }
                    }
                }
            } => {}

            _ = tick_interval.tick() => app.tick(),

            _ = refresh_interval.tick() => {
                if let Some(job) = app.begin_refresh() {
                    spawn_refresh(job, refresh_tx.clone());
                }
            }

            Some(done) = refresh_rx.recv() => app.finish_refresh(done),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Query hyprctl on the blocking pool and deliver the result to the loop
fn spawn_refresh(job: RefreshJob, tx: mpsc::Sender<Refreshed>) {
    let RefreshJob {
        page,
        generation,
        hyprctl,
    } = job;

    tokio::spawn(async move {
        let snapshot = match tokio::task::spawn_blocking(move || hyprctl.snapshot()).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("Refresh task failed: {}", e);
                None
            }
        };
        // Receiver gone means the UI is shutting down
        let _ = tx
            .send(Refreshed {
                page,
                generation,
                snapshot,
            })
            .await;
    });
}
