mod app;
mod auth;
mod config;
mod dashboard;
mod data;
mod logging;
mod onboarding;
mod ui;

use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::app::{handler, router};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Config and logging come up before the terminal so their errors print plainly
    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::debug!(log = %path.display(), "configuration loaded");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("exit");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));

    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            tracing::debug!(?action, "apply");
            router::apply_action(&mut state, action);
        }

        if state.should_quit {
            break;
        }

        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
