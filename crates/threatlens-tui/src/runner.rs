//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Main entry point, owns terminal setup and teardown
//! - `run_loop`: Main event loop processing terminal events and request results

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::mpsc;

use threatlens_app::config::Settings;
use threatlens_app::message::Message;
use threatlens_app::process::process_message;
use threatlens_app::state::AppState;
use threatlens_app::Route;
use threatlens_client::AnalysisService;
use threatlens_core::prelude::*;

use super::startup::{self, StartupAction};
use super::{event, render, terminal};

/// Run the TUI against `service`, starting on `route`
pub async fn run<S>(settings: Settings, route: Route, service: S) -> Result<()>
where
    S: AnalysisService + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings, service.describe());
    let startup_action = startup::startup(&mut state, route);

    // Initialize terminal
    let mut term = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    // Request results come back on this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    if startup_action == StartupAction::CheckHealth {
        process_message(&mut state, Message::CheckHealth, &msg_tx, &service);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &service);

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    info!("ThreatLens exiting");
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: &S,
) -> Result<()>
where
    S: AnalysisService + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Process request results (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, service);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        for message in event::poll()? {
            process_message(state, message, &msg_tx, service);
        }
    }

    Ok(())
}
