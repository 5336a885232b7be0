use crate::app::{
    action::Action, command::Command, dispatcher, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::view::Navigator;
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    navigator: Arc<dyn Navigator>,
) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel(100);
    // User input channel; the reader exits once the loop drops the receiver.
    tokio::task::spawn_blocking(move || {
        while !event_tx.is_closed() {
            match event::poll(POLL_TIMEOUT).and_then(|ready| ready.then(event::read).transpose()) {
                Ok(Some(evt)) => {
                    if event_tx.blocking_send(Ok(evt)).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    run_loop_with_events(terminal, app_state, navigator, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    navigator: Arc<dyn Navigator>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let theme = Theme::default();
    let (action_tx, mut action_rx) = mpsc::channel(8);
    let mut interval = interval(TICK_RATE);

    // Focus the search field once the page has settled.
    let focus_delay = app_state.config.focus_delay();
    tokio::spawn(async move {
        tokio::time::sleep(focus_delay).await;
        let _ = action_tx.send(Action::DeferredFocus).await;
    });

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state, &theme);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Deferred work
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update ---
        let Some(action) = action else {
            continue;
        };

        if let Some(command) = reducer::update(&mut app_state, action) {
            let result = handle_command(command, &mut app_state, navigator.as_ref());
            reducer::update(&mut app_state, result);
        }

        if app_state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs a reducer command and reports its outcome as an action.
pub(crate) fn handle_command(
    command: Command,
    app_state: &mut AppState,
    navigator: &dyn Navigator,
) -> Action {
    match command {
        Command::Submit(input) => {
            let result = dispatcher::submit(
                &mut app_state.session,
                &app_state.registry,
                navigator,
                &input,
            );
            Action::NavigationCompleted(
                result.map_err(|err| format!("{:#}", anyhow::Error::from(err))),
            )
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
