use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use newtab::app::config::{self, Config};
use newtab::app::{r#loop::run_loop, state::AppState};
use newtab::infrastructure::browser::SystemBrowser;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Config and logging come first so a broken config never leaves the
    // terminal in raw mode.
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(format!("{err:#}"))),
    };
    if let Some(dir) = config::config_dir() {
        if let Err(err) = newtab::logging::init(&dir, &config.log_level) {
            eprintln!("logging disabled: {err:#}");
        }
    }
    log::info!("starting newtab");

    let navigator = Arc::new(SystemBrowser::new(config.browser.clone()));
    let mut app_state = AppState::new(config);
    if let Some(err) = config_error {
        log::warn!("using default config: {err}");
        app_state.last_error = Some(err);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, navigator).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:#}");
        println!("{:?}", err);
    }

    Ok(())
}
