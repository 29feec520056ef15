// main.rs

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use session_todo::{App, Config, logging, tui};
use std::io::{self};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config problems are not fatal: fall back to defaults and report later.
    let (config, config_err) = match Config::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };

    match logging::init(&config) {
        Ok(path) => info!(log = %path.display(), "session started"),
        Err(e) => eprintln!("Logging disabled: {}", e),
    }
    if let Some(e) = config_err {
        warn!(error = %e, "using default config");
        eprintln!("Config error, using defaults: {}", e);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Fresh, empty store for every run
    let mut app = App::from_config(&config);

    let res = tui::run_app(&mut terminal, &mut app);

    // Restore terminal state
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let counts = app.counts();
    info!(
        total = counts.total,
        completed = counts.completed,
        "session ended, tasks discarded"
    );

    if let Err(err) = res {
        eprintln!("Application error: {}", err);
        return Err(err.into());
    }

    Ok(())
}
