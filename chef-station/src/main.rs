//! Chef Station entry point
//!
//! Sets up the terminal, then runs a synchronous draw/poll loop until the
//! user quits. The terminal is restored before the error (if any) is
//! propagated, so a failed draw never leaves the shell in raw mode.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use chef_station::core::Config;
use chef_station::{ui, utils};

fn main() -> Result<()> {
    let config = Config::from_env();
    utils::init_logger(config.log_dir.as_deref());
    tracing::info!("chef station starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ui::App::new(&config);
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let result = run(&mut terminal, &mut app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("chef station stopped");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ui::App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Windows terminals deliver release events too
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    ui::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
