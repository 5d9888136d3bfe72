use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_ledger::config::Config;
use poker_ledger::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::Path;
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// The TUI owns stdout, so logs only ever go to a file.
fn init_logging(path: &Path, level: log::LevelFilter) -> io::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = File::create(path)?;
    simplelog::WriteLogger::init(level, config, file).map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    let cfg = Config::parse();
    let table = match cfg.build_table() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("poker-ledger: {err}");
            std::process::exit(2);
        }
    };
    if let Some(path) = &cfg.log_file {
        init_logging(path, cfg.log_level)?;
    }
    if !io::stdout().is_terminal() {
        println!("poker-ledger requires a real terminal (TTY).");
        println!("Run in Terminal and press q to quit. Version: {}", poker_ledger::VERSION);
        return Ok(());
    }
    log::info!(
        "starting with {} seated, blinds {}/{}",
        table.players().len(),
        table.small_blind(),
        table.big_blind()
    );

    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(table);

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(cfg.tick_ms.max(10)));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
