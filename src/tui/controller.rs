use crate::tui::app::{AppState, Entry, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Maps one key press to app input. Returns true when the user asked to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    // Forms swallow every key so names can contain any letter.
    if app.entry_active() {
        let action = match code {
            KeyCode::Esc => Some(InputAction::EntryCancel),
            KeyCode::Enter => Some(InputAction::EntrySubmit),
            KeyCode::Backspace => Some(InputAction::EntryBackspace),
            KeyCode::Tab | KeyCode::BackTab => Some(InputAction::EntryNextField),
            KeyCode::Up => Some(InputAction::EntryInc),
            KeyCode::Down => Some(InputAction::EntryDec),
            KeyCode::Char(c) => Some(entry_char(app, c)),
            _ => None,
        };
        if let Some(action) = action {
            let _ = app.handle_input(action);
        }
        return false;
    }

    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if matches!(code, KeyCode::Char('h') | KeyCode::Char('H')) {
        let _ = app.handle_input(InputAction::ToggleHistory);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => InputAction::MenuPrev,
            KeyCode::Down => InputAction::MenuNext,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => InputAction::MenuInc,
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => InputAction::MenuDec,
            KeyCode::Enter => InputAction::MenuApply,
            KeyCode::Esc => InputAction::MenuCancel,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => return false,
        },
        Scene::Table => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMenu,
            KeyCode::Char('b') | KeyCode::Char('B') => InputAction::PostBlind,
            KeyCode::Char('k') | KeyCode::Char('K') => InputAction::Check,
            KeyCode::Char('c') | KeyCode::Char('C') => InputAction::Call,
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::RaiseOpen,
            KeyCode::Char('a') | KeyCode::Char('A') => InputAction::AllIn,
            KeyCode::Char('f') | KeyCode::Char('F') => InputAction::Fold,
            KeyCode::Char('w') | KeyCode::Char('W') => InputAction::ToggleWinner,
            KeyCode::Char('p') | KeyCode::Char('P') => InputAction::AwardPot,
            KeyCode::Char('n') | KeyCode::Char('N') => InputAction::AddPlayerOpen,
            KeyCode::Char('t') | KeyCode::Char('T') => InputAction::FocusTurn,
            KeyCode::Char(']') | KeyCode::Right => InputAction::FocusNext,
            KeyCode::Char('[') | KeyCode::Left => InputAction::FocusPrev,
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                InputAction::FocusSeat((c as u8 - b'1') as usize)
            }
            _ => return false,
        },
    };
    let _ = app.handle_input(action);
    false
}

// In the raise form +/- step the amount instead of being typed.
fn entry_char(app: &AppState, c: char) -> InputAction {
    match (app.entry(), c) {
        (Some(Entry::Raise { .. }), '+' | '=') => InputAction::EntryInc,
        (Some(Entry::Raise { .. }), '-' | '_') => InputAction::EntryDec,
        _ => InputAction::EntryChar(c),
    }
}
