use crate::table::{LegalActions, Phase, Player, Table};
use crate::tui::app::{AppState, Entry, PlayerField};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_box, centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let table = &app.table;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(3),    // seats
            Constraint::Length(5), // status bar
        ])
        .split(f.area());

    let mut header_lines: Vec<Line> = Vec::new();
    header_lines.push(Line::from(vec![
        Span::styled(format!("Pot {}", table.pot()), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "   Blinds {}/{}   {}   {}",
            table.small_blind(),
            table.big_blind(),
            phase_label(table),
            still_in_label(table.players_still_in()),
        )),
    ]));
    let mut second = format!(
        "To call {}   Min raise {}",
        table.amount_to_call(),
        table.min_raise()
    );
    if let Some((small, big)) = table.pending_blinds() {
        second.push_str(&format!("   Next hand {small}/{big}"));
    }
    header_lines.push(Line::from(second));
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("poker-ledger").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_seats(f, chunks[1], app);
    draw_status(f, chunks[2], app);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if let Some(entry) = app.entry() {
        draw_entry(f, app, entry);
    }
}

fn phase_label(table: &Table) -> String {
    match table.phase() {
        Phase::AwaitingSmallBlind => "Waiting for small blind".to_string(),
        Phase::AwaitingBigBlind => "Waiting for big blind".to_string(),
        Phase::HandComplete => "Hand complete".to_string(),
        _ => format!("Round {}", table.round()),
    }
}

fn still_in_label(n: usize) -> String {
    const WORDS: [&str; 11] =
        ["No", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten"];
    let count = WORDS.get(n).map(|w| w.to_string()).unwrap_or_else(|| n.to_string());
    let noun = if n == 1 { "player" } else { "players" };
    format!("{count} {noun} still in")
}

// Seats wrap around a two-row ring: top row left to right, bottom row back.
fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    let players = app.table.players();
    let total = players.len();
    if total == 0 {
        let para = Paragraph::new("No players seated. Press N to add one.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(para, area);
        return;
    }
    let rows = if total > 1 { 2u16 } else { 1 };
    let top_cols: u16 = total.saturating_add(1) as u16 / 2;
    let bottom_cols: u16 = (total as u16).saturating_sub(top_cols);
    let row_height = area.height / rows;
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(row_height)).collect::<Vec<_>>())
        .split(area);
    for r in 0..rows as usize {
        let cols_this: u16 = if r == 0 { top_cols } else { bottom_cols };
        if cols_this == 0 {
            continue;
        }
        let col_width = area.width / cols_this;
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..cols_this).map(|_| Constraint::Length(col_width)).collect::<Vec<_>>())
            .split(row_chunks[r]);
        for c in 0..cols_this as usize {
            let idx = if r == 0 { c } else { total - 1 - c };
            if let Some(p) = players.get(idx) {
                render_seat(f, col_chunks[c], app, idx, p);
            }
        }
    }
}

fn render_seat(f: &mut Frame, seat_area: Rect, app: &AppState, idx: usize, p: &Player) {
    let table = &app.table;
    let acting = idx == table.turn() && table.phase() != Phase::HandComplete;
    let mut title = format!("{}. {}", idx + 1, p.name());
    if idx == table.dealer() {
        title.push_str(" [BTN]");
    }
    if table.big_blind_seat() == Some(idx) && table.hand_in_progress() {
        title.push_str(" [BB]");
    }
    if acting {
        title.push_str(" [Act]");
    }
    if idx == app.focus {
        title.push_str(" [Focus]");
    }
    if p.selected() {
        title.push_str(" [WIN]");
    }

    let mut lines: Vec<Line> = Vec::with_capacity(4);
    lines.push(Line::from(format!("Stack: {}", p.stack())));
    lines.push(Line::from(format!("Bet: {}", p.current_amount_bet())));
    if p.folded() {
        lines.push(Line::from(Span::styled("Folded", Style::default().fg(Color::DarkGray))));
    } else if p.all_in() {
        let mut text = format!("All in for {}", p.committed());
        if let Some(eff) = table.effective_all_in() {
            text.push_str(&format!(" ({eff} effective)"));
        }
        lines.push(Line::from(Span::styled(text, Style::default().fg(Color::LightRed))));
    } else if table.phase() == Phase::Betting {
        let to_call = table.to_call(idx);
        if !to_call.is_zero() {
            lines.push(Line::from(format!("To call: {to_call}")));
        }
    }

    let border = if p.selected() {
        Some(Color::Green)
    } else if p.folded() {
        Some(Color::DarkGray)
    } else if p.all_in() {
        Some(Color::LightRed)
    } else if acting && idx == app.focus {
        Some(Color::Magenta)
    } else if acting {
        Some(Color::Yellow)
    } else if idx == app.focus {
        Some(Color::Cyan)
    } else {
        None
    };
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), seat_area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(inner(area));

    let table = &app.table;
    let mut left: Vec<Line> = Vec::new();
    match table.players().get(app.focus) {
        Some(p) if table.phase() == Phase::HandComplete => {
            left.push(Line::from(format!(
                "Focus: {}   W marks winners, P awards {}",
                p.name(),
                table.pot()
            )));
        }
        Some(p) => {
            let acting = table.players().get(table.turn()).map(|a| a.name()).unwrap_or("-");
            left.push(Line::from(format!("Acting: {acting}   Focus: {}", p.name())));
            left.push(actions_line(&table.legal_actions_at(app.focus)));
        }
        None => left.push(Line::from("Seat at least two players to start")),
    }
    if let Some((text, is_error)) = app.notice() {
        let style = if is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        left.push(Line::from(Span::styled(text.to_string(), style)));
    }

    let right = vec![Line::from("? help • H history"), Line::from("N add player • M blinds")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn actions_line(legal: &LegalActions) -> Line<'static> {
    let style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    if legal.small_blind || legal.big_blind {
        let label = if legal.small_blind { "B post small blind" } else { "B post big blind" };
        return Line::from(vec![Span::raw("Actions: "), Span::styled(label, style(true))]);
    }
    Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("K check", style(legal.check)),
        Span::raw(" • "),
        Span::styled("C call", style(legal.call)),
        Span::raw(" • "),
        Span::styled("R raise", style(legal.raise)),
        Span::raw(" • "),
        Span::styled("A all in", style(legal.all_in)),
        Span::raw(" • "),
        Span::styled("F fold", style(legal.fold)),
    ])
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries =
        app.table.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
            lines.push(Line::from(format!(
                "{} {}{} [round {}]",
                entry.name,
                entry.verb.label(),
                amount,
                entry.round
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table (acts for the focused seat):", bold)),
        Line::from("- B: post blind"),
        Line::from("- K: check   C: call   F: fold"),
        Line::from("- R: raise   A: all in"),
        Line::from("- W: mark / unmark winner   P: award pot"),
        Line::from("- N: add player"),
        Line::from("- ] / [: focus next / prev   1-9: focus seat   T: focus turn"),
        Line::from("- H: history   M: blinds   Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Forms:", bold)),
        Line::from("- Type to edit, Backspace to delete"),
        Line::from("- Tab: next field   + / -: step raise by the minimum"),
        Line::from("- Enter: submit   Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_entry(f: &mut Frame, app: &AppState, entry: &Entry) {
    let area = centered_box(48, 8, f.area());
    let highlight = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let (title, lines) = match entry {
        Entry::Raise { amount } => (
            "Raise by",
            vec![
                Line::from(Span::styled(format!("${amount}_"), highlight)),
                Line::from(format!("Min raise: {}", app.table.min_raise())),
                Line::from("+/- step, Enter submit, Esc cancel"),
            ],
        ),
        Entry::AddPlayer { name, buy_in, field } => {
            let style_for = |which: PlayerField| {
                if *field == which {
                    highlight
                } else {
                    Style::default()
                }
            };
            (
                "Add player",
                vec![
                    Line::from(Span::styled(
                        format!("Name:   {name}"),
                        style_for(PlayerField::Name),
                    )),
                    Line::from(Span::styled(
                        format!("Buy-in: ${buy_in}"),
                        style_for(PlayerField::BuyIn),
                    )),
                    Line::from("Tab switch field, Enter submit, Esc cancel"),
                ],
            )
        }
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);
    let error = app.entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    f.render_widget(Paragraph::new(error_line).alignment(Alignment::Center), chunks[1]);
}
