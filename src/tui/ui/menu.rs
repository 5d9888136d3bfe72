use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const BANNER: &str = r#"
 ___  ___  _  _____ ___   _    ___ ___   ___ ___ ___
| _ \/ _ \| |/ / __| _ \ | |  | __|   \ / __| __| _ \
|  _/ (_) | ' <| _||   / | |__| _|| |) | (_ | _||   /
|_|  \___/|_|\_\___|_|_\ |____|___|___/ \___|___|_|_\
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 60, f.area());
    let block = Block::default().title("Table settings").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let banner_lines: Vec<Line> = BANNER
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(banner_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    f.render_widget(Paragraph::new(banner_lines).alignment(Alignment::Center), rows[0]);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Blinds:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(item, style)));
    }
    if app.table.hand_in_progress() {
        lines.push(Line::from(Span::styled(
            "A hand is running: changes take effect when the pot is awarded",
            Style::default().fg(Color::Magenta),
        )));
    }
    if let Some((text, true)) = app.notice() {
        lines.push(Line::from(Span::styled(text.to_string(), Style::default().fg(Color::Red))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust by $0.25  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, rows[1]);
}
