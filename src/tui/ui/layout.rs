use ratatui::layout::{Constraint, Flex};
use ratatui::prelude::{Layout, Rect};

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// A `width` x `height` box centered in `r`, clipped to fit.
pub(super) fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center).areas(r);
    let [area] =
        Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center).areas(row);
    area
}
