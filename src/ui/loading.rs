use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{MUTED_TEXT, POKEDEX_RED, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Shared loading indicator: spinning ball plus a message.
pub fn render_loading(frame: &mut Frame<'_>, area: Rect, message: &str, tick: u64) {
    let glyph = SPINNER[(tick % SPINNER.len() as u64) as usize];
    let lines = vec![
        Line::from(Span::styled(
            glyph,
            Style::default().fg(POKEDEX_RED).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(MUTED_TEXT))),
    ];
    render_centered(frame, area, lines);
}

/// Centered single-message state ("not found", "no results", errors).
pub fn render_message(frame: &mut Frame<'_>, area: Rect, message: &str, is_error: bool) {
    let color = if is_error { STATUS_ERROR } else { MUTED_TEXT };
    let lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    ))];
    render_centered(frame, area, lines);
}

fn render_centered(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let target = centered_rect_by_size(area, width.saturating_add(2), height);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}
