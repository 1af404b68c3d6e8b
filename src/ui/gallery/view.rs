use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{Record, TYPE_TAGS};
use crate::ui::gallery::GalleryViewState;
use crate::ui::loading::{render_loading, render_message};
use crate::ui::mvi::Resource;
use crate::ui::theme::{
    type_badges, type_color, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    POKEDEX_RED,
};

pub const LOADING_MESSAGE: &str = "Loading Pokemon Gallery...";
pub const NO_RESULTS: &str = "No Pokemon found with selected types";

pub const CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 5;

/// Cards that fit side by side in `width`.
pub fn grid_columns(width: u16) -> usize {
    usize::from(width / CARD_WIDTH).max(1)
}

pub fn render_gallery(frame: &mut Frame<'_>, area: Rect, state: &GalleryViewState, tick: u64) {
    match &state.roster {
        Resource::Loading => {
            render_loading(frame, area, LOADING_MESSAGE, tick);
            return;
        }
        Resource::Failed(message) => {
            render_message(frame, area, message, true);
            return;
        }
        Resource::Ready(_) => {}
    }

    let visible = state.visible();
    let mut summary = vec![Line::from(vec![
        Span::styled(" Showing ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            visible.len().to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" of ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            state.total().to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Pokemon", Style::default().fg(MUTED_TEXT)),
    ])];
    if state.filter.can_switch_mode() {
        summary.push(Line::from(vec![
            Span::styled(" Filter Mode: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                state.filter.mode.label(),
                Style::default().fg(POKEDEX_RED).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", state.filter.mode.description()),
                Style::default().fg(MUTED_TEXT),
            ),
        ]));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary.len() as u16),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(summary), chunks[0]);
    frame.render_widget(filter_bar(state), chunks[1]);

    if visible.is_empty() {
        render_message(frame, chunks[2], NO_RESULTS, false);
        return;
    }
    render_grid(frame, chunks[2], &visible, state.selected);
}

fn filter_bar(state: &GalleryViewState) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (idx, tag) in TYPE_TAGS.iter().enumerate() {
        let selected = state.filter.selection.contains(tag);
        let mut style = if selected {
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(type_color(tag))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(type_color(tag))
        };
        if idx == state.tag_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {tag} "), style));
        spans.push(Span::raw(" "));
    }
    if !state.filter.selection.is_empty() {
        spans.push(Span::styled(
            "[c] Clear All Filters",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Filter by Type: ")
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn render_grid(frame: &mut Frame<'_>, area: Rect, visible: &[&Record], selected: usize) {
    let columns = grid_columns(area.width);
    let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);
    let selected_row = selected / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    for (offset, record) in visible.iter().enumerate().skip(first_row * columns) {
        let row = offset / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = offset % columns;
        let card = Rect {
            x: area.x + col as u16 * CARD_WIDTH,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT.min(area.height.saturating_sub(row as u16 * CARD_HEIGHT)),
        };
        frame.render_widget(card_widget(record, offset == selected), card);
    }
}

fn card_widget(record: &Record, focused: bool) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            format!("#{}", record.id),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(type_badges(record.types.iter().map(String::as_str))),
    ];
    let border = if focused { POKEDEX_RED } else { GLOBAL_BORDER };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if focused {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    Paragraph::new(lines).block(block)
}
