use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::list::ListViewState;
use crate::ui::loading::{render_loading, render_message};
use crate::ui::mvi::Resource;
use crate::ui::theme::{type_badges, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const LOADING_MESSAGE: &str = "Loading Pokemon...";
pub const NO_RESULTS: &str = "No Pokemon found";

pub fn render_list(frame: &mut Frame<'_>, area: Rect, state: &ListViewState, tick: u64) {
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

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let search = Paragraph::new(Line::from(vec![
        Span::styled(state.query.search.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled("▏", Style::default().fg(MUTED_TEXT)),
    ]))
    .block(
        Block::default()
            .title(" Search Pokemon... ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(search, chunks[0]);

    let visible = state.visible();
    let controls = Line::from(vec![
        Span::styled(" Sort by: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(state.query.key.label(), Style::default().fg(HEADER_TEXT)),
        Span::styled("  Order: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(state.query.order.label(), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("  Showing {} of {}", visible.len(), state.total()),
            Style::default().fg(MUTED_TEXT),
        ),
    ]);
    frame.render_widget(Paragraph::new(controls), chunks[1]);

    if visible.is_empty() {
        render_message(frame, chunks[2], NO_RESULTS, false);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|record| {
            let mut spans = vec![
                Span::styled(
                    format!("#{:<4}", record.id),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(
                    format!("{:<13}", record.name),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
            ];
            spans.extend(type_badges(record.types.iter().map(String::as_str)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, chunks[2], &mut list_state);
}
