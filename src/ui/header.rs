use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POKEDEX_RED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};

/// Navigation bar: logo plus one tab per top-level view.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: &Route) -> Tabs<'static> {
        let titles = vec![
            Line::from(vec![
                Span::styled("◓ ", Style::default().fg(POKEDEX_RED)),
                Span::styled(
                    "Pokedex",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("[F1] {}", Route::List.title()),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(Span::styled(
                format!("[F2] {}", Route::Gallery.title()),
                Style::default().fg(HEADER_TEXT),
            )),
        ];

        Tabs::new(titles)
            .select(active_tab(route))
            .divider(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)))
            .highlight_style(
                Style::default()
                    .fg(POKEDEX_RED)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Tab index of the active route. Detail pages highlight the logo, like an
/// unmatched nav link.
fn active_tab(route: &Route) -> usize {
    match route {
        Route::List => 1,
        Route::Gallery => 2,
        Route::Detail(_) => 0,
    }
}
