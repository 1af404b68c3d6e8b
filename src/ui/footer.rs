use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(route: &Route) -> &'static str {
        match route {
            Route::List => {
                " Type: Search │ ↑↓: Move │ Enter: Open │ Ctrl+S: Sort key │ Ctrl+O: Order │ Esc: Clear │ Ctrl+Q: Quit"
            }
            Route::Gallery => {
                " [ ]: Type │ Space: Toggle │ m: OR/AND │ c: Clear │ Arrows: Move │ Enter: Open │ Ctrl+Q: Quit"
            }
            Route::Detail(_) => {
                " ←: Previous │ →: Next │ l: List │ g: Gallery │ Esc: Back │ Ctrl+R: Reload │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, route: &Route, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(route);
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes: the hints contain box-drawing glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
