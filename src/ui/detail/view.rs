use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{Record, STAT_MAX};
use crate::ui::detail::DetailViewState;
use crate::ui::loading::{render_loading, render_message};
use crate::ui::theme::{
    type_badges, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POKEDEX_RED, STAT_BAR,
};

pub const LOADING_MESSAGE: &str = "Loading Pokemon Details...";
pub const NOT_FOUND: &str = "Pokemon not found";

const STAT_BAR_WIDTH: usize = 30;

pub fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &DetailViewState, tick: u64) {
    match state {
        DetailViewState::Idle | DetailViewState::Loading { .. } => {
            render_loading(frame, area, LOADING_MESSAGE, tick);
        }
        DetailViewState::NotFound { message, .. } => {
            let message: &str = if message.is_empty() { NOT_FOUND } else { message };
            render_message(frame, area, message, true);
        }
        DetailViewState::Loaded { record } => {
            let widget = Paragraph::new(detail_lines(record))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER))
                        .title(" ← Previous │ Next → "),
                );
            frame.render_widget(widget, area);
        }
    }
}

fn detail_lines(record: &Record) -> Vec<Line<'static>> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let section = Style::default().fg(POKEDEX_RED).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("#{} {}", record.id, record.name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(type_badges(record.types.iter().map(String::as_str))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(
                record.image_url().unwrap_or("(no image)").to_string(),
                value,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Basic Information", section)),
        Line::from(vec![
            Span::styled("  Height: ", label),
            Span::styled(format!("{} m", record.height_m()), value),
            Span::styled("    Weight: ", label),
            Span::styled(format!("{} kg", record.weight_kg()), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("Stats", section)),
    ];

    let name_width = record
        .stats
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    for stat in &record.stats {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<width$}  ", format!("{}:", stat.name), width = name_width + 1),
                label,
            ),
            Span::styled(stat_bar(stat.base, STAT_BAR_WIDTH), Style::default().fg(STAT_BAR)),
            Span::styled(format!(" {}", stat.base), value),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Abilities", section)));
    for ability in &record.abilities {
        let mut spans = vec![Span::styled(format!("  {}", ability.name), value)];
        if ability.hidden {
            spans.push(Span::styled(
                " Hidden",
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Bar of `width` cells, filled in proportion to `base / STAT_MAX`.
pub fn stat_bar(base: u32, width: usize) -> String {
    let clamped = base.min(STAT_MAX) as usize;
    let filled = (clamped * width + STAT_MAX as usize / 2) / STAT_MAX as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::stat_bar;

    #[test]
    fn bar_scales_to_stat_max() {
        assert_eq!(stat_bar(0, 10), "░".repeat(10));
        assert_eq!(stat_bar(255, 10), "█".repeat(10));
        assert_eq!(stat_bar(300, 10), "█".repeat(10));
        let half = stat_bar(128, 10);
        assert_eq!(half.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(half.chars().count(), 10);
    }
}
