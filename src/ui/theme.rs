use ratatui::style::Color;

pub const POKEDEX_RED: Color = Color::Rgb(0xe3, 0x35, 0x0d);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STAT_BAR: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// Badge color for a type tag.
pub fn type_color(tag: &str) -> Color {
    match tag {
        "normal" => Color::Rgb(0xa8, 0xa8, 0x78),
        "fire" => Color::Rgb(0xf0, 0x80, 0x30),
        "water" => Color::Rgb(0x68, 0x90, 0xf0),
        "electric" => Color::Rgb(0xf8, 0xd0, 0x30),
        "grass" => Color::Rgb(0x78, 0xc8, 0x50),
        "ice" => Color::Rgb(0x98, 0xd8, 0xd8),
        "fighting" => Color::Rgb(0xc0, 0x30, 0x28),
        "poison" => Color::Rgb(0xa0, 0x40, 0xa0),
        "ground" => Color::Rgb(0xe0, 0xc0, 0x68),
        "flying" => Color::Rgb(0xa8, 0x90, 0xf0),
        "psychic" => Color::Rgb(0xf8, 0x58, 0x88),
        "bug" => Color::Rgb(0xa8, 0xb8, 0x20),
        "rock" => Color::Rgb(0xb8, 0xa0, 0x38),
        "ghost" => Color::Rgb(0x70, 0x58, 0x98),
        "dragon" => Color::Rgb(0x70, 0x38, 0xf8),
        "dark" => Color::Rgb(0x70, 0x58, 0x48),
        "steel" => Color::Rgb(0xb8, 0xb8, 0xd0),
        "fairy" => Color::Rgb(0xee, 0x99, 0xac),
        _ => MUTED_TEXT,
    }
}

/// One styled badge per type tag, separated by a space.
pub fn type_badges<'a, I>(types: I) -> Vec<ratatui::text::Span<'static>>
where
    I: IntoIterator<Item = &'a str>,
{
    use ratatui::style::{Modifier, Style};
    use ratatui::text::Span;

    let mut spans = Vec::new();
    for tag in types {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {tag} "),
            Style::default()
                .fg(Color::Black)
                .bg(type_color(tag))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans
}
