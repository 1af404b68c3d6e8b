use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into header (navigation tabs), body and footer (hints).
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = HEADER_HEIGHT.min(area.height);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Rectangle of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
