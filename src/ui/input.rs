use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::gallery::GalleryIntent;
use crate::ui::list::ListIntent;
use crate::ui::route::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload();
        return;
    }
    match key.code {
        KeyCode::F(1) => {
            app.navigate(Route::List);
            return;
        }
        KeyCode::F(2) => {
            app.navigate(Route::Gallery);
            return;
        }
        _ => {}
    }

    let route = app.route().clone();
    match route {
        Route::List => handle_list_key(app, key),
        Route::Gallery => handle_gallery_key(app, key),
        Route::Detail(_) => handle_detail_key(app, key),
    }
}

/// Printable characters go to the search box, so list commands use
/// Ctrl or non-character keys.
fn handle_list_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.dispatch_list(ListIntent::CycleSortKey);
        return;
    }
    if is_ctrl_char(key, 'o') {
        app.dispatch_list(ListIntent::ToggleSortOrder);
        return;
    }

    let rows = app.list_page_rows();
    match key.code {
        KeyCode::Up => app.dispatch_list(ListIntent::MoveUp),
        KeyCode::Down => app.dispatch_list(ListIntent::MoveDown),
        KeyCode::PageUp => app.dispatch_list(ListIntent::PageUp(rows)),
        KeyCode::PageDown => app.dispatch_list(ListIntent::PageDown(rows)),
        KeyCode::Home => app.dispatch_list(ListIntent::Home),
        KeyCode::End => app.dispatch_list(ListIntent::End),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Backspace => app.dispatch_list(ListIntent::Backspace),
        KeyCode::Esc => app.dispatch_list(ListIntent::ClearSearch),
        KeyCode::Tab => app.navigate(Route::Gallery),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.dispatch_list(ListIntent::Type(ch));
        }
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    let columns = app.gallery_columns();
    match key.code {
        KeyCode::Left => app.dispatch_gallery(GalleryIntent::MoveLeft),
        KeyCode::Right => app.dispatch_gallery(GalleryIntent::MoveRight),
        KeyCode::Up => app.dispatch_gallery(GalleryIntent::MoveUp { columns }),
        KeyCode::Down => app.dispatch_gallery(GalleryIntent::MoveDown { columns }),
        KeyCode::Char(']') => app.dispatch_gallery(GalleryIntent::NextTag),
        KeyCode::Char('[') => app.dispatch_gallery(GalleryIntent::PreviousTag),
        KeyCode::Char(' ') => app.dispatch_gallery(GalleryIntent::ToggleFocusedTag),
        KeyCode::Char('m') => app.dispatch_gallery(GalleryIntent::ToggleMode),
        KeyCode::Char('c') => app.dispatch_gallery(GalleryIntent::ClearTags),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Tab | KeyCode::Esc => app.navigate(Route::List),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('p') => app.detail_previous(),
        KeyCode::Right | KeyCode::Char('n') => app.detail_next(),
        KeyCode::Char('l') => app.navigate(Route::List),
        KeyCode::Char('g') => app.navigate(Route::Gallery),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
