use crate::ui::app::App;
use crate::ui::detail::view::render_detail;
use crate::ui::footer::Footer;
use crate::ui::gallery::view::render_gallery;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::view::render_list;
use crate::ui::route::Route;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.route()), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::List => render_list(frame, body, app.list(), app.tick()),
        Route::Gallery => render_gallery(frame, body, app.gallery(), app.tick()),
        Route::Detail(_) => render_detail(frame, body, app.detail(), app.tick()),
    }
    frame.render_widget(Footer::new().widget(app.route(), footer), footer);
}
