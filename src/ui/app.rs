use ratatui::layout::Rect;
use tracing::{debug, error, info};

use crate::api::ApiError;
use crate::catalog::{IdRange, Page, Record, RecordKey};
use crate::config::Config;
use crate::ui::detail::{DetailIntent, DetailReducer, DetailViewState};
use crate::ui::events::AppEvent;
use crate::ui::gallery::view::grid_columns;
use crate::ui::gallery::{GalleryIntent, GalleryReducer, GalleryViewState};
use crate::ui::layout::body_rect;
use crate::ui::list::{ListIntent, ListReducer, ListViewState};
use crate::ui::loader::ViewLoader;
use crate::ui::mvi::Reducer;
use crate::ui::route::Route;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    /// Where Esc returns to from the detail view.
    back_route: Route,
    /// Bumped on every navigation; fetch results from older
    /// generations are dropped.
    generation: u64,
    page: Page,
    range: IdRange,
    size: Option<(u16, u16)>,
    tick: u64,
    list: ListViewState,
    gallery: GalleryViewState,
    detail: DetailViewState,
    loader: Option<ViewLoader>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let page = config.roster.page();
        Self {
            should_quit: false,
            route: Route::List,
            back_route: Route::List,
            generation: 0,
            page,
            range: IdRange::for_page(page),
            size: None,
            tick: 0,
            list: ListViewState::default(),
            gallery: GalleryViewState::default(),
            detail: DetailViewState::default(),
            loader: None,
        }
    }

    /// Without a loader, navigation only resets view state; results are
    /// fed in through `on_roster_loaded` / `on_record_loaded`.
    pub fn set_loader(&mut self, loader: ViewLoader) {
        self.loader = Some(loader);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        if let Some(loader) = self.loader.as_mut() {
            loader.cancel();
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn back_route(&self) -> &Route {
        &self.back_route
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn id_range(&self) -> IdRange {
        self.range
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn list(&self) -> &ListViewState {
        &self.list
    }

    pub fn gallery(&self) -> &GalleryViewState {
        &self.gallery
    }

    pub fn detail(&self) -> &DetailViewState {
        &self.detail
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Cards per gallery row for the current terminal width.
    pub fn gallery_columns(&self) -> usize {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        let body = body_rect(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        });
        grid_columns(body.width)
    }

    /// Visible rows of the list view, for page up/down.
    pub fn list_page_rows(&self) -> usize {
        let (_, rows) = self.size.unwrap_or((80, 24));
        usize::from(rows.saturating_sub(10)).max(1)
    }

    // ========================================================================
    // Routing
    // ========================================================================

    /// Mount `route`: fresh view state, previous fetch cancelled, new fetch
    /// started.
    pub fn navigate(&mut self, route: Route) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(loader) = self.loader.as_mut() {
            loader.cancel();
        }

        if matches!(route, Route::Detail(_)) {
            if !matches!(self.route, Route::Detail(_)) {
                self.back_route = self.route.clone();
            }
        } else {
            self.back_route = route.clone();
        }

        info!(route = %route, generation = self.generation, "Navigate");
        self.route = route;
        self.list = ListViewState::default();
        self.gallery = GalleryViewState::default();
        self.detail = DetailViewState::default();
        self.mount();
    }

    /// Re-run the current view's fetch, keeping nothing.
    pub fn reload(&mut self) {
        self.navigate(self.route.clone());
    }

    pub fn back(&mut self) {
        self.navigate(self.back_route.clone());
    }

    /// Open the record under the cursor of the list or gallery.
    pub fn open_selected(&mut self) {
        let selected = match self.route {
            Route::List => self.list.selected_record(),
            Route::Gallery => self.gallery.selected_record(),
            Route::Detail(_) => None,
        };
        if let Some(id) = selected.map(|record| record.id) {
            self.navigate(Route::Detail(RecordKey::Id(id)));
        }
    }

    /// Detail view: step to the previous id, wrapping at the range start.
    pub fn detail_previous(&mut self) {
        if let Some(id) = self.detail_anchor() {
            self.navigate(Route::Detail(RecordKey::Id(self.range.previous(id))));
        }
    }

    /// Detail view: step to the next id, wrapping at the range end.
    pub fn detail_next(&mut self) {
        if let Some(id) = self.detail_anchor() {
            self.navigate(Route::Detail(RecordKey::Id(self.range.next(id))));
        }
    }

    fn detail_anchor(&self) -> Option<u32> {
        if !matches!(self.route, Route::Detail(_)) {
            return None;
        }
        self.detail.current_id()
    }

    fn mount(&mut self) {
        let generation = self.generation;
        match self.route.clone() {
            Route::List | Route::Gallery => {
                if let Some(loader) = self.loader.as_mut() {
                    loader.load_roster(generation, self.page);
                }
            }
            Route::Detail(key) => {
                self.dispatch_detail(DetailIntent::Request(key.clone()));
                if let Some(loader) = self.loader.as_mut() {
                    loader.load_record(generation, key);
                }
            }
        }
    }

    // ========================================================================
    // Fetch results
    // ========================================================================

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::RosterLoaded { generation, result } => {
                self.on_roster_loaded(generation, result)
            }
            AppEvent::RecordLoaded { generation, result } => {
                self.on_record_loaded(generation, result)
            }
            AppEvent::Input(key) => crate::ui::input::handle_key(self, key),
        }
    }

    pub fn on_roster_loaded(&mut self, generation: u64, result: Result<Vec<Record>, ApiError>) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Discarding stale roster");
            return;
        }
        match (self.route.clone(), result) {
            (Route::List, Ok(records)) => self.dispatch_list(ListIntent::RosterLoaded(records)),
            (Route::List, Err(err)) => {
                error!(error = %err.details(), "Error fetching pokemon");
                self.dispatch_list(ListIntent::RosterFailed(err.user_message().to_string()));
            }
            (Route::Gallery, Ok(records)) => {
                self.dispatch_gallery(GalleryIntent::RosterLoaded(records))
            }
            (Route::Gallery, Err(err)) => {
                error!(error = %err.details(), "Error fetching pokemon");
                self.dispatch_gallery(GalleryIntent::RosterFailed(
                    err.user_message().to_string(),
                ));
            }
            (Route::Detail(_), _) => {
                debug!("Roster result while on detail view; ignored");
            }
        }
    }

    pub fn on_record_loaded(&mut self, generation: u64, result: Result<Record, ApiError>) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Discarding stale record");
            return;
        }
        match result {
            Ok(record) => self.dispatch_detail(DetailIntent::Loaded(record)),
            Err(err) => {
                error!(error = %err.details(), "Error fetching pokemon");
                self.dispatch_detail(DetailIntent::Failed(err.user_message().to_string()));
            }
        }
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    pub fn dispatch_gallery(&mut self, intent: GalleryIntent) {
        dispatch_mvi!(self, gallery, GalleryReducer, intent);
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn starts_on_list_without_generation() {
        let app = make_app();
        assert_eq!(app.route(), &Route::List);
        assert_eq!(app.generation(), 0);
        assert!(app.list().roster.is_loading());
    }

    #[test]
    fn navigate_bumps_generation() {
        let mut app = make_app();
        app.navigate(Route::Gallery);
        app.navigate(Route::Detail(RecordKey::Id(4)));
        assert_eq!(app.generation(), 2);
        assert_eq!(app.back_route(), &Route::Gallery);
        assert!(app.detail().is_loading());
    }

    #[test]
    fn back_route_survives_detail_stepping() {
        let mut app = make_app();
        app.navigate(Route::Gallery);
        app.navigate(Route::Detail(RecordKey::Id(1)));
        app.detail_next();
        app.detail_next();
        assert_eq!(app.route(), &Route::Detail(RecordKey::Id(3)));
        app.back();
        assert_eq!(app.route(), &Route::Gallery);
    }

    #[test]
    fn stepping_is_noop_off_detail() {
        let mut app = make_app();
        app.navigate(Route::List);
        let generation = app.generation();
        app.detail_next();
        assert_eq!(app.generation(), generation);
    }

    #[test]
    fn gallery_columns_follow_width() {
        let mut app = make_app();
        app.on_resize(200, 40);
        let wide = app.gallery_columns();
        app.on_resize(30, 40);
        assert!(wide > app.gallery_columns());
        assert_eq!(app.gallery_columns(), 1);
    }
}
