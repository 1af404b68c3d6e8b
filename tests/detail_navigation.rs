mod common;

use common::{key, make_app, record};
use crossterm::event::KeyCode;
use pokedex::catalog::{IdRange, Page, RecordKey, ROSTER_SIZE};
use pokedex::config::Config;
use pokedex::ui::app::App;
use pokedex::ui::detail::{DetailIntent, DetailReducer, DetailViewState};
use pokedex::ui::events::AppEvent;
use pokedex::ui::mvi::Reducer;
use pokedex::ui::route::Route;

#[test]
fn wraps_at_both_ends() {
    let range = IdRange::default();
    assert_eq!(range.previous(1), 151);
    assert_eq!(range.next(151), 1);
    assert_eq!(range.next(1), 2);
    assert_eq!(range.previous(151), 150);
}

#[test]
fn previous_undoes_next_everywhere() {
    let range = IdRange::default();
    for id in 1..=ROSTER_SIZE {
        assert_eq!(range.previous(range.next(id)), id);
        assert_eq!(range.next(range.previous(id)), id);
    }
}

#[test]
fn custom_page_shifts_range() {
    let range = IdRange::for_page(Page {
        limit: 10,
        offset: 20,
    });
    assert_eq!(range.previous(21), 30);
    assert_eq!(range.next(30), 21);
    assert!(!range.contains(20));
}

#[test]
fn loaded_result_replaces_loading() {
    let state = DetailReducer::reduce(
        DetailViewState::default(),
        DetailIntent::Request(RecordKey::Name("pikachu".to_string())),
    );
    assert!(state.is_loading());
    assert_eq!(state.current_id(), None);

    let state = DetailReducer::reduce(state, DetailIntent::Loaded(record(25, "pikachu", &["electric"])));
    assert_eq!(state.current_id(), Some(25));
    assert_eq!(state.record().map(|r| r.name.as_str()), Some("pikachu"));
}

#[test]
fn failure_keeps_numeric_anchor() {
    let state = DetailReducer::reduce(
        DetailViewState::default(),
        DetailIntent::Request(RecordKey::Id(42)),
    );
    let state = DetailReducer::reduce(state, DetailIntent::Failed("Pokemon not found".to_string()));
    assert!(matches!(&state, DetailViewState::NotFound { message, .. } if message == "Pokemon not found"));
    assert_eq!(state.current_id(), Some(42));
}

fn loaded_detail(id: u32) -> App {
    let mut app = make_app();
    app.navigate(Route::Detail(RecordKey::Id(id)));
    let generation = app.generation();
    app.on_record_loaded(generation, Ok(record(id, "mon", &["normal"])));
    app
}

#[test]
fn keys_step_through_records() {
    let mut app = loaded_detail(151);
    app.handle_event(AppEvent::Input(key(KeyCode::Right)));
    assert_eq!(app.route(), &Route::Detail(RecordKey::Id(1)));

    app.handle_event(AppEvent::Input(key(KeyCode::Left)));
    assert_eq!(app.route(), &Route::Detail(RecordKey::Id(151)));
}

#[test]
fn stepping_works_after_failed_fetch() {
    let mut app = make_app();
    app.navigate(Route::Detail(RecordKey::Id(1)));
    let generation = app.generation();
    app.dispatch_detail(DetailIntent::Failed("Pokemon not found".to_string()));
    assert_eq!(app.generation(), generation);

    app.detail_previous();
    assert_eq!(app.route(), &Route::Detail(RecordKey::Id(151)));
}

#[test]
fn name_route_steps_from_loaded_id() {
    let mut app = make_app();
    app.navigate(Route::Detail(RecordKey::Name("mew".to_string())));
    // Id unknown until the record arrives.
    app.detail_next();
    assert_eq!(app.route(), &Route::Detail(RecordKey::Name("mew".to_string())));

    let generation = app.generation();
    app.on_record_loaded(generation, Ok(record(151, "mew", &["psychic"])));
    app.detail_next();
    assert_eq!(app.route(), &Route::Detail(RecordKey::Id(1)));
}

#[test]
fn stepping_honours_configured_range() {
    let mut config = Config::default();
    config.roster.limit = 10;
    let mut app = App::new(&config);
    app.navigate(Route::Detail(RecordKey::Id(10)));
    app.detail_next();
    assert_eq!(app.route(), &Route::Detail(RecordKey::Id(1)));
}
