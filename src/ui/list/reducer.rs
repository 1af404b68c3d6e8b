use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListViewState;
use crate::ui::mvi::{Reducer, Resource};

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListViewState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::RosterLoaded(records) => {
                state.roster = Resource::Ready(records);
                state.selected = 0;
            }
            ListIntent::RosterFailed(message) => {
                state.roster = Resource::Failed(message);
                state.selected = 0;
            }
            ListIntent::Type(ch) => {
                state.query.search.push(ch);
                state.selected = 0;
            }
            ListIntent::Backspace => {
                state.query.search.pop();
                state.selected = 0;
            }
            ListIntent::ClearSearch => {
                state.query.search.clear();
                state.selected = 0;
            }
            ListIntent::SetSortKey(key) => {
                state.query.key = key;
                state.selected = 0;
            }
            ListIntent::SetSortOrder(order) => {
                state.query.order = order;
                state.selected = 0;
            }
            ListIntent::CycleSortKey => {
                state.query.key = state.query.key.cycle();
                state.selected = 0;
            }
            ListIntent::ToggleSortOrder => {
                state.query.order = state.query.order.reversed();
                state.selected = 0;
            }
            ListIntent::MoveUp => {
                state.selected = state.selected.saturating_sub(1);
            }
            ListIntent::MoveDown => {
                state.selected = state.selected.saturating_add(1);
            }
            ListIntent::PageUp(rows) => {
                state.selected = state.selected.saturating_sub(rows.max(1));
            }
            ListIntent::PageDown(rows) => {
                state.selected = state.selected.saturating_add(rows.max(1));
            }
            ListIntent::Home => state.selected = 0,
            ListIntent::End => state.selected = usize::MAX,
        }
        clamp_selection(state)
    }
}

fn clamp_selection(mut state: ListViewState) -> ListViewState {
    let len = state.visible().len();
    state.selected = state.selected.min(len.saturating_sub(1));
    state
}
