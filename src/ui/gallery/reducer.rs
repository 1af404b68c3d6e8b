use crate::catalog::TYPE_TAGS;
use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::state::GalleryViewState;
use crate::ui::mvi::{Reducer, Resource};

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryViewState;
    type Intent = GalleryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::RosterLoaded(records) => {
                state.roster = Resource::Ready(records);
                state.selected = 0;
            }
            GalleryIntent::RosterFailed(message) => {
                state.roster = Resource::Failed(message);
                state.selected = 0;
            }
            GalleryIntent::ToggleTag(tag) => {
                state.filter.selection.toggle(&tag);
                state.selected = 0;
            }
            GalleryIntent::ToggleFocusedTag => {
                let tag = state.focused_tag();
                state.filter.selection.toggle(tag);
                state.selected = 0;
            }
            GalleryIntent::NextTag => {
                state.tag_cursor = (state.tag_cursor + 1) % TYPE_TAGS.len();
            }
            GalleryIntent::PreviousTag => {
                state.tag_cursor = if state.tag_cursor == 0 {
                    TYPE_TAGS.len() - 1
                } else {
                    state.tag_cursor - 1
                };
            }
            GalleryIntent::SetMode(mode) => {
                if state.filter.can_switch_mode() {
                    state.filter.mode = mode;
                    state.selected = 0;
                }
            }
            GalleryIntent::ToggleMode => {
                if state.filter.can_switch_mode() {
                    state.filter.mode = state.filter.mode.toggled();
                    state.selected = 0;
                }
            }
            GalleryIntent::ClearTags => {
                state.filter.selection.clear();
                state.selected = 0;
            }
            GalleryIntent::MoveLeft => {
                state.selected = state.selected.saturating_sub(1);
            }
            GalleryIntent::MoveRight => {
                state.selected = state.selected.saturating_add(1);
            }
            GalleryIntent::MoveUp { columns } => {
                let columns = columns.max(1);
                if state.selected >= columns {
                    state.selected -= columns;
                }
            }
            GalleryIntent::MoveDown { columns } => {
                let columns = columns.max(1);
                let len = state.visible().len();
                if state.selected + columns < len {
                    state.selected += columns;
                }
            }
        }
        let len = state.visible().len();
        state.selected = state.selected.min(len.saturating_sub(1));
        state
    }
}
