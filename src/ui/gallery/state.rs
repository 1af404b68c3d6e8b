use crate::catalog::{Record, TypeFilter, TYPE_TAGS};
use crate::ui::mvi::{Resource, UiState};

/// Gallery view: roster, type filter, filter-bar cursor and grid cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryViewState {
    pub roster: Resource<Vec<Record>>,
    pub filter: TypeFilter,
    /// Index into `TYPE_TAGS` for the filter bar.
    pub tag_cursor: usize,
    /// Index into `visible()` for the card grid.
    pub selected: usize,
}

impl UiState for GalleryViewState {}

impl GalleryViewState {
    pub fn visible(&self) -> Vec<&Record> {
        match &self.roster {
            Resource::Ready(roster) => self.filter.apply(roster),
            _ => Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.roster.ready().map_or(0, Vec::len)
    }

    pub fn focused_tag(&self) -> &'static str {
        TYPE_TAGS[self.tag_cursor % TYPE_TAGS.len()]
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.visible().get(self.selected).copied()
    }
}
