use crate::catalog::{ListQuery, Record};
use crate::ui::mvi::{Resource, UiState};

/// List view: roster, search/sort controls and the cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListViewState {
    pub roster: Resource<Vec<Record>>,
    pub query: ListQuery,
    /// Index into `visible()`.
    pub selected: usize,
}

impl UiState for ListViewState {}

impl ListViewState {
    /// Records matching the query, sorted. Recomputed on every call.
    pub fn visible(&self) -> Vec<&Record> {
        match &self.roster {
            Resource::Ready(roster) => self.query.apply(roster),
            _ => Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.roster.ready().map_or(0, Vec::len)
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.visible().get(self.selected).copied()
    }
}
