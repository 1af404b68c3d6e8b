use crate::catalog::{Record, SortKey, SortOrder};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    RosterLoaded(Vec<Record>),
    RosterFailed(String),
    /// A character typed into the search box.
    Type(char),
    Backspace,
    ClearSearch,
    SetSortKey(SortKey),
    SetSortOrder(SortOrder),
    CycleSortKey,
    ToggleSortOrder,
    MoveUp,
    MoveDown,
    /// Move the cursor by a page of rows.
    PageUp(usize),
    PageDown(usize),
    Home,
    End,
}

impl Intent for ListIntent {}
