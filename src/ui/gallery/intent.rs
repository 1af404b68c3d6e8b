use crate::catalog::{FilterMode, Record};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    RosterLoaded(Vec<Record>),
    RosterFailed(String),
    /// Add or remove a tag from the selection.
    ToggleTag(String),
    /// Toggle the tag under the filter-bar cursor.
    ToggleFocusedTag,
    NextTag,
    PreviousTag,
    /// Ignored unless more than one tag is selected.
    SetMode(FilterMode),
    ToggleMode,
    ClearTags,
    /// Move the grid cursor; `columns` is the current grid width.
    MoveLeft,
    MoveRight,
    MoveUp { columns: usize },
    MoveDown { columns: usize },
}

impl Intent for GalleryIntent {}
