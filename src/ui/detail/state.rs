use crate::catalog::{Record, RecordKey};
use crate::ui::mvi::UiState;

/// Detail view lifecycle for a single record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailViewState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading {
        key: RecordKey,
    },
    Loaded {
        record: Box<Record>,
    },
    /// Fetch failed. No retry; the key is kept so prev/next still work
    /// for numeric ids.
    NotFound {
        key: RecordKey,
        message: String,
    },
}

impl UiState for DetailViewState {}

impl DetailViewState {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Self::Loaded { record } => Some(record),
            _ => None,
        }
    }

    /// Id used as the anchor for previous/next.
    pub fn current_id(&self) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Loading { key } | Self::NotFound { key, .. } => key.id(),
            Self::Loaded { record } => Some(record.id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
