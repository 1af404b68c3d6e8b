use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailViewState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailViewState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Request(key) => DetailViewState::Loading { key },
            DetailIntent::Loaded(record) => match state {
                DetailViewState::Loading { .. } => DetailViewState::Loaded {
                    record: Box::new(record),
                },
                // A result without a pending request is stale.
                other => other,
            },
            DetailIntent::Failed(message) => match state {
                DetailViewState::Loading { key } => DetailViewState::NotFound { key, message },
                other => other,
            },
        }
    }
}
