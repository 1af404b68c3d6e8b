mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailViewState;
