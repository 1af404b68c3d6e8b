mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::ListViewState;
