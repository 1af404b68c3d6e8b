mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use state::GalleryViewState;
