//! Model-View-Intent primitives shared by the three views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Each view owns one state value. Key presses and fetch results become
//! intents, and the view's reducer is the only place that state changes.

mod resource;

pub use resource::Resource;

/// Marker for intent objects (user actions and fetch results).
pub trait Intent: Send + 'static {}

/// Marker for view state. `Default` is the freshly mounted view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
