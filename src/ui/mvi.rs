//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Views never mutate state directly: they dispatch an intent, the reducer
//! produces the next state, and rendering reads from it.

/// Marker trait for view state. A new value replaces the old one on every
/// transition, so states are `Clone` and comparable.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for named transitions: key presses, fetch completions.
pub trait Intent: Send + 'static {}

/// The only place state transitions happen: `(State, Intent) -> State`.
///
/// Implementations must be pure. Side effects (network, terminal) belong to
/// the caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
