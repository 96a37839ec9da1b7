//! Directory view feature module.
//!
//! Holds the paged employee listing: current page, sort, filters and the
//! last loaded records.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - View state and its value types
//! - `intent.rs` - User actions and fetch completions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `projection.rs` - Rows, country choices and pagination derived from state

mod intent;
mod projection;
mod reducer;
mod state;

pub use intent::DirectoryIntent;
pub use projection::{
    matches_filters, page_controls, page_window, sorted, unique_countries, DirectoryRow,
    PageControl,
};
pub use reducer::DirectoryReducer;
pub use state::{
    DirectoryState, FetchTrigger, Filters, SortConfig, SortDirection, SortKey, GENDER_CHOICES,
    PAGE_SIZE,
};
