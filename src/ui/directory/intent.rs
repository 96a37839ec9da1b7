//! Intents for the directory view.

use crate::api::UserRecord;
use crate::ui::mvi::Intent;

use super::state::SortKey;

#[derive(Debug, Clone)]
pub enum DirectoryIntent {
    /// Pagination control N activated. Out-of-range pages are ignored.
    GoToPage { page: u32 },

    /// Sort header activated. The key is replaced and the direction always
    /// inverts, even when switching to a different column.
    Sort { key: SortKey },

    /// Gender filter chosen. `None` (or an empty string) means "All".
    SetGenderFilter { gender: Option<String> },

    /// Country filter chosen. `None` (or an empty string) means "All".
    SetCountryFilter { country: Option<String> },

    ClearFilters,

    /// A page fetch was issued with this sequence number.
    FetchStarted { request_id: u64 },

    /// A page fetch completed. Dropped unless `request_id` is the latest.
    PageLoaded {
        request_id: u64,
        records: Vec<UserRecord>,
    },

    /// A page fetch failed. Dropped unless `request_id` is the latest.
    PageFailed { request_id: u64, message: String },

    /// Total record count arrived.
    TotalLoaded { total: u64 },
}

impl Intent for DirectoryIntent {}
