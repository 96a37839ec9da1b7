//! State for the directory view.

use crate::api::UserRecord;
use crate::ui::mvi::UiState;

/// Records requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Selectable gender filter values, in cycling order.
pub const GENDER_CHOICES: [&str; 2] = ["male", "female"];

/// Column a loaded page can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    FirstName,
    Age,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::FirstName => "Full Name",
            SortKey::Age => "Age",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Client-side row filters. `None` means "All".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub gender: Option<String>,
    pub country: Option<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.country.is_none()
    }
}

/// Everything whose change makes the view request its page again.
///
/// Sort and filters are applied locally, but a change to either still
/// re-requests the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTrigger {
    pub page: u32,
    pub sort: SortConfig,
    pub filters: Filters,
}

/// Directory view state.
///
/// Replaced wholesale by [`super::DirectoryReducer`]; fields are only
/// readable from outside the module.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    pub(super) current_page: u32,
    pub(super) total_records: u64,
    pub(super) sort: SortConfig,
    pub(super) filters: Filters,
    /// Last accepted page, in server order.
    pub(super) records: Vec<UserRecord>,
    /// Sequence number of the newest issued page fetch.
    pub(super) latest_request: u64,
    pub(super) loading: bool,
    pub(super) last_error: Option<String>,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_records: 0,
            sort: SortConfig::default(),
            filters: Filters::default(),
            records: Vec::new(),
            latest_request: 0,
            loading: false,
            last_error: None,
        }
    }
}

impl UiState for DirectoryState {}

impl DirectoryState {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `ceil(total_records / PAGE_SIZE)`; zero until the total is known.
    pub fn page_count(&self) -> u32 {
        let pages = self.total_records.div_ceil(u64::from(PAGE_SIZE));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn fetch_trigger(&self) -> FetchTrigger {
        FetchTrigger {
            page: self.current_page,
            sort: self.sort,
            filters: self.filters.clone(),
        }
    }
}
