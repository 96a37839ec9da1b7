//! Derived views of [`DirectoryState`]: ordering, filtering, rows and
//! pagination controls. Nothing here mutates state.

use std::cmp::Ordering;

use crate::api::UserRecord;

use super::state::{DirectoryState, Filters, SortConfig, SortDirection, SortKey};

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow {
    pub id: u64,
    pub image: String,
    pub full_name: String,
    /// `<gender initial>/<age>`, e.g. "M/34".
    pub demography: String,
    pub title: String,
    /// `<state>, <country>`.
    pub location: String,
}

impl From<&UserRecord> for DirectoryRow {
    fn from(user: &UserRecord) -> Self {
        let initial: String = user
            .gender
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();

        Self {
            id: user.id,
            image: user.image.clone(),
            full_name: format!("{} {}", user.first_name, user.last_name),
            demography: format!("{}/{}", initial, user.age),
            title: user.company.title.clone(),
            location: format!("{}, {}", user.address.state, user.address.country),
        }
    }
}

/// Pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: u32,
    pub active: bool,
}

fn compare(a: &UserRecord, b: &UserRecord, sort: SortConfig) -> Ordering {
    let ordering = match sort.key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::FirstName => a.first_name.cmp(&b.first_name),
        SortKey::Age => a.age.cmp(&b.age),
    };
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable ordering of `records` by the sort config.
pub fn sorted<'a>(records: &'a [UserRecord], sort: SortConfig) -> Vec<&'a UserRecord> {
    let mut out: Vec<&UserRecord> = records.iter().collect();
    out.sort_by(|a, b| compare(a, b, sort));
    out
}

pub fn matches_filters(user: &UserRecord, filters: &Filters) -> bool {
    let gender_ok = filters
        .gender
        .as_deref()
        .map_or(true, |gender| user.gender == gender);
    let country_ok = filters.country.as_deref().map_or(true, |country| {
        user.address.country.to_lowercase() == country.to_lowercase()
    });
    gender_ok && country_ok
}

/// Countries of `records` without duplicates, in first-seen order.
pub fn unique_countries(records: &[UserRecord]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for user in records {
        let country = user.address.country.as_str();
        if !out.contains(&country) {
            out.push(country);
        }
    }
    out
}

pub fn page_controls(page_count: u32, current_page: u32) -> Vec<PageControl> {
    (1..=page_count)
        .map(|number| PageControl {
            number,
            active: number == current_page,
        })
        .collect()
}

/// At most `max_controls` consecutive controls around `current_page`,
/// clamped to `1..=page_count`. Numbers match [`page_controls`].
pub fn page_window(page_count: u32, current_page: u32, max_controls: u32) -> Vec<PageControl> {
    if page_count == 0 || max_controls == 0 {
        return Vec::new();
    }
    let span = max_controls.min(page_count);
    let current = current_page.clamp(1, page_count);
    let start = current
        .saturating_sub((span - 1) / 2)
        .max(1)
        .min(page_count - span + 1);
    let end = start + (span - 1);

    (start..=end)
        .map(|number| PageControl {
            number,
            active: number == current_page,
        })
        .collect()
}

impl DirectoryState {
    /// Loaded records, sorted then filtered, projected to rows.
    pub fn rows(&self) -> Vec<DirectoryRow> {
        sorted(&self.records, self.sort)
            .into_iter()
            .filter(|user| matches_filters(user, &self.filters))
            .map(DirectoryRow::from)
            .collect()
    }

    /// Country filter choices. Drawn from the current page only.
    pub fn country_choices(&self) -> Vec<&str> {
        unique_countries(&self.records)
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        page_controls(self.page_count(), self.current_page)
    }

    /// Bounded slice of [`Self::page_controls`] for drawing.
    pub fn page_window(&self, max_controls: u32) -> Vec<PageControl> {
        page_window(self.page_count(), self.current_page, max_controls)
    }
}
