//! Reducer for the directory view.

use crate::ui::mvi::Reducer;

use super::intent::DirectoryIntent;
use super::state::DirectoryState;

/// Pure state transitions for the directory view.
///
/// Issuing fetches is the caller's job: it compares
/// [`DirectoryState::fetch_trigger`] before and after a dispatch.
pub struct DirectoryReducer;

impl Reducer for DirectoryReducer {
    type State = DirectoryState;
    type Intent = DirectoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DirectoryIntent::GoToPage { page } => {
                let page_count = state.page_count();
                if page == 0 || (page_count > 0 && page > page_count) {
                    return state;
                }
                DirectoryState {
                    current_page: page,
                    ..state
                }
            }

            DirectoryIntent::Sort { key } => {
                let mut sort = state.sort;
                sort.key = key;
                sort.direction = sort.direction.toggled();
                DirectoryState { sort, ..state }
            }

            DirectoryIntent::SetGenderFilter { gender } => {
                let mut filters = state.filters.clone();
                filters.gender = normalize(gender);
                DirectoryState { filters, ..state }
            }

            DirectoryIntent::SetCountryFilter { country } => {
                let mut filters = state.filters.clone();
                filters.country = normalize(country);
                DirectoryState { filters, ..state }
            }

            DirectoryIntent::ClearFilters => DirectoryState {
                filters: Default::default(),
                ..state
            },

            DirectoryIntent::FetchStarted { request_id } => DirectoryState {
                latest_request: request_id.max(state.latest_request),
                loading: true,
                ..state
            },

            DirectoryIntent::PageLoaded {
                request_id,
                records,
            } => {
                if request_id != state.latest_request {
                    return state;
                }
                DirectoryState {
                    records,
                    loading: false,
                    last_error: None,
                    ..state
                }
            }

            DirectoryIntent::PageFailed {
                request_id,
                message,
            } => {
                if request_id != state.latest_request {
                    return state;
                }
                // Previously loaded records stay visible.
                DirectoryState {
                    loading: false,
                    last_error: Some(message),
                    ..state
                }
            }

            DirectoryIntent::TotalLoaded { total } => {
                let mut next = DirectoryState {
                    total_records: total,
                    ..state
                };
                let page_count = next.page_count();
                if page_count > 0 && next.current_page > page_count {
                    next.current_page = page_count;
                }
                next
            }
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
