//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use serde_json::json;
use staffdir::api::{Address, Company, UserRecord};
use staffdir::ui::directory::{DirectoryIntent, DirectoryReducer, DirectoryState};
use staffdir::ui::mvi::Reducer;

pub fn user(id: u64, first: &str, age: u32, gender: &str, country: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        age,
        gender: gender.to_string(),
        image: format!("https://dummyjson.com/icon/{}/128", first.to_lowercase()),
        company: Company {
            title: "Analyst".to_string(),
        },
        address: Address {
            state: "Texas".to_string(),
            country: country.to_string(),
        },
    }
}

/// Ten records with distinct ids and ages, mixed genders and countries.
pub fn sample_page() -> Vec<UserRecord> {
    vec![
        user(1, "Emily", 28, "female", "United States"),
        user(2, "Michael", 35, "male", "United States"),
        user(3, "Sophia", 42, "female", "Canada"),
        user(4, "James", 45, "male", "USA"),
        user(5, "Emma", 30, "female", "usa"),
        user(6, "Olivia", 22, "female", "Canada"),
        user(7, "Alexander", 48, "male", "Germany"),
        user(8, "Ava", 27, "female", "USA"),
        user(9, "Ethan", 33, "male", "Germany"),
        user(10, "Isabella", 31, "female", "United States"),
    ]
}

/// State after a total arrived and one page fetch completed.
pub fn loaded_state(total: u64, records: Vec<UserRecord>) -> DirectoryState {
    let state = DirectoryReducer::reduce(
        DirectoryState::default(),
        DirectoryIntent::TotalLoaded { total },
    );
    let state = DirectoryReducer::reduce(state, DirectoryIntent::FetchStarted { request_id: 1 });
    DirectoryReducer::reduce(
        state,
        DirectoryIntent::PageLoaded {
            request_id: 1,
            records,
        },
    )
}

/// JSON body the remote directory returns for a page request.
pub fn page_body(records: &[UserRecord], total: u64, skip: u64) -> String {
    json!({
        "users": records,
        "total": total,
        "skip": skip,
        "limit": records.len(),
    })
    .to_string()
}
