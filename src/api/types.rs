use serde::{Deserialize, Serialize};

/// One user entity as returned by the remote directory.
///
/// Only the fields the view consumes are modelled; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// "male" or "female".
    pub gender: String,
    pub image: String,
    pub company: Company,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub state: String,
    pub country: String,
}

/// Body of `GET <base>?limit=..&skip=..`.
#[derive(Debug, Deserialize)]
pub(crate) struct UsersPage {
    pub users: Vec<UserRecord>,
}

/// Body of `GET <base>`; only `total` is read.
#[derive(Debug, Deserialize)]
pub(crate) struct UsersTotal {
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_and_ignores_extra_fields() {
        let json = r#"{
            "id": 7,
            "firstName": "Emily",
            "lastName": "Johnson",
            "maidenName": "Smith",
            "age": 28,
            "gender": "female",
            "image": "https://dummyjson.com/icon/emilys/128",
            "company": { "title": "Sales Manager", "department": "Engineering" },
            "address": { "state": "Mississippi", "country": "United States", "city": "Phoenix" }
        }"#;

        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.first_name, "Emily");
        assert_eq!(record.company.title, "Sales Manager");
        assert_eq!(record.address.country, "United States");
    }

    #[test]
    fn total_body_ignores_users() {
        let body: UsersTotal =
            serde_json::from_str(r#"{"users": [], "total": 208, "skip": 0, "limit": 30}"#)
                .unwrap();
        assert_eq!(body.total, 208);
    }
}
