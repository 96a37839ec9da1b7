use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{UserRecord, UsersPage, UsersTotal};

/// Thin wrapper over the remote user collection endpoint.
///
/// Every call is an independent GET; there is no caching, retry or timeout.
#[derive(Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: Url,
}

impl DirectoryClient {
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let client = Client::builder().build().map_err(ApiError::Client)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one page of records. `page_number` is 1-based.
    pub async fn fetch_page(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Vec<UserRecord>, ApiError> {
        let url = page_url(&self.base_url, page_number, page_size);
        tracing::debug!(url = %url, page = page_number, "fetching directory page");

        match self.get_json::<UsersPage>(url).await {
            Ok(body) => Ok(body.users),
            Err(err) => {
                tracing::error!(page = page_number, error = %err, "failed to fetch user page");
                Err(err)
            }
        }
    }

    /// Fetch the total number of records in the collection.
    pub async fn fetch_total_count(&self) -> Result<u64, ApiError> {
        let url = self.base_url.clone();
        tracing::debug!(url = %url, "fetching directory total");

        match self.get_json::<UsersTotal>(url).await {
            Ok(body) => Ok(body.total),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch total user count");
                Err(err)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Build `<base>?limit=<page_size>&skip=<offset>`.
fn page_url(base: &Url, page_number: u32, page_size: u32) -> Url {
    let offset = u64::from(page_number.saturating_sub(1)) * u64::from(page_size);
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("limit", &page_size.to_string())
        .append_pair("skip", &offset.to_string());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://dummyjson.com/users").unwrap()
    }

    #[test]
    fn first_page_has_zero_offset() {
        let url = page_url(&base(), 1, 10);
        assert_eq!(url.as_str(), "https://dummyjson.com/users?limit=10&skip=0");
    }

    #[test]
    fn offset_is_zero_based() {
        let url = page_url(&base(), 4, 10);
        assert_eq!(url.query(), Some("limit=10&skip=30"));
    }

    #[test]
    fn preserves_existing_query() {
        let base = Url::parse("http://localhost:8080/users?select=id").unwrap();
        let url = page_url(&base, 2, 5);
        assert_eq!(url.query(), Some("select=id&limit=5&skip=5"));
    }
}
