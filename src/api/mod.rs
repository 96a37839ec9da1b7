//! HTTP access to the remote user directory.

mod client;
mod error;
mod types;

pub use client::DirectoryClient;
pub use error::ApiError;
pub use types::{Address, Company, UserRecord};
