//! Terminal viewer for a remote, paginated employee directory.
//!
//! - [`api`] fetches pages and the total count over HTTP.
//! - [`ui`] owns view state (MVI), derives rows and pagination, and renders
//!   with ratatui.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
