//! Configuration loading for the directory viewer.
//!
//! Settings come from `~/.config/staffdir/config.toml` (optional) and are
//! then overridden by command-line flags.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_BASE_URL};
