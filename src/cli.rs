use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Browse a remote employee directory in the terminal.
#[derive(Debug, Parser)]
#[command(name = "staffdir", version, about)]
pub struct Cli {
    /// Path to config file (default: ~/.config/staffdir/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the directory endpoint from the config file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Page to open first (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let cli = Cli::try_parse_from(["staffdir"]).unwrap();
        assert_eq!(cli.page, 1);
        assert!(cli.base_url.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn rejects_page_zero() {
        assert!(Cli::try_parse_from(["staffdir", "--page", "0"]).is_err());
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "staffdir",
            "--base-url",
            "http://127.0.0.1:9000/users",
            "--page",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.page, 3);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000/users"));
    }
}
