use crate::config::SiteConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "site-content")]
#[command(about = "Load site content and manage the theme preference")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override api.base_url")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Override theme.storage_path")]
    pub storage_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load services, team and contact content and print it as JSON
    Content,
    /// Show or toggle the persisted theme
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,

        #[arg(long, help = "Report a dark system color scheme")]
        prefers_dark: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}

impl CliConfig {
    /// Loads the TOML file (or defaults) and applies command-line overrides.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(base_url) = &self.api_base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(storage_path) = &self.storage_path {
            config.theme.storage_path = storage_path.clone();
        }

        Ok(config)
    }
}
