pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command, ThemeAction};
pub use config::SiteConfig;

pub use adapters::{
    document::{DocumentRoot, FixedColorScheme, DARK_MODE_CLASS},
    http::HttpContentApi,
    storage::{FileStorage, MemoryStorage},
};
pub use crate::core::{
    content_loader::{ContentLoader, ContentOrigin},
    signal::Signal,
    theme::{ThemePreference, THEME_STORAGE_KEY},
};
pub use domain::model::{ContactInfo, ServiceItem, SiteContent, TeamMember, ThemeMode};
pub use utils::error::{Result, SiteError};
