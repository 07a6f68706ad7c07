pub mod content_loader;
pub mod signal;
pub mod theme;

pub use crate::core::signal::Signal;
pub use crate::domain::model::{ContactInfo, ServiceItem, SiteContent, TeamMember, ThemeMode};
pub use crate::domain::ports::{ColorSchemeQuery, ContentApi, DocumentFlagApplier, StorageProvider};
pub use crate::utils::error::Result;
