use crate::domain::model::{ContactInfo, ServiceItem, TeamMember};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The three read-only content endpoints.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn fetch_services(&self) -> Result<Vec<ServiceItem>>;
    async fn fetch_team(&self) -> Result<Vec<TeamMember>>;
    async fn fetch_contact(&self) -> Result<ContactInfo>;
}

/// String key-value store with `localStorage` semantics.
pub trait StorageProvider: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Boolean presentation flag on the document root.
pub trait DocumentFlagApplier: Send + Sync {
    fn set_flag(&self, enabled: bool);
}

/// System-level color scheme preference.
pub trait ColorSchemeQuery: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

#[async_trait]
impl<T: ContentApi + ?Sized> ContentApi for Arc<T> {
    async fn fetch_services(&self) -> Result<Vec<ServiceItem>> {
        (**self).fetch_services().await
    }

    async fn fetch_team(&self) -> Result<Vec<TeamMember>> {
        (**self).fetch_team().await
    }

    async fn fetch_contact(&self) -> Result<ContactInfo> {
        (**self).fetch_contact().await
    }
}

impl<T: StorageProvider + ?Sized> StorageProvider for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: DocumentFlagApplier + ?Sized> DocumentFlagApplier for Arc<T> {
    fn set_flag(&self, enabled: bool) {
        (**self).set_flag(enabled)
    }
}

impl<T: ColorSchemeQuery + ?Sized> ColorSchemeQuery for Arc<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}
