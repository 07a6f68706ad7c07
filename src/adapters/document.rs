use crate::core::{ColorSchemeQuery, DocumentFlagApplier};
use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Class list of the document root element. The marker class tracks the
/// dark-mode flag.
#[derive(Debug)]
pub struct DocumentRoot {
    marker_class: String,
    classes: RwLock<BTreeSet<String>>,
}

impl DocumentRoot {
    /// Empty root using the `dark-mode` marker.
    pub fn new() -> Self {
        Self::with_marker(DARK_MODE_CLASS)
    }

    /// Empty root that toggles `marker_class` for the dark flag.
    pub fn with_marker(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
            classes: RwLock::new(BTreeSet::new()),
        }
    }

    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    // Poisoned locks are recovered; updates are never dropped.
    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<String>> {
        self.classes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<String>> {
        self.classes.write().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovering poisoned document class list");
            poisoned.into_inner()
        })
    }

    pub fn add_class(&self, class: &str) {
        self.write().insert(class.to_string());
    }

    pub fn remove_class(&self, class: &str) {
        self.write().remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.read().contains(class)
    }

    /// Classes in sorted order.
    pub fn class_list(&self) -> Vec<String> {
        self.read().iter().cloned().collect()
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFlagApplier for DocumentRoot {
    fn set_flag(&self, enabled: bool) {
        if enabled {
            self.add_class(&self.marker_class);
        } else {
            self.remove_class(&self.marker_class);
        }
    }
}

/// System preference known up front, e.g. from a command-line flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
