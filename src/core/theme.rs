use crate::core::{ColorSchemeQuery, DocumentFlagApplier, Signal, StorageProvider, ThemeMode};

pub const THEME_STORAGE_KEY: &str = "theme";

/// Persisted light/dark preference mirrored onto the document flag.
pub struct ThemePreference<S, D, Q> {
    storage: S,
    document: D,
    color_scheme: Q,
    is_dark: Signal<bool>,
}

impl<S, D, Q> ThemePreference<S, D, Q>
where
    S: StorageProvider,
    D: DocumentFlagApplier,
    Q: ColorSchemeQuery,
{
    /// Starts in light mode; nothing is read or applied until
    /// [`ThemePreference::initialize`] runs.
    pub fn new(storage: S, document: D, color_scheme: Q) -> Self {
        Self {
            storage,
            document,
            color_scheme,
            is_dark: Signal::new(false),
        }
    }

    /// Observable dark flag.
    pub fn is_dark(&self) -> &Signal<bool> {
        &self.is_dark
    }

    pub fn mode(&self) -> ThemeMode {
        self.is_dark.with(|is_dark| ThemeMode::from_dark(*is_dark))
    }

    /// Resolves the mode from storage, falling back to the system
    /// preference, and applies it to the document.
    pub fn initialize(&self) -> ThemeMode {
        let mode = match self.saved_mode() {
            Some(mode) => mode,
            None => ThemeMode::from_dark(self.color_scheme.prefers_dark()),
        };
        tracing::debug!("Initial theme: {}", mode);

        self.is_dark.set(mode.is_dark());
        self.apply(mode);
        mode
    }

    /// Flips the mode, persists it under `"theme"` and re-applies the
    /// document flag. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mode = self.mode().toggled();
        self.is_dark.set(mode.is_dark());

        // The in-memory mode stays authoritative when the write fails.
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, mode.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }

        self.apply(mode);
        tracing::debug!("Theme toggled to {}", mode);
        mode
    }

    fn saved_mode(&self) -> Option<ThemeMode> {
        match self.storage.get(THEME_STORAGE_KEY) {
            Ok(Some(saved)) if !saved.is_empty() => Some(ThemeMode::from_stored(&saved)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                None
            }
        }
    }

    fn apply(&self, mode: ThemeMode) {
        self.document.set_flag(mode.is_dark());
    }
}
