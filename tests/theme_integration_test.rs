use site_content::domain::ports::StorageProvider;
use site_content::{
    DocumentRoot, FileStorage, FixedColorScheme, ThemeMode, ThemePreference, DARK_MODE_CLASS,
    THEME_STORAGE_KEY,
};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_toggled_theme_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().join("state/storage.json");

    let first_document = Arc::new(DocumentRoot::new());
    let first = ThemePreference::new(
        FileStorage::new(&storage_path),
        first_document.clone(),
        FixedColorScheme(false),
    );
    assert_eq!(first.initialize(), ThemeMode::Light);
    assert_eq!(first.toggle(), ThemeMode::Dark);
    assert!(first_document.has_class(DARK_MODE_CLASS));

    // The system preference no longer matters once a choice is stored.
    let second_document = Arc::new(DocumentRoot::new());
    let second = ThemePreference::new(
        FileStorage::new(&storage_path),
        second_document.clone(),
        FixedColorScheme(false),
    );
    assert_eq!(second.initialize(), ThemeMode::Dark);
    assert!(second_document.has_class(DARK_MODE_CLASS));

    let raw = std::fs::read_to_string(&storage_path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[THEME_STORAGE_KEY], "dark");
}

#[test]
fn test_toggle_round_trip_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileStorage::new(temp_dir.path().join("storage.json")));
    storage.set(THEME_STORAGE_KEY, "light").unwrap();

    let theme = ThemePreference::new(
        storage.clone(),
        Arc::new(DocumentRoot::new()),
        FixedColorScheme(true),
    );
    assert_eq!(theme.initialize(), ThemeMode::Light);

    theme.toggle();
    assert_eq!(
        storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );

    theme.toggle();
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(
        storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );
}
