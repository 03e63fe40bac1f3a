// Integration tests for loading settings.toml from disk

use learning_journey::models::settings::Settings;
use learning_journey::services::settings::SettingsService;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_load_settings_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "theme = \"light\"\nfirst_day_of_week = 1\nmin_year = 2010\nmax_year = 2030\n",
    )
    .expect("Failed to write settings");

    let settings = SettingsService::new(&path).load().expect("Failed to load settings");
    assert_eq!(
        settings,
        Settings {
            theme: "light".to_string(),
            first_day_of_week: 1,
            min_year: 2010,
            max_year: 2030,
            ..Settings::default()
        }
    );
}

#[test]
fn test_invalid_settings_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "first_day_of_week = 9\n").expect("Failed to write settings");

    let service = SettingsService::new(&path);
    let err = service.load().unwrap_err();
    assert!(format!("{:#}", err).contains("first_day_of_week"));
    assert_eq!(service.load_or_default(), Settings::default());
}

#[test]
fn test_missing_settings_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let service = SettingsService::new(dir.path().join("absent.toml"));
    assert_eq!(service.load().unwrap(), Settings::default());
}
