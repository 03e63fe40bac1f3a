mod service;

pub use service::{SettingsService, CONFIG_ENV_VAR, SETTINGS_FILE_NAME};
