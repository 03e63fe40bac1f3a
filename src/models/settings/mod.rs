//! Application settings.
//!
//! Loaded once at startup from `settings.toml`; nothing is written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest year any configuration may offer in the picker.
pub const EARLIEST_SUPPORTED_YEAR: i32 = 1900;
/// Highest year any configuration may offer in the picker.
pub const LATEST_SUPPORTED_YEAR: i32 = 2200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "dark", "light" or "system"
    pub theme: String,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// First year offered by the month/year picker
    pub min_year: i32,
    /// Last year offered by the month/year picker
    pub max_year: i32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            first_day_of_week: 0, // Sunday
            min_year: 2000,
            max_year: 2100,
            window_width: 430.0,
            window_height: 900.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !matches!(self.theme.to_lowercase().as_str(), "dark" | "light" | "system") {
            return Err(SettingsValidationError::UnknownTheme(self.theme.clone()));
        }

        if self.first_day_of_week > 6 {
            return Err(SettingsValidationError::InvalidFirstDayOfWeek(
                self.first_day_of_week,
            ));
        }

        if self.min_year > self.max_year {
            return Err(SettingsValidationError::EmptyYearRange {
                min: self.min_year,
                max: self.max_year,
            });
        }

        if self.min_year < EARLIEST_SUPPORTED_YEAR || self.max_year > LATEST_SUPPORTED_YEAR {
            return Err(SettingsValidationError::YearRangeUnsupported {
                min: self.min_year,
                max: self.max_year,
            });
        }

        let fits = |size: f32, min: f32| size.is_finite() && size >= min;
        if !fits(self.window_width, 320.0) || !fits(self.window_height, 480.0) {
            return Err(SettingsValidationError::WindowTooSmall);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsValidationError {
    #[error("Unknown theme '{0}' (expected dark, light or system)")]
    UnknownTheme(String),
    #[error("first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),
    #[error("Year range {min}..={max} is empty")]
    EmptyYearRange { min: i32, max: i32 },
    #[error(
        "Year range {min}..={max} must lie within {earliest}..={latest}",
        earliest = EARLIEST_SUPPORTED_YEAR,
        latest = LATEST_SUPPORTED_YEAR
    )]
    YearRangeUnsupported { min: i32, max: i32 },
    #[error("Window must be a finite size of at least 320x480")]
    WindowTooSmall,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_theme() {
        let settings = Settings {
            theme: "sepia".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsValidationError::UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn test_theme_is_case_insensitive() {
        let settings = Settings {
            theme: "System".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_year_range() {
        let settings = Settings {
            min_year: 2050,
            max_year: 2040,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsValidationError::EmptyYearRange { .. })
        ));
    }

    #[test]
    fn test_rejects_year_range_outside_supported() {
        let settings = Settings {
            min_year: 1500,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsValidationError::YearRangeUnsupported { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_window_size() {
        for (width, height) in [(f32::NAN, 900.0), (430.0, f32::INFINITY)] {
            let settings = Settings {
                window_width: width,
                window_height: height,
                ..Settings::default()
            };
            assert_eq!(
                settings.validate(),
                Err(SettingsValidationError::WindowTooSmall)
            );
        }
    }

    #[test]
    fn test_rejects_first_day_of_week_out_of_range() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsValidationError::InvalidFirstDayOfWeek(7))
        );
    }
}
