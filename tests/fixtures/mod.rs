// Test fixtures - reusable test data
// Provides consistent dates and settings across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use learning_journey::models::settings::Settings;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Feb 28, 2024 (day before the leap day)
    pub fn before_leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()
    }

    /// Thursday, Feb 29, 2024
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Sunday, Oct 19, 2025
    pub fn launch_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    /// Wednesday, Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Sample settings for testing
pub mod settings {
    use super::*;

    /// Defaults: weeks start on Sunday, years 2000..=2100
    pub fn sunday_start() -> Settings {
        Settings::default()
    }

    pub fn monday_start() -> Settings {
        Settings {
            first_day_of_week: 1,
            ..Settings::default()
        }
    }
}
