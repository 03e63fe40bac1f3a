//! Date arithmetic and formatting used by the mini calendar.
//!
//! Everything here is a pure function of its arguments. Nothing reads the
//! system clock; callers pass "today" in explicitly.

use chrono::{Datelike, Duration, Month, NaiveDate};

/// Number of days shown in a week row.
pub const DAYS_IN_WEEK: usize = 7;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn start_of_week(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    add_days(date, -offset)
}

/// Shift `date` by `days` (which may be negative).
///
/// Returns `date` unchanged if the result would fall outside the
/// representable calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// Move to the 1st of `month`/`year`.
///
/// Out-of-range input leaves `date` untouched.
pub fn set_month_year(date: NaiveDate, month: u32, year: i32) -> NaiveDate {
    if !(1..=12).contains(&month) {
        return date;
    }
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// The seven consecutive dates of the week containing `reference`.
pub fn week_days(reference: NaiveDate, first_day_of_week: u8) -> [NaiveDate; DAYS_IN_WEEK] {
    let start = start_of_week(reference, first_day_of_week);
    let mut days = [start; DAYS_IN_WEEK];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = add_days(start, offset as i64);
    }
    days
}

/// Upper-cased three letter weekday, e.g. "WED".
pub fn short_weekday(date: NaiveDate) -> String {
    date.format("%a").to_string().to_uppercase()
}

/// Day of month without padding.
pub fn day_number(date: NaiveDate) -> String {
    date.day().to_string()
}

/// Header text such as "February 2024".
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Full English month name for 1-based `month`, or an empty string when out of range.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}
