// Property-based tests for the calendar date math
// Checks the week invariants against random dates and offsets

mod fixtures;

use chrono::{Datelike, Duration, NaiveDate};
use learning_journey::ui_egui::views::week_row::WeekRow;
use learning_journey::utils::date::{add_days, set_month_year, start_of_week};
use proptest::prelude::*;

/// Any date between 1900-01-01 and 2199-12-31.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..109_572).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    /// Property: the week start lands on the configured weekday, within the last 7 days
    #[test]
    fn prop_start_of_week_within_previous_seven_days(
        date in any_date(),
        first_day in 0u8..7,
    ) {
        let start = start_of_week(date, first_day);
        prop_assert_eq!(start.weekday().num_days_from_sunday(), first_day as u32);
        prop_assert!(start <= date);
        prop_assert!(start > date - Duration::days(7));
    }

    /// Property: start_of_week is idempotent
    #[test]
    fn prop_start_of_week_idempotent(date in any_date(), first_day in 0u8..7) {
        let start = start_of_week(date, first_day);
        prop_assert_eq!(start_of_week(start, first_day), start);
    }

    /// Property: shifting forward then back returns the original date
    #[test]
    fn prop_add_days_round_trips(date in any_date(), days in -20_000i64..20_000) {
        prop_assert_eq!(add_days(add_days(date, days), -days), date);
    }

    /// Property: the week row has 7 consecutive days and contains the reference date
    #[test]
    fn prop_week_row_is_seven_consecutive_days(date in any_date(), first_day in 0u8..7) {
        let cells = WeekRow::cells(date, first_day);
        prop_assert_eq!(cells.len(), 7);
        prop_assert_eq!(cells[0].date, start_of_week(date, first_day));
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        prop_assert!(cells.iter().any(|cell| cell.date == date));
    }

    /// Property: picking any valid month/year lands on the 1st of that month
    #[test]
    fn prop_set_month_year_lands_on_first(
        date in any_date(),
        month in 1u32..=12,
        year in 2000i32..=2100,
    ) {
        let picked = set_month_year(date, month, year);
        prop_assert_eq!(picked, NaiveDate::from_ymd_opt(year, month, 1).unwrap());
    }
}

#[test]
fn test_week_row_around_leap_day() {
    let cells = WeekRow::cells(fixtures::dates::leap_day_2024(), 0);
    assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
    assert_eq!(cells[4].day_label, "29");
    assert_eq!(cells[5].day_label, "1");
}
