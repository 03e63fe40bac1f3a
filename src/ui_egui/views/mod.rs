pub mod activity_view;
pub mod mini_calendar;
pub mod month_year_picker;
pub mod onboarding_view;
mod palette;
pub mod week_row;
