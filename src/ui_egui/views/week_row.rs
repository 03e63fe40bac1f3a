//! Seven day cells for the week containing the reference date.
//!
//! Display only: the row holds no state and is recomputed every frame.

use chrono::NaiveDate;
use egui::{Align, Align2, FontId, Layout, RichText, Sense, Vec2};

use crate::ui_egui::theme::JourneyTheme;
use crate::utils::date::{day_number, short_weekday, week_days, DAYS_IN_WEEK};

const CELL_SPACING: f32 = 14.0;
const CIRCLE_DIAMETER: f32 = 36.0;

/// One rendered day: caption plus number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDayCell {
    pub date: NaiveDate,
    /// e.g. "MON"
    pub weekday_label: String,
    /// e.g. "5"
    pub day_label: String,
}

impl WeekDayCell {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            weekday_label: short_weekday(date),
            day_label: day_number(date),
        }
    }
}

pub struct WeekRow;

impl WeekRow {
    /// Cells in chronological order, starting on `first_day_of_week`.
    pub fn cells(reference: NaiveDate, first_day_of_week: u8) -> [WeekDayCell; DAYS_IN_WEEK] {
        week_days(reference, first_day_of_week).map(WeekDayCell::from_date)
    }

    pub fn show(
        ui: &mut egui::Ui,
        reference: NaiveDate,
        first_day_of_week: u8,
        theme: &JourneyTheme,
    ) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CELL_SPACING;
            for cell in Self::cells(reference, first_day_of_week) {
                Self::show_cell(ui, &cell, theme);
            }
        });
    }

    fn show_cell(ui: &mut egui::Ui, cell: &WeekDayCell, theme: &JourneyTheme) {
        ui.allocate_ui_with_layout(
            Vec2::new(CIRCLE_DIAMETER, CIRCLE_DIAMETER + 22.0),
            Layout::top_down(Align::Center),
            |ui| {
                ui.spacing_mut().item_spacing.y = 6.0;
                ui.label(
                    RichText::new(&cell.weekday_label)
                        .size(11.0)
                        .color(theme.text_secondary),
                );

                let (rect, _) =
                    ui.allocate_exact_size(Vec2::splat(CIRCLE_DIAMETER), Sense::hover());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), CIRCLE_DIAMETER / 2.0, theme.day_circle);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    &cell.day_label,
                    FontId::proportional(16.0),
                    theme.text_primary,
                );
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cells_start_on_sunday() {
        let reference = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let cells = WeekRow::cells(reference, 0);

        let labels: Vec<_> = cells.iter().map(|c| c.weekday_label.as_str()).collect();
        assert_eq!(labels, ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"]);

        let numbers: Vec<_> = cells.iter().map(|c| c.day_label.as_str()).collect();
        assert_eq!(numbers, ["28", "29", "30", "31", "1", "2", "3"]);
    }

    #[test]
    fn test_cells_start_on_monday() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(); // Sunday
        let cells = WeekRow::cells(reference, 1);
        assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(cells[6].date, reference);
        assert_eq!(cells[0].weekday_label, "MON");
    }
}
