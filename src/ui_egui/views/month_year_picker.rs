//! Floating two-column month/year selector.
//!
//! The picker never touches the calendar's reference date. It reports what
//! the user picked through [`PickerEvent`] and the owner decides what to do.

use chrono::{Datelike, NaiveDate};
use egui::{Align, Order, Pos2, RichText, Sense};
use std::ops::RangeInclusive;

use crate::ui_egui::theme::JourneyTheme;
use crate::utils::date::month_name;

const COLUMN_WIDTH: f32 = 140.0;
const COLUMN_HEIGHT: f32 = 180.0;

/// Notifications emitted by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// A different month (1-12) was picked
    MonthChanged(u32),
    /// A different year was picked
    YearChanged(i32),
    /// Tap outside the popup or Escape
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct MonthYearPickerState {
    selected_month: u32,
    selected_year: i32,
    years: RangeInclusive<i32>,
    /// Scroll both columns to the selection on the next frame
    scroll_to_selection: bool,
}

impl MonthYearPickerState {
    pub fn new(month: u32, year: i32, years: RangeInclusive<i32>) -> Self {
        Self {
            selected_month: month.clamp(1, 12),
            selected_year: year.clamp(*years.start(), *years.end()),
            years,
            scroll_to_selection: true,
        }
    }

    pub fn for_date(date: NaiveDate, years: RangeInclusive<i32>) -> Self {
        Self::new(date.month(), date.year(), years)
    }

    pub fn selected_month(&self) -> u32 {
        self.selected_month
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    /// Mirror `date` into the selection (clamped to the year range).
    pub fn sync_from(&mut self, date: NaiveDate) {
        self.selected_month = date.month();
        self.selected_year = date.year().clamp(*self.years.start(), *self.years.end());
        self.scroll_to_selection = true;
    }

    /// Returns the change notification, or `None` when nothing changed.
    pub fn select_month(&mut self, month: u32) -> Option<PickerEvent> {
        if !(1..=12).contains(&month) || month == self.selected_month {
            return None;
        }
        self.selected_month = month;
        Some(PickerEvent::MonthChanged(month))
    }

    /// Returns the change notification, or `None` when nothing changed.
    pub fn select_year(&mut self, year: i32) -> Option<PickerEvent> {
        if !self.years.contains(&year) || year == self.selected_year {
            return None;
        }
        self.selected_year = year;
        Some(PickerEvent::YearChanged(year))
    }
}

pub struct MonthYearPicker;

impl MonthYearPicker {
    /// Draw the dimming layer and the popup with its top-left corner at `anchor`.
    pub fn show(
        ctx: &egui::Context,
        anchor: Pos2,
        state: &mut MonthYearPickerState,
        theme: &JourneyTheme,
    ) -> Option<PickerEvent> {
        let mut event = None;

        let screen_rect = ctx.screen_rect();
        egui::Area::new(egui::Id::new("month_year_picker_scrim"))
            .fixed_pos(screen_rect.min)
            .order(Order::Middle)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen_rect, Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, theme.scrim);
                if response.clicked() {
                    event = Some(PickerEvent::Dismissed);
                }
            });

        egui::Area::new(egui::Id::new("month_year_picker"))
            .fixed_pos(anchor)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme.popup_background)
                    .rounding(egui::Rounding::same(24.0))
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;
                            if let Some(changed) = Self::month_column(ui, state, theme) {
                                event = Some(changed);
                            }
                            if let Some(changed) = Self::year_column(ui, state, theme) {
                                event = Some(changed);
                            }
                        });
                    });
            });

        state.scroll_to_selection = false;

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            event = Some(PickerEvent::Dismissed);
        }

        event
    }

    fn month_column(
        ui: &mut egui::Ui,
        state: &mut MonthYearPickerState,
        theme: &JourneyTheme,
    ) -> Option<PickerEvent> {
        let mut event = None;
        egui::ScrollArea::vertical()
            .id_source("picker_month_column")
            .max_height(COLUMN_HEIGHT)
            .show(ui, |ui| {
                ui.set_width(COLUMN_WIDTH);
                for month in 1..=12u32 {
                    let selected = month == state.selected_month;
                    let response = ui.selectable_label(
                        selected,
                        Self::option_text(month_name(month), selected, theme),
                    );
                    if selected && state.scroll_to_selection {
                        response.scroll_to_me(Some(Align::Center));
                    }
                    if response.clicked() {
                        event = state.select_month(month);
                    }
                }
            });
        event
    }

    fn year_column(
        ui: &mut egui::Ui,
        state: &mut MonthYearPickerState,
        theme: &JourneyTheme,
    ) -> Option<PickerEvent> {
        let mut event = None;
        egui::ScrollArea::vertical()
            .id_source("picker_year_column")
            .max_height(COLUMN_HEIGHT)
            .show(ui, |ui| {
                ui.set_width(COLUMN_WIDTH);
                for year in state.years() {
                    let selected = year == state.selected_year;
                    let response = ui.selectable_label(
                        selected,
                        Self::option_text(&year.to_string(), selected, theme),
                    );
                    if selected && state.scroll_to_selection {
                        response.scroll_to_me(Some(Align::Center));
                    }
                    if response.clicked() {
                        event = state.select_year(year);
                    }
                }
            });
        event
    }

    fn option_text(text: &str, selected: bool, theme: &JourneyTheme) -> RichText {
        let text = RichText::new(text).size(18.0);
        if selected {
            text.strong().color(theme.text_primary)
        } else {
            text.color(theme.text_secondary)
        }
    }
}
