//! Mini calendar: month title, week navigation and a single week row.
//!
//! [`MiniCalendarState`] is a small state machine with two modes,
//! [`CalendarMode::Closed`] and [`CalendarMode::PickerOpen`]. Every change
//! goes through [`MiniCalendarState::apply`]; the view only emits
//! [`CalendarAction`]s.

use chrono::NaiveDate;
use egui::{Pos2, RichText, Vec2};

use super::month_year_picker::{MonthYearPicker, MonthYearPickerState, PickerEvent};
use super::week_row::{WeekDayCell, WeekRow};
use crate::models::settings::Settings;
use crate::ui_egui::theme::JourneyTheme;
use crate::utils::date::{add_days, month_title, set_month_year, DAYS_IN_WEEK};

/// Vertical gap between the header and the popup
const POPUP_OFFSET: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarMode {
    #[default]
    Closed,
    PickerOpen,
}

/// Everything that can change the mini calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    /// Month/year label tapped
    TogglePicker,
    /// Tap outside the popup
    DismissPicker,
    /// Month picked in the popup (1-12)
    MonthChanged(u32),
    /// Year picked in the popup
    YearChanged(i32),
    PreviousWeek,
    NextWeek,
    /// Back to the date the calendar was created with
    JumpToToday,
}

impl From<PickerEvent> for CalendarAction {
    fn from(event: PickerEvent) -> Self {
        match event {
            PickerEvent::MonthChanged(month) => CalendarAction::MonthChanged(month),
            PickerEvent::YearChanged(year) => CalendarAction::YearChanged(year),
            PickerEvent::Dismissed => CalendarAction::DismissPicker,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MiniCalendarState {
    today: NaiveDate,
    reference_date: NaiveDate,
    mode: CalendarMode,
    picker: MonthYearPickerState,
    first_day_of_week: u8,
}

impl MiniCalendarState {
    pub fn new(today: NaiveDate, settings: &Settings) -> Self {
        Self {
            today,
            reference_date: today,
            mode: CalendarMode::Closed,
            picker: MonthYearPickerState::for_date(
                today,
                settings.min_year..=settings.max_year,
            ),
            first_day_of_week: settings.first_day_of_week,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    pub fn is_picker_open(&self) -> bool {
        self.mode == CalendarMode::PickerOpen
    }

    pub fn picker(&self) -> &MonthYearPickerState {
        &self.picker
    }

    /// Header text, e.g. "February 2024".
    pub fn title(&self) -> String {
        month_title(self.reference_date)
    }

    /// The visible week, derived from the reference date.
    pub fn week(&self) -> [WeekDayCell; DAYS_IN_WEEK] {
        WeekRow::cells(self.reference_date, self.first_day_of_week)
    }

    pub fn open_picker(&mut self) {
        self.picker.sync_from(self.reference_date);
        self.mode = CalendarMode::PickerOpen;
    }

    pub fn close_picker(&mut self) {
        self.mode = CalendarMode::Closed;
    }

    pub fn apply(&mut self, action: CalendarAction) {
        log::debug!("mini calendar: {:?} in {:?}", action, self.mode);

        match action {
            CalendarAction::TogglePicker => match self.mode {
                CalendarMode::Closed => self.open_picker(),
                CalendarMode::PickerOpen => self.close_picker(),
            },
            CalendarAction::DismissPicker => self.close_picker(),
            CalendarAction::MonthChanged(month) => {
                self.picker.select_month(month);
                if self.picker.selected_month() == month {
                    self.reselect();
                }
            }
            CalendarAction::YearChanged(year) => {
                self.picker.select_year(year);
                if self.picker.selected_year() == year {
                    self.reselect();
                }
            }
            CalendarAction::PreviousWeek => {
                self.move_to(add_days(self.reference_date, -(DAYS_IN_WEEK as i64)));
            }
            CalendarAction::NextWeek => {
                self.move_to(add_days(self.reference_date, DAYS_IN_WEEK as i64));
            }
            CalendarAction::JumpToToday => self.move_to(self.today),
        }
    }

    /// Navigate without going through the picker; the picker follows along.
    fn move_to(&mut self, date: NaiveDate) {
        self.reference_date = date;
        self.picker.sync_from(date);
    }

    /// Move the reference date to the 1st of the picker's month and year.
    fn reselect(&mut self) {
        self.reference_date = set_month_year(
            self.reference_date,
            self.picker.selected_month(),
            self.picker.selected_year(),
        );
    }
}

pub struct MiniCalendar;

impl MiniCalendar {
    /// Render header, week row and (when open) the picker popup.
    ///
    /// The emitted action has already been applied to `state` when this returns.
    pub fn show(
        ui: &mut egui::Ui,
        state: &mut MiniCalendarState,
        theme: &JourneyTheme,
    ) -> Option<CalendarAction> {
        let mut action = None;

        let header = ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 7.0;
            if ui
                .add(
                    egui::Label::new(RichText::new(state.title()).strong().size(17.0))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            {
                action = Some(CalendarAction::TogglePicker);
            }

            let toggle_glyph = if state.is_picker_open() { "▼" } else { "▶" };
            if ui.add(Self::chevron(toggle_glyph, theme)).clicked() {
                action = Some(CalendarAction::TogglePicker);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 20.0;
                if ui
                    .add(Self::chevron("▶", theme))
                    .on_hover_text("Next week")
                    .clicked()
                {
                    action = Some(CalendarAction::NextWeek);
                }
                if ui
                    .add(Self::chevron("◀", theme))
                    .on_hover_text("Previous week")
                    .clicked()
                {
                    action = Some(CalendarAction::PreviousWeek);
                }
            });
        });

        ui.add_space(10.0);
        WeekRow::show(ui, state.reference_date, state.first_day_of_week, theme);

        if state.is_picker_open() {
            let header_rect = header.response.rect;
            let anchor = Pos2::new(header_rect.left(), header_rect.bottom() + POPUP_OFFSET);
            let event = MonthYearPicker::show(ui.ctx(), anchor, &mut state.picker, theme);
            if let Some(event) = event {
                action = Some(event.into());
            }
        }

        if let Some(action) = action {
            state.apply(action);
        }
        action
    }

    fn chevron(glyph: &str, theme: &JourneyTheme) -> egui::Button<'static> {
        egui::Button::new(RichText::new(glyph).color(theme.accent).size(15.0))
            .frame(false)
            .min_size(Vec2::splat(24.0))
    }
}
