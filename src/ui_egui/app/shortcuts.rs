use super::{JourneyApp, Screen};
use crate::ui_egui::views::mini_calendar::CalendarAction;

impl JourneyApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.screen != Screen::Activity {
            return;
        }

        let action = ctx.input(|i| {
            if i.modifiers.command && i.key_pressed(egui::Key::T) {
                Some(CalendarAction::JumpToToday)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(CalendarAction::PreviousWeek)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(CalendarAction::NextWeek)
            } else {
                None
            }
        });

        if let Some(action) = action {
            self.calendar.apply(action);
        }
    }
}
