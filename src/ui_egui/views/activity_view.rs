//! Activity dashboard: header, mini calendar card and streak counters.

use egui::{Align, Align2, FontId, Layout, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::mini_calendar::{CalendarAction, MiniCalendar, MiniCalendarState};
use super::palette::{IconButtonPalette, ProgressCardPalette};
use crate::models::goal::LearningGoal;
use crate::models::streak::StreakSummary;
use crate::ui_egui::theme::JourneyTheme;

const ICON_BUTTON_SIZE: f32 = 40.0;
const CARD_SIZE: Vec2 = Vec2::new(160.0, 70.0);

/// Action returned from the activity view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    None,
    /// Go back to onboarding to change the goal
    EditGoal,
}

pub struct ActivityView;

impl ActivityView {
    pub fn show(
        ui: &mut egui::Ui,
        calendar: &mut MiniCalendarState,
        goal: Option<&LearningGoal>,
        streak: &StreakSummary,
        theme: &JourneyTheme,
    ) -> ActivityAction {
        let mut action = ActivityAction::None;

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("Activity").size(32.0).strong());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(24.0);
                ui.spacing_mut().item_spacing.x = 14.0;
                if Self::icon_button(ui, "✏", theme)
                    .on_hover_text("Edit learning goal")
                    .clicked()
                {
                    action = ActivityAction::EditGoal;
                }
                if Self::icon_button(ui, "📅", theme)
                    .on_hover_text("Back to today")
                    .clicked()
                {
                    calendar.apply(CalendarAction::JumpToToday);
                }
            });
        });
        ui.add_space(4.0);

        egui::Frame::none()
            .fill(theme.card_background)
            .stroke(Stroke::new(1.0, theme.card_border))
            .rounding(Rounding::same(22.0))
            .inner_margin(Margin::same(31.0))
            .outer_margin(Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                MiniCalendar::show(ui, calendar, theme);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                Self::streak_section(ui, goal, streak, theme);
            });

        action
    }

    fn streak_section(
        ui: &mut egui::Ui,
        goal: Option<&LearningGoal>,
        streak: &StreakSummary,
        theme: &JourneyTheme,
    ) {
        let heading = match goal {
            Some(goal) => format!("Learning {}", goal.topic),
            None => "Learning".to_string(),
        };
        ui.label(RichText::new(heading).strong().size(17.0));
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            Self::progress_card(
                ui,
                "🔥",
                streak.days_learned,
                "Days Learned",
                ProgressCardPalette::learned(theme),
            );
            Self::progress_card(
                ui,
                "❄",
                streak.days_frozen,
                "Days Frozen",
                ProgressCardPalette::frozen(theme),
            );
        });
    }

    fn progress_card(
        ui: &mut egui::Ui,
        icon: &str,
        count: u32,
        subtitle: &str,
        palette: ProgressCardPalette,
    ) {
        egui::Frame::none()
            .fill(palette.fill)
            .stroke(Stroke::new(0.5, palette.border))
            .rounding(Rounding::same(CARD_SIZE.y / 2.0))
            .inner_margin(Margin::symmetric(14.0, 1.0))
            .show(ui, |ui| {
                ui.set_min_size(CARD_SIZE - Vec2::new(28.0, 2.0));
                ui.horizontal_centered(|ui| {
                    ui.spacing_mut().item_spacing.x = 7.0;
                    ui.label(RichText::new(icon).size(20.0).color(palette.icon));
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new(count.to_string())
                                .size(20.0)
                                .strong()
                                .color(palette.text),
                        );
                        ui.label(RichText::new(subtitle).size(14.0).color(palette.text));
                    });
                });
            });
    }

    fn icon_button(ui: &mut egui::Ui, glyph: &str, theme: &JourneyTheme) -> egui::Response {
        let palette = IconButtonPalette::from_theme(theme);
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(ICON_BUTTON_SIZE), Sense::click());
        let radius = ICON_BUTTON_SIZE / 2.0;
        let painter = ui.painter();
        let fill = if response.hovered() {
            palette.fill.gamma_multiply(1.5)
        } else {
            palette.fill
        };
        painter.circle_filled(rect.center(), radius, fill);
        painter.circle_stroke(rect.center(), radius - 0.5, Stroke::new(1.0, palette.border));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(20.0),
            palette.glyph,
        );
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}
