//! Onboarding screen: pick a topic and a timeframe, then start learning.

use egui::{Align2, Color32, FontId, Margin, RichText, Rounding, Sense, Shadow, Stroke, Vec2};

use super::palette::PillButtonPalette;
use crate::models::goal::{GoalValidationError, LearningGoal, Timeframe};
use crate::ui_egui::theme::JourneyTheme;

const BADGE_DIAMETER: f32 = 120.0;
const TIMEFRAME_BUTTON_SIZE: Vec2 = Vec2::new(90.0, 42.0);
const START_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);
/// Dark red at the top-left of the flame badge
const BADGE_GLOW: Color32 = Color32::from_rgb(77, 5, 3);

/// Text field and timeframe selection
#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    pub topic_input: String,
    pub timeframe: Timeframe,
}

impl OnboardingState {
    /// Prefill the form when the learner comes back to edit their goal.
    pub fn from_goal(goal: &LearningGoal) -> Self {
        Self {
            topic_input: goal.topic.clone(),
            timeframe: goal.timeframe,
        }
    }

    pub fn goal(&self) -> Result<LearningGoal, GoalValidationError> {
        LearningGoal::new(&self.topic_input, self.timeframe)
    }
}

/// Action returned from the onboarding view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    None,
    Start(LearningGoal),
}

pub struct OnboardingView;

impl OnboardingView {
    pub fn show(
        ui: &mut egui::Ui,
        state: &mut OnboardingState,
        theme: &JourneyTheme,
    ) -> OnboardingAction {
        let mut action = OnboardingAction::None;

        ui.add_space(36.0);
        ui.vertical_centered(|ui| Self::flame_badge(ui, theme));
        ui.add_space(24.0);

        egui::Frame::none()
            .inner_margin(Margin::symmetric(12.0, 0.0))
            .show(ui, |ui| {
                ui.label(RichText::new("Hello Learner").size(34.0).strong());
                ui.label(
                    RichText::new("This app will help you learn everyday!")
                        .size(17.0)
                        .color(theme.text_secondary),
                );

                ui.add_space(32.0);
                ui.label(RichText::new("I want to learn").size(22.0));
                ui.add_space(8.0);
                let field = ui.add(
                    egui::TextEdit::singleline(&mut state.topic_input)
                        .hint_text("Swift")
                        .frame(false)
                        .font(FontId::proportional(17.0))
                        .desired_width(f32::INFINITY),
                );
                ui.separator();

                ui.add_space(24.0);
                ui.label(RichText::new("I want to learn it in a").size(22.0));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 14.0;
                    for timeframe in Timeframe::ALL {
                        let selected = state.timeframe == timeframe;
                        let response = Self::pill_button(
                            ui,
                            timeframe.label(),
                            TIMEFRAME_BUTTON_SIZE,
                            selected,
                            theme,
                        );
                        if response.clicked() {
                            state.timeframe = timeframe;
                            field.surrender_focus();
                        }
                    }
                });
            });

        ui.add_space(48.0);
        let goal = state.goal();
        ui.vertical_centered(|ui| {
            let button = ui.add_enabled_ui(goal.is_ok(), |ui| {
                Self::pill_button(ui, "Start learning", START_BUTTON_SIZE, true, theme)
            });
            if button.inner.clicked() {
                if let Ok(goal) = &goal {
                    log::info!("Start learning {} in a {}", goal.topic, goal.timeframe);
                    action = OnboardingAction::Start(goal.clone());
                }
            }

            if let Err(err) = &goal {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(err.to_string())
                        .size(13.0)
                        .color(theme.text_secondary),
                );
            }
        });

        action
    }

    fn flame_badge(ui: &mut egui::Ui, theme: &JourneyTheme) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(BADGE_DIAMETER), Sense::hover());
        let painter = ui.painter();
        let radius = BADGE_DIAMETER / 2.0;
        painter.circle_filled(rect.center(), radius, theme.app_background);
        painter.circle_filled(
            rect.center() - Vec2::splat(radius * 0.3),
            radius * 0.6,
            BADGE_GLOW.gamma_multiply(0.7),
        );
        painter.circle_stroke(
            rect.center(),
            radius,
            Stroke::new(0.9, theme.accent.gamma_multiply(0.8)),
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "🔥",
            FontId::proportional(48.0),
            theme.accent,
        );
    }

    fn pill_button(
        ui: &mut egui::Ui,
        text: &str,
        size: Vec2,
        selected: bool,
        theme: &JourneyTheme,
    ) -> egui::Response {
        let palette = PillButtonPalette::new(theme, selected);
        let radius = size.y / 2.0;
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let text_color = if ui.is_enabled() {
            palette.text
        } else {
            palette.text.gamma_multiply(0.4)
        };

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            if palette.shadow != Color32::TRANSPARENT && ui.is_enabled() {
                let shadow = Shadow {
                    offset: Vec2::new(0.0, 3.0),
                    blur: 8.0,
                    spread: 0.0,
                    color: palette.shadow,
                };
                painter.add(shadow.as_shape(rect, Rounding::same(radius)));
            }
            painter.rect(
                rect,
                Rounding::same(radius),
                palette.fill,
                Stroke::new(1.2, palette.border),
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(16.0),
                text_color,
            );
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}
