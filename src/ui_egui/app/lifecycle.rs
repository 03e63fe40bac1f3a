use super::state::Screen;
use super::JourneyApp;
use crate::models::goal::LearningGoal;
use crate::models::settings::Settings;
use crate::models::streak::StreakSummary;
use crate::ui_egui::theme::JourneyTheme;
use crate::ui_egui::views::activity_view::{ActivityAction, ActivityView};
use crate::ui_egui::views::mini_calendar::MiniCalendarState;
use crate::ui_egui::views::onboarding_view::{OnboardingAction, OnboardingState, OnboardingView};
use chrono::{Local, NaiveDate};

impl JourneyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let today = Local::now().date_naive();
        log::info!(
            "Starting on {} (first day of week {}, years {}..={})",
            today,
            settings.first_day_of_week,
            settings.min_year,
            settings.max_year
        );

        let app = Self::with_settings(&settings, today);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app state without a window; `today` anchors the calendar.
    pub fn with_settings(settings: &Settings, today: NaiveDate) -> Self {
        let active_theme = JourneyTheme::for_settings(settings);
        let calendar = MiniCalendarState::new(today, settings);

        Self {
            active_theme,
            screen: Screen::default(),
            onboarding: OnboardingState::default(),
            goal: None,
            calendar,
            streak: StreakSummary::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn goal(&self) -> Option<&LearningGoal> {
        self.goal.as_ref()
    }

    pub fn calendar(&self) -> &MiniCalendarState {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut MiniCalendarState {
        &mut self.calendar
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .fill(self.active_theme.app_background)
            .inner_margin(egui::Margin::same(16.0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| match self.screen {
                Screen::Onboarding => {
                    let action = OnboardingView::show(ui, &mut self.onboarding, &self.active_theme);
                    if let OnboardingAction::Start(goal) = action {
                        self.start_learning(goal);
                    }
                }
                Screen::Activity => {
                    let action = ActivityView::show(
                        ui,
                        &mut self.calendar,
                        self.goal.as_ref(),
                        &self.streak,
                        &self.active_theme,
                    );
                    if action == ActivityAction::EditGoal {
                        self.edit_goal();
                    }
                }
            });
    }
}
