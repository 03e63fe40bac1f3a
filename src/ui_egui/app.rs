mod lifecycle;
mod navigation;
mod shortcuts;
mod state;

pub use self::state::Screen;

use crate::models::goal::LearningGoal;
use crate::models::streak::StreakSummary;
use crate::ui_egui::theme::JourneyTheme;
use crate::ui_egui::views::mini_calendar::MiniCalendarState;
use crate::ui_egui::views::onboarding_view::OnboardingState;

pub struct JourneyApp {
    /// Currently applied theme colors
    active_theme: JourneyTheme,
    screen: Screen,
    onboarding: OnboardingState,
    /// Goal submitted from onboarding, if any
    goal: Option<LearningGoal>,
    calendar: MiniCalendarState,
    streak: StreakSummary,
}

impl eframe::App for JourneyApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
