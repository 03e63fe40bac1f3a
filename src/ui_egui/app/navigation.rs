use super::{JourneyApp, Screen};
use crate::models::goal::LearningGoal;
use crate::ui_egui::views::onboarding_view::OnboardingState;

impl JourneyApp {
    /// Accept the goal from onboarding and show the dashboard.
    pub fn start_learning(&mut self, goal: LearningGoal) {
        log::info!(
            "Switching to {} for '{}' ({})",
            Screen::Activity.title(),
            goal.topic,
            goal.timeframe
        );
        self.goal = Some(goal);
        self.calendar.close_picker();
        self.screen = Screen::Activity;
    }

    /// Return to onboarding with the current goal prefilled.
    pub fn edit_goal(&mut self) {
        self.onboarding = match &self.goal {
            Some(goal) => OnboardingState::from_goal(goal),
            None => OnboardingState::default(),
        };
        self.calendar.close_picker();
        self.screen = Screen::Onboarding;
        log::info!("Switching to {}", Screen::Onboarding.title());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::goal::Timeframe;
    use crate::models::settings::Settings;
    use crate::ui_egui::views::mini_calendar::{CalendarAction, CalendarMode};
    use chrono::NaiveDate;

    fn app() -> JourneyApp {
        JourneyApp::with_settings(
            &Settings::default(),
            NaiveDate::from_ymd_opt(2025, 10, 19).unwrap(),
        )
    }

    #[test]
    fn test_starts_on_onboarding() {
        let app = app();
        assert_eq!(app.screen(), Screen::Onboarding);
        assert!(app.goal().is_none());
    }

    #[test]
    fn test_start_learning_switches_screen() {
        let mut app = app();
        let goal = LearningGoal::new("Swift", Timeframe::Month).unwrap();
        app.start_learning(goal.clone());
        assert_eq!(app.screen(), Screen::Activity);
        assert_eq!(app.goal(), Some(&goal));
    }

    #[test]
    fn test_edit_goal_prefills_onboarding_and_closes_picker() {
        let mut app = app();
        app.start_learning(LearningGoal::new("Rust", Timeframe::Year).unwrap());
        app.calendar_mut().apply(CalendarAction::TogglePicker);

        app.edit_goal();

        assert_eq!(app.screen(), Screen::Onboarding);
        assert_eq!(app.onboarding.topic_input, "Rust");
        assert_eq!(app.onboarding.timeframe, Timeframe::Year);
        assert_eq!(app.calendar().mode(), CalendarMode::Closed);
    }

    #[test]
    fn test_calendar_survives_screen_changes() {
        let mut app = app();
        app.start_learning(LearningGoal::new("Rust", Timeframe::Week).unwrap());
        app.calendar_mut().apply(CalendarAction::NextWeek);
        app.edit_goal();
        app.start_learning(LearningGoal::new("Go", Timeframe::Week).unwrap());
        assert_eq!(
            app.calendar().reference_date(),
            NaiveDate::from_ymd_opt(2025, 10, 26).unwrap()
        );
    }
}
