//! Theme module for the learning journey UI
//!
//! Defines the JourneyTheme structure and resolves which theme to use from
//! the loaded settings.

use egui::Color32;

use crate::models::settings::Settings;

/// Orange accent used for chevrons, selected buttons and the flame badge.
pub const ACCENT: Color32 = Color32::from_rgb(255, 149, 0);
/// Blue used by the "Days Frozen" card.
pub const FROZEN_BLUE: Color32 = Color32::from_rgb(10, 132, 255);
/// Teal used by the "Days Frozen" icon.
pub const FROZEN_TEAL: Color32 = Color32::from_rgb(48, 176, 199);

/// All colors used by the screens
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Screen background color
    pub app_background: Color32,

    /// Calendar card fill
    pub card_background: Color32,

    /// Calendar card outline
    pub card_border: Color32,

    /// Month/year popup fill
    pub popup_background: Color32,

    /// Dimming layer drawn behind the popup
    pub scrim: Color32,

    /// Fill of the day-number circles
    pub day_circle: Color32,

    /// Primary text color (headings, day numbers)
    pub text_primary: Color32,

    /// Secondary text color (weekday captions, hints)
    pub text_secondary: Color32,

    /// Accent color for interactive glyphs
    pub accent: Color32,
}

impl JourneyTheme {
    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::BLACK,
            card_background: Color32::from_rgb(26, 26, 26),
            card_border: Color32::from_white_alpha(128),
            popup_background: Color32::from_rgb(28, 28, 30),
            scrim: Color32::from_black_alpha(77),
            day_circle: Color32::from_white_alpha(26),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_white_alpha(153),
            accent: ACCENT,
        }
    }

    /// Create the Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(242, 242, 247),
            card_background: Color32::WHITE,
            card_border: Color32::from_black_alpha(60),
            popup_background: Color32::WHITE,
            scrim: Color32::from_black_alpha(40),
            day_circle: Color32::from_black_alpha(18),
            text_primary: Color32::from_rgb(20, 20, 20),
            text_secondary: Color32::from_rgb(110, 110, 115),
            accent: ACCENT,
        }
    }

    /// Pick the theme named by the settings, asking the OS when it says "system".
    pub fn for_settings(settings: &Settings) -> Self {
        match settings.theme.to_lowercase().as_str() {
            "light" => Self::light(),
            "system" => match dark_light::detect() {
                dark_light::Mode::Light => Self::light(),
                dark_light::Mode::Dark | dark_light::Mode::Default => Self::dark(),
            },
            _ => Self::dark(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.popup_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.card_background;

        visuals.widgets.inactive.weak_bg_fill = self.day_circle;
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.6);
        visuals.selection.stroke = egui::Stroke::new(1.0, self.text_primary);

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme() {
        let theme = JourneyTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::BLACK);
        assert_eq!(theme.accent, ACCENT);
    }

    #[test]
    fn test_light_theme() {
        let theme = JourneyTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.card_background, Color32::WHITE);
    }

    #[test]
    fn test_theme_from_settings() {
        let mut settings = Settings::default();
        assert!(JourneyTheme::for_settings(&settings).is_dark);

        settings.theme = "Light".to_string();
        assert!(!JourneyTheme::for_settings(&settings).is_dark);
    }
}
