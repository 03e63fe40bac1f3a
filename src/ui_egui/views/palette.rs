use crate::ui_egui::theme::{JourneyTheme, FROZEN_BLUE, FROZEN_TEAL};
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for one streak progress card.
#[derive(Clone, Copy)]
pub(crate) struct ProgressCardPalette {
    pub fill: Color32,
    pub border: Color32,
    pub icon: Color32,
    pub text: Color32,
}

impl ProgressCardPalette {
    pub fn learned(theme: &JourneyTheme) -> Self {
        Self {
            fill: with_alpha(theme.accent, 51),
            border: with_alpha(theme.accent, 153),
            icon: theme.accent,
            text: theme.text_primary,
        }
    }

    pub fn frozen(theme: &JourneyTheme) -> Self {
        Self {
            fill: with_alpha(FROZEN_BLUE, 38),
            border: with_alpha(FROZEN_BLUE, 153),
            icon: FROZEN_TEAL,
            text: theme.text_primary,
        }
    }
}

/// Colors for the pill-shaped buttons on the onboarding screen.
#[derive(Clone, Copy)]
pub(crate) struct PillButtonPalette {
    pub fill: Color32,
    pub border: Color32,
    pub shadow: Color32,
    pub text: Color32,
}

impl PillButtonPalette {
    pub fn new(theme: &JourneyTheme, selected: bool) -> Self {
        if selected {
            Self {
                fill: with_alpha(theme.accent, 200),
                border: with_alpha(theme.accent, 230),
                shadow: with_alpha(theme.accent, 102),
                text: Color32::WHITE,
            }
        } else {
            let base = if theme.is_dark {
                Color32::WHITE
            } else {
                Color32::BLACK
            };
            Self {
                fill: with_alpha(base, 20),
                border: with_alpha(base, 20),
                shadow: Color32::TRANSPARENT,
                text: theme.text_primary,
            }
        }
    }
}

/// Colors for the round icon buttons in the activity header.
#[derive(Clone, Copy)]
pub(crate) struct IconButtonPalette {
    pub fill: Color32,
    pub border: Color32,
    pub glyph: Color32,
}

impl IconButtonPalette {
    pub fn from_theme(theme: &JourneyTheme) -> Self {
        Self {
            fill: with_alpha(theme.text_primary, 51),
            border: with_alpha(theme.text_primary, 153),
            glyph: theme.text_primary,
        }
    }
}
