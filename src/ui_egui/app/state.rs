/// Which screen fills the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Onboarding,
    Activity,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Onboarding => "Welcome",
            Screen::Activity => "Activity",
        }
    }
}
