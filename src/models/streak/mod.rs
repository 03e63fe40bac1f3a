//! Streak counters shown on the activity dashboard.

/// Display values for the two progress cards.
///
/// Nothing records learning activity yet, so both counters stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    pub days_learned: u32,
    pub days_frozen: u32,
}
