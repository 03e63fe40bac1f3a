//! Learning goal captured on the onboarding screen.

use std::fmt;
use thiserror::Error;

/// Longest topic accepted from the text field.
pub const MAX_TOPIC_LEN: usize = 60;

/// How long the learner wants to spend on a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Week => "Week",
            Timeframe::Month => "Month",
            Timeframe::Year => "Year",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningGoal {
    /// What the learner wants to study (trimmed, never empty)
    pub topic: String,
    pub timeframe: Timeframe,
}

impl LearningGoal {
    /// Build a goal from raw text field input.
    pub fn new(topic: &str, timeframe: Timeframe) -> Result<Self, GoalValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GoalValidationError::EmptyTopic);
        }
        if topic.chars().count() > MAX_TOPIC_LEN {
            return Err(GoalValidationError::TopicTooLong);
        }

        Ok(Self {
            topic: topic.to_string(),
            timeframe,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GoalValidationError {
    #[error("Tell us what you want to learn")]
    EmptyTopic,
    #[error("Topic must be {} characters or less", MAX_TOPIC_LEN)]
    TopicTooLong,
}
