//! Questionnaire topics and wizard steps.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// One of the seven questionnaire topics, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Decision,
    Emotion,
    Today,
    Fear,
    Future,
    Friend,
    Assumption,
}

impl Topic {
    /// Every topic in the order the wizard asks them.
    pub const ALL: [Self; 7] = [
        Self::Decision,
        Self::Emotion,
        Self::Today,
        Self::Fear,
        Self::Future,
        Self::Friend,
        Self::Assumption,
    ];

    /// Return the string representation used in SQL column names and JSON keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Emotion => "emotion",
            Self::Today => "today",
            Self::Fear => "fear",
            Self::Future => "future",
            Self::Friend => "friend",
            Self::Assumption => "assumption",
        }
    }

    /// Human-readable label used when the topic is rendered into a prompt.
    #[must_use]
    pub const fn prompt_label(self) -> &'static str {
        match self {
            Self::Decision => "Decision",
            Self::Emotion => "Emotional State",
            Self::Today => "Current Situation",
            Self::Fear => "Fears",
            Self::Future => "Future Vision",
            Self::Friend => "Friend's Perspective",
            Self::Assumption => "Assumptions",
        }
    }

    /// The wizard step on which this topic is asked.
    #[must_use]
    pub const fn step(self) -> WizardStep {
        match self {
            Self::Decision | Self::Emotion => WizardStep::One,
            Self::Today | Self::Fear => WizardStep::Two,
            Self::Future | Self::Friend => WizardStep::Three,
            Self::Assumption => WizardStep::Four,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

/// The four steps of the questionnaire wizard.
///
/// ```text
/// one (decision, emotion) → two (today, fear) → three (future, friend) → four (assumption)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    One,
    Two,
    Three,
    Four,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Topics collected on this step.
    #[must_use]
    pub const fn topics(self) -> &'static [Topic] {
        match self {
            Self::One => &[Topic::Decision, Topic::Emotion],
            Self::Two => &[Topic::Today, Topic::Fear],
            Self::Three => &[Topic::Future, Topic::Friend],
            Self::Four => &[Topic::Assumption],
        }
    }

    /// 1-based position of the step.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.number())
    }
}
