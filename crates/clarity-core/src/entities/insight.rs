use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of solutions every insight carries.
pub const SOLUTION_COUNT: usize = 3;

const SOLUTION_FIELD_NAMES: [(&str, &str); SOLUTION_COUNT] = [
    ("solution_1_title", "solution_1_description"),
    ("solution_2_title", "solution_2_description"),
    ("solution_3_title", "solution_3_description"),
];

/// One suggested approach inside an insight.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Solution {
    pub title: String,
    pub description: String,
}

impl Solution {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

/// The coach's parsed answer to one questionnaire.
///
/// Solutions are addressed by position (bookmarks refer to index 0..3), so
/// their order is part of the contract. Fields the model left out are empty
/// strings rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StructuredInsight {
    pub title: String,
    pub insight: String,
    pub solutions: [Solution; SOLUTION_COUNT],
    pub challenge: String,
}

impl StructuredInsight {
    /// Whether every scalar field and every solution half is populated.
    #[must_use]
    pub fn is_fully_populated(&self) -> bool {
        !self.title.is_empty()
            && !self.insight.is_empty()
            && !self.challenge.is_empty()
            && self
                .solutions
                .iter()
                .all(|s| !s.title.is_empty() && !s.description.is_empty())
    }

    /// Names of the fields that came back empty, in label order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.insight.is_empty() {
            missing.push("insight");
        }
        for (solution, (title, description)) in self.solutions.iter().zip(SOLUTION_FIELD_NAMES) {
            if solution.title.is_empty() {
                missing.push(title);
            }
            if solution.description.is_empty() {
                missing.push(description);
            }
        }
        if self.challenge.is_empty() {
            missing.push("challenge");
        }
        missing
    }
}
