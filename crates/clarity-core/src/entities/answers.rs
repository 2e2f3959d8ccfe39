use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Topic, WizardStep};
use crate::errors::CoreError;

/// Highest star rating a topic can receive.
pub const MAX_RATING: u8 = 5;

/// The seven `(text, rating)` answers collected across the four wizard steps.
///
/// Field names follow the wire format (`decision`, `decisionRating`, ...).
/// Everything defaults to empty so a draft can be built up step by step; a
/// rating of `0` means "not rated".
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionnaireAnswers {
    pub decision: String,
    pub decision_rating: u8,
    pub emotion: String,
    pub emotion_rating: u8,
    pub today: String,
    pub today_rating: u8,
    pub fear: String,
    pub fear_rating: u8,
    pub future: String,
    pub future_rating: u8,
    pub friend: String,
    pub friend_rating: u8,
    pub assumption: String,
    pub assumption_rating: u8,
}

impl QuestionnaireAnswers {
    /// Answer text for a topic.
    #[must_use]
    pub fn text(&self, topic: Topic) -> &str {
        match topic {
            Topic::Decision => &self.decision,
            Topic::Emotion => &self.emotion,
            Topic::Today => &self.today,
            Topic::Fear => &self.fear,
            Topic::Future => &self.future,
            Topic::Friend => &self.friend,
            Topic::Assumption => &self.assumption,
        }
    }

    /// Star rating for a topic (`0` = unrated).
    #[must_use]
    pub const fn rating(&self, topic: Topic) -> u8 {
        match topic {
            Topic::Decision => self.decision_rating,
            Topic::Emotion => self.emotion_rating,
            Topic::Today => self.today_rating,
            Topic::Fear => self.fear_rating,
            Topic::Future => self.future_rating,
            Topic::Friend => self.friend_rating,
            Topic::Assumption => self.assumption_rating,
        }
    }

    /// Record the answer for one topic.
    pub fn set(&mut self, topic: Topic, text: impl Into<String>, rating: u8) {
        let text = text.into();
        let (slot, stars) = match topic {
            Topic::Decision => (&mut self.decision, &mut self.decision_rating),
            Topic::Emotion => (&mut self.emotion, &mut self.emotion_rating),
            Topic::Today => (&mut self.today, &mut self.today_rating),
            Topic::Fear => (&mut self.fear, &mut self.fear_rating),
            Topic::Future => (&mut self.future, &mut self.future_rating),
            Topic::Friend => (&mut self.friend, &mut self.friend_rating),
            Topic::Assumption => (&mut self.assumption, &mut self.assumption_rating),
        };
        *slot = text;
        *stars = rating;
    }

    /// Iterate `(topic, text, rating)` in wizard order.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, &str, u8)> + '_ {
        Topic::ALL
            .into_iter()
            .map(|topic| (topic, self.text(topic), self.rating(topic)))
    }

    /// Validate the answers collected on one wizard step.
    ///
    /// A step is valid when each answered topic carries a 1-5 rating and each
    /// unanswered topic carries none.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending topic.
    pub fn validate_step(&self, step: WizardStep) -> Result<(), CoreError> {
        for &topic in step.topics() {
            check_pair(topic, self.text(topic), self.rating(topic))?;
        }
        Ok(())
    }

    /// Validate every step of a draft without requiring completeness.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for the first invalid step.
    pub fn validate(&self) -> Result<(), CoreError> {
        WizardStep::ALL
            .into_iter()
            .try_for_each(|step| self.validate_step(step))
    }

    /// Validate that the answers are ready for prompt construction: every
    /// topic answered and rated.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing topic.
    pub fn validate_complete(&self) -> Result<(), CoreError> {
        self.validate()?;
        for (topic, text, _) in self.iter() {
            if text.trim().is_empty() {
                return Err(CoreError::validation(format!(
                    "Missing answer for '{topic}' ({})",
                    topic.step()
                )));
            }
        }
        Ok(())
    }
}

fn check_pair(topic: Topic, text: &str, rating: u8) -> Result<(), CoreError> {
    if rating > MAX_RATING {
        return Err(CoreError::validation(format!(
            "Rating for '{topic}' must be between 0 and {MAX_RATING}, got {rating}"
        )));
    }
    let answered = !text.trim().is_empty();
    if answered && rating == 0 {
        return Err(CoreError::validation(format!(
            "Please rate the importance of '{topic}'"
        )));
    }
    if !answered && rating > 0 {
        return Err(CoreError::validation(format!(
            "'{topic}' has a rating but no answer"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete() -> QuestionnaireAnswers {
        let mut answers = QuestionnaireAnswers::default();
        for (i, topic) in Topic::ALL.into_iter().enumerate() {
            answers.set(topic, format!("answer {i}"), 3);
        }
        answers
    }

    #[test]
    fn default_draft_is_valid_but_incomplete() {
        let answers = QuestionnaireAnswers::default();
        assert!(answers.validate().is_ok());
        assert!(answers.validate_complete().is_err());
    }

    #[test]
    fn complete_answers_pass() {
        let answers = complete();
        assert!(answers.validate_complete().is_ok());
    }

    #[rstest]
    #[case(Topic::Decision, "text", 0)]
    #[case(Topic::Fear, "", 2)]
    #[case(Topic::Assumption, "text", 6)]
    fn invalid_pairs_are_rejected(#[case] topic: Topic, #[case] text: &str, #[case] rating: u8) {
        let mut answers = complete();
        answers.set(topic, text, rating);
        let err = answers.validate_step(topic.step()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let mut answers = complete();
        answers.set(Topic::Friend, "   ", 0);
        assert!(answers.validate().is_ok());
        let err = answers.validate_complete().unwrap_err();
        assert!(err.to_string().contains("friend"));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let answers = complete();
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["decisionRating"], 3);
        assert_eq!(json["assumption"], "answer 6");

        let partial: QuestionnaireAnswers =
            serde_json::from_str(r#"{"decision":"move","decisionRating":4}"#).unwrap();
        assert_eq!(partial.decision, "move");
        assert_eq!(partial.rating(Topic::Decision), 4);
        assert_eq!(partial.text(Topic::Emotion), "");
    }
}
