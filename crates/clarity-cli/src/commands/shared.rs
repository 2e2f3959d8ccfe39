use std::io::Read;
use std::path::Path;

use anyhow::Context;

use clarity_core::entities::QuestionnaireAnswers;
use clarity_core::validation::normalize_adjustments;

/// Read a questionnaire from a JSON file in the API's wire format.
pub fn read_answers(path: &Path) -> anyhow::Result<QuestionnaireAnswers> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers from {}", path.display()))?;
    parse_answers(&raw).with_context(|| format!("invalid answers in {}", path.display()))
}

pub fn parse_answers(raw: &str) -> anyhow::Result<QuestionnaireAnswers> {
    let answers: QuestionnaireAnswers = serde_json::from_str(raw)?;
    answers
        .validate_complete()
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    Ok(answers)
}

/// Validate an optional `--adjust` value.
pub fn adjustments(raw: Option<&str>) -> anyhow::Result<Option<&str>> {
    raw.map(normalize_adjustments)
        .transpose()
        .map_err(|e| anyhow::anyhow!(e.user_message()))
}

/// Read a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    const COMPLETE: &str = r#"{
        "decision": "Move abroad?", "decisionRating": 5,
        "emotion": "Excited", "emotionRating": 4,
        "today": "Stable job", "todayRating": 3,
        "fear": "Loneliness", "fearRating": 4,
        "future": "New city", "futureRating": 5,
        "friend": "Do it", "friendRating": 2,
        "assumption": "Too late", "assumptionRating": 3
    }"#;

    #[test]
    fn reads_complete_answers_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(COMPLETE.as_bytes()).expect("write");
        let answers = read_answers(file.path()).expect("answers should load");
        assert_eq!(answers.fear, "Loneliness");
        assert_eq!(answers.friend_rating, 2);
    }

    #[test]
    fn incomplete_answers_are_rejected() {
        let err = parse_answers(r#"{"decision":"x","decisionRating":3}"#).unwrap_err();
        assert!(err.to_string().contains("emotion"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_answers(Path::new("/nonexistent/answers.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/answers.json"));
    }

    #[test]
    fn adjustments_are_trimmed_and_blank_rejected() {
        assert_eq!(adjustments(None).expect("none is fine"), None);
        assert_eq!(adjustments(Some("  more money  ")).expect("valid"), Some("more money"));
        let err = adjustments(Some("   ")).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in the adjustments");
    }
}
