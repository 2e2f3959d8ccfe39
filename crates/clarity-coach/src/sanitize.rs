//! Textual repairs applied to a raw completion before extraction.
//!
//! Models wrap the labeled format in markdown: code fences, bold markers,
//! bullets, labels with their value pushed onto the next line. The repairs
//! below undo that in a fixed order. The result is a fixed point: sanitizing
//! sanitized text changes nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoachError;
use crate::labels::LABELS;

pub const UNMATCHED_BRACKETS: &str = "Unmatched brackets in response";
pub const UNMATCHED_BRACES: &str = "Unmatched curly braces in response";

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*-\s*").expect("valid regex"));

static LABEL_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let markers = LABELS
        .iter()
        .map(|(label, _)| regex::escape(label.marker()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"({markers})[^\S\n]*\n\s*")).expect("valid regex")
});

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid regex"));

/// Repair a raw completion.
///
/// # Errors
///
/// Returns [`CoachError::StructuralMismatch`] when square brackets or curly
/// braces are unbalanced after the repairs.
pub fn sanitize(raw: &str) -> Result<String, CoachError> {
    let text = strip_markdown(raw);
    let text = flatten_bullets(&text);
    let text = LABEL_BREAK_RE.replace_all(&text, "$1 ");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    let text = escape_quotes(&text);
    check_balance(&text)?;
    Ok(text)
}

/// Remove code fences and bold markers until neither remains. Removing one
/// can splice the other together, so both run inside the same loop.
fn strip_markdown(raw: &str) -> String {
    let mut text = raw.to_string();
    while text.contains("```") || text.contains("**") {
        text = text.replace("```json", "").replace("```", "");
        text = text.replace("**", "");
    }
    text
}

fn flatten_bullets(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = BULLET_RE.replace_all(&current, "\n");
        if next == current {
            return current;
        }
        current = next.into_owned();
    }
}

fn escape_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    for c in text.chars() {
        if c == '"' && prev != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn check_balance(text: &str) -> Result<(), CoachError> {
    let count = |needle: char| text.chars().filter(|&c| c == needle).count();
    if count('[') != count(']') {
        return Err(CoachError::StructuralMismatch(UNMATCHED_BRACKETS.into()));
    }
    if count('{') != count('}') {
        return Err(CoachError::StructuralMismatch(UNMATCHED_BRACES.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn joins_label_with_value_on_next_line() {
        assert_eq!(sanitize("INSIGHT:\n\nSome text").unwrap(), "INSIGHT: Some text");
        assert_eq!(
            sanitize("SOLUTION_1_TITLE:  \n  Walk more").unwrap(),
            "SOLUTION_1_TITLE: Walk more"
        );
    }

    #[test]
    fn label_followed_by_spaces_only_is_untouched() {
        assert_eq!(sanitize("TITLE:   Hello").unwrap(), "TITLE:   Hello");
    }

    #[test]
    fn strips_fences_and_bold() {
        let raw = "```json\n**TITLE:** Moving on\n```";
        let clean = sanitize(raw).unwrap();
        assert!(!clean.contains("```"));
        assert!(!clean.contains("**"));
        assert!(clean.contains("TITLE: Moving on"));
    }

    #[test]
    fn stripping_that_splices_new_markers_still_converges() {
        let clean = sanitize("a`**``b *``**`* c").unwrap();
        assert!(!clean.contains("```"));
        assert!(!clean.contains("**"));
    }

    #[test]
    fn flattens_nested_bullets() {
        assert_eq!(
            sanitize("list:\n- one\n  - two\n-\n- three").unwrap(),
            "list:\none\ntwo\nthree"
        );
    }

    #[test]
    fn collapses_three_or_more_newlines() {
        assert_eq!(sanitize("a\n\n\nb").unwrap(), "a\n\nb");
        assert_eq!(sanitize("a \n \n\n\n  b").unwrap(), "a \n\n  b");
        assert_eq!(sanitize("a\n\nb").unwrap(), "a\n\nb");
    }

    #[test]
    fn escapes_unescaped_quotes_only() {
        assert_eq!(sanitize(r#"say "hi""#).unwrap(), r#"say \"hi\""#);
        assert_eq!(sanitize(r#"already \"ok\""#).unwrap(), r#"already \"ok\""#);
    }

    #[rstest]
    #[case("SOLUTION: [foo", UNMATCHED_BRACKETS)]
    #[case("a ] b", UNMATCHED_BRACKETS)]
    #[case("{ open", UNMATCHED_BRACES)]
    #[case("[{]", UNMATCHED_BRACES)]
    fn unbalanced_input_is_a_structural_mismatch(#[case] raw: &str, #[case] reason: &str) {
        match sanitize(raw) {
            Err(CoachError::StructuralMismatch(msg)) => assert_eq!(msg, reason),
            other => panic!("expected structural mismatch, got {other:?}"),
        }
    }

    #[test]
    fn brackets_are_checked_before_braces() {
        let err = sanitize("[ {").unwrap_err();
        assert!(matches!(err, CoachError::StructuralMismatch(ref m) if m == UNMATCHED_BRACKETS));
    }

    #[rstest]
    #[case("INSIGHT:\n\nSome text")]
    #[case("```json\nTITLE:\n**Bold** \"quoted\"\n\n\n\n- bullet\n -  other\nCHALLENGE:\n\n")]
    #[case("a`**``b *``**`* c")]
    #[case("plain text with [balanced] {braces}")]
    #[case("x\n \n-\n\n- y \"z\" \\\"w\\\"")]
    fn sanitize_is_idempotent(#[case] raw: &str) {
        let once = sanitize(raw).unwrap();
        let twice = sanitize(&once).unwrap();
        assert_eq!(twice, once);
    }
}
