//! Field extraction from sanitized completions.

use clarity_core::entities::{Solution, StructuredInsight};

use crate::error::CoachError;
use crate::labels::{FieldShape, LABELS, find_label, next_label};
use crate::sanitize::sanitize;

/// Pull the nine labeled fields out of sanitized text.
///
/// Labels are looked for in response order, each search starting where the
/// previous value ended. A label that is absent leaves its field empty and
/// does not move the cursor. Never fails.
#[must_use]
pub fn extract(sanitized: &str) -> StructuredInsight {
    let mut values: [String; LABELS.len()] = Default::default();
    let mut cursor = 0;

    for (slot, &(label, shape)) in values.iter_mut().zip(LABELS.iter()) {
        let Some(pos) = find_label(sanitized, label, cursor) else {
            continue;
        };
        let start = pos + label.marker().len();
        let end = value_end(sanitized, start, shape);
        *slot = clean(&sanitized[start..end]);
        cursor = end;
    }

    let [title, insight, s1t, s1d, s2t, s2d, s3t, s3d, challenge] = values;
    StructuredInsight {
        title,
        insight,
        solutions: [
            Solution::new(s1t, s1d),
            Solution::new(s2t, s2d),
            Solution::new(s3t, s3d),
        ],
        challenge,
    }
}

/// Sanitize a raw completion and extract its fields.
///
/// # Errors
///
/// Returns [`CoachError::StructuralMismatch`] when the completion is
/// structurally broken.
pub fn parse_completion(raw: &str) -> Result<StructuredInsight, CoachError> {
    let sanitized = sanitize(raw)?;
    let insight = extract(&sanitized);
    let missing = insight.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(?missing, "completion is missing fields");
    }
    Ok(insight)
}

fn value_end(text: &str, start: usize, shape: FieldShape) -> usize {
    let label_end = next_label(text, start).unwrap_or(text.len());
    match shape {
        FieldShape::Block => label_end,
        FieldShape::Line => {
            let line_end = text[start..].find('\n').map_or(text.len(), |i| start + i);
            line_end.min(label_end)
        }
    }
}

fn clean(raw: &str) -> String {
    raw.trim().replace("\\\"", "\"")
}
