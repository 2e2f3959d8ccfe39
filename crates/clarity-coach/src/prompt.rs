//! Prompt rendering for the coach.
//!
//! The prompt embeds every answer with its star rating, describes the wanted
//! analysis, and ends with the labeled-line format contract the extractor
//! relies on.

use std::fmt::Write;

use clarity_core::entities::QuestionnaireAnswers;

use crate::labels::LABELS;

const INTRO: &str = "As an empathetic AI coach, analyze the following responses about a personal dilemma and provide structured guidance:";

const ANALYSIS: &str = "\
Based on these responses, create a structured analysis following this exact format:

1. Title: A compelling, problem-reframing title that captures the core challenge and hints at transformation.

2. Psychological Insight: 3-5 sentences providing deep, personalized analysis of their emotional drivers and blind spots, explaining the underlying psychology and priming them for new thinking.

3. Three Solutions:
For each solution, provide:
- Solution Title: A clear, action-oriented title
- What It Is: One concise, thought-provoking sentence describing the approach
- Why It Works: 2-3 sentences explaining the psychological principles that make this approach effective
- How to Try It: 1-2 practical, low-barrier action steps to get started

4. Final Challenge: A specific, actionable question that prompts immediate reflection or action.";

const CLOSING: &str =
    "Keep the tone empathetic but direct, and ensure each solution is practical and actionable.";

/// Render the prompt for a complete answer set.
///
/// A non-blank `adjustments` adds a guidance section before the format
/// block. The format block is the last instruction; only the one-line tone
/// reminder follows it.
#[must_use]
pub fn build_prompt(answers: &QuestionnaireAnswers, adjustments: Option<&str>) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(INTRO);
    out.push_str("\n\n");
    for (topic, text, rating) in answers.iter() {
        let _ = writeln!(
            out,
            "{}: {} ({rating} stars)",
            topic.prompt_label(),
            text.trim()
        );
    }

    out.push('\n');
    out.push_str(ANALYSIS);
    out.push_str("\n\n");

    if let Some(guidance) = adjustments.map(str::trim).filter(|g| !g.is_empty()) {
        out.push_str(
            "Additional guidance from the user about a previous answer. Take it into account:\n",
        );
        out.push_str(guidance);
        out.push_str("\n\n");
    }

    out.push_str("Format your response exactly like this:\n");
    out.push_str(&format_block());
    out.push('\n');
    out.push_str(CLOSING);
    out
}

/// The labeled-line format contract, one label per line in response order.
#[must_use]
pub fn format_block() -> String {
    let mut block = String::new();
    for (label, _) in LABELS {
        let _ = writeln!(block, "{} {}", label.marker(), label.placeholder());
    }
    block
}
