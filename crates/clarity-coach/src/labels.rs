//! The labeled-line response format shared by the prompt and the extractor.

use std::fmt;

/// How far a labeled value extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Rest of the line, or up to a following label on the same line.
    Line,
    /// Everything up to the next label, newlines included.
    Block,
}

/// One of the nine markers of the response format, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Title,
    Insight,
    Solution1Title,
    Solution1Description,
    Solution2Title,
    Solution2Description,
    Solution3Title,
    Solution3Description,
    Challenge,
}

/// Every label with its shape, in response order.
pub const LABELS: [(Label, FieldShape); 9] = [
    (Label::Title, FieldShape::Line),
    (Label::Insight, FieldShape::Block),
    (Label::Solution1Title, FieldShape::Line),
    (Label::Solution1Description, FieldShape::Block),
    (Label::Solution2Title, FieldShape::Line),
    (Label::Solution2Description, FieldShape::Block),
    (Label::Solution3Title, FieldShape::Line),
    (Label::Solution3Description, FieldShape::Block),
    (Label::Challenge, FieldShape::Block),
];

impl Label {
    /// The literal marker, colon included.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Title => "TITLE:",
            Self::Insight => "INSIGHT:",
            Self::Solution1Title => "SOLUTION_1_TITLE:",
            Self::Solution1Description => "SOLUTION_1_DESCRIPTION:",
            Self::Solution2Title => "SOLUTION_2_TITLE:",
            Self::Solution2Description => "SOLUTION_2_DESCRIPTION:",
            Self::Solution3Title => "SOLUTION_3_TITLE:",
            Self::Solution3Description => "SOLUTION_3_DESCRIPTION:",
            Self::Challenge => "CHALLENGE:",
        }
    }

    /// Placeholder shown after the marker in the prompt's format block.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "[Your Title]",
            Self::Insight => "[Your Psychological Insight]",
            Self::Solution1Title => "[First Solution Title]",
            Self::Solution2Title => "[Second Solution Title]",
            Self::Solution3Title => "[Third Solution Title]",
            Self::Solution1Description
            | Self::Solution2Description
            | Self::Solution3Description => {
                "What It Is: [description]\nWhy It Works: [explanation]\nHow to Try It: [steps]"
            }
            Self::Challenge => "[Your Final Challenge]",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Whether a marker found at byte `pos` starts a token: the previous
/// character is neither ASCII alphanumeric nor `_`.
#[must_use]
pub fn at_token_boundary(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// Byte offset of the first occurrence of `label` at or after `from` that
/// sits on a token boundary.
#[must_use]
pub fn find_label(text: &str, label: Label, from: usize) -> Option<usize> {
    let marker = label.marker();
    let mut search = from;
    while let Some(rel) = text.get(search..)?.find(marker) {
        let pos = search + rel;
        if at_token_boundary(text, pos) {
            return Some(pos);
        }
        search = pos + marker.len();
    }
    None
}

/// Byte offset of the nearest occurrence of any label at or after `from`.
#[must_use]
pub fn next_label(text: &str, from: usize) -> Option<usize> {
    LABELS
        .iter()
        .filter_map(|&(label, _)| find_label(text, label, from))
        .min()
}
