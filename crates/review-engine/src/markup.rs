//! Text heuristics standing in for visual markup detection

use serde::Serialize;

use crate::document::Document;
use crate::patterns::{
    contains_any, has_digit, BOLD_ANNOTATION_TOKEN, CALLOUT_MAX_CHARS, CALLOUT_TOKENS,
};

/// A line picked out by the scan, with its 1-based number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedLine {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkupScan {
    /// Lines with at least one digit, which should be rendered bold
    pub bold_candidates: Vec<MarkedLine>,
    /// Short lines that look like dimension callouts
    pub dimension_callouts: Vec<MarkedLine>,
    /// "Bold" appears somewhere in the document text
    pub has_bold_annotation: bool,
}

impl MarkupScan {
    pub fn bold_candidate_count(&self) -> usize {
        self.bold_candidates.len()
    }
}

pub fn scan_markup(document: &Document<'_>) -> MarkupScan {
    let mut scan = MarkupScan {
        has_bold_annotation: document.text().contains(BOLD_ANNOTATION_TOKEN),
        ..MarkupScan::default()
    };

    for (line, text) in document.numbered_lines() {
        let trimmed = text.trim();

        if contains_any(text, CALLOUT_TOKENS)
            && !trimmed.is_empty()
            && trimmed.chars().count() < CALLOUT_MAX_CHARS
        {
            scan.dimension_callouts.push(MarkedLine {
                line,
                text: trimmed.to_string(),
            });
        }

        if has_digit(text) {
            scan.bold_candidates.push(MarkedLine {
                line,
                text: trimmed.to_string(),
            });
        }
    }

    scan
}
