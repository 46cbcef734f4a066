//! Line classification rules.
//!
//! Each rule is evaluated independently, so one line can carry several
//! categories at once.

use std::collections::BTreeSet;

use drawing_types::{LineCategory, MissingDataIssue};

use crate::patterns::{
    contains_any, has_digit, DIMENSION_TOKENS, MISSING_DATA_MARKERS, MISSING_DIMENSION_ISSUE,
    NOTE_LEADING_DIGITS, NOTE_TOKEN, SPECIFICATION_TOKENS,
};

struct Rule {
    category: LineCategory,
    matches: fn(&str) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        category: LineCategory::Dimension,
        matches: is_dimension,
    },
    Rule {
        category: LineCategory::Specification,
        matches: is_specification,
    },
    Rule {
        category: LineCategory::Note,
        matches: is_note,
    },
    Rule {
        category: LineCategory::MissingData,
        matches: is_missing_data,
    },
];

/// Line mentions "MM", "THK" or an uppercase "X" anywhere
pub fn is_dimension(line: &str) -> bool {
    contains_any(line, DIMENSION_TOKENS)
}

pub fn is_specification(line: &str) -> bool {
    contains_any(line, SPECIFICATION_TOKENS)
}

/// Numbered note ("1. ...", zero excluded) or explicit "NOTE"
pub fn is_note(line: &str) -> bool {
    line.trim().starts_with(NOTE_LEADING_DIGITS) || line.contains(NOTE_TOKEN)
}

/// Line references a bare " d"/" D" and its last token carries no digit.
///
/// This is a loose heuristic: "Good design" is flagged too.
pub fn is_missing_data(line: &str) -> bool {
    if !contains_any(line, MISSING_DATA_MARKERS) {
        return false;
    }
    line.split_whitespace()
        .last()
        .map_or(true, |token| !has_digit(token))
}

/// Categories a single line belongs to
pub fn classify_line(line: &str) -> BTreeSet<LineCategory> {
    RULES
        .iter()
        .filter(|rule| (rule.matches)(line))
        .map(|rule| rule.category)
        .collect()
}

/// Issue record for a line flagged as missing data
pub fn missing_data_issue(line: &str) -> Option<MissingDataIssue> {
    is_missing_data(line).then(|| MissingDataIssue {
        issue_description: MISSING_DIMENSION_ISSUE.to_string(),
        line_text: line.trim().to_string(),
    })
}
