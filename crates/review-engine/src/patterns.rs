//! Literal tokens and thresholds used to classify and score drawing text.
//!
//! All token matching is case-sensitive substring matching.

/// Tokens marking a dimension-bearing line
pub const DIMENSION_TOKENS: &[&str] = &["MM", "THK", "X"];

/// Material specification tokens
pub const SPECIFICATION_TOKENS: &[&str] = &["GRADE", "STEEL", "CONCRETE", "REINFORCEMENT"];

/// Token marking an explicit note
pub const NOTE_TOKEN: &str = "NOTE";

/// Leading characters of a numbered note (zero excluded)
pub const NOTE_LEADING_DIGITS: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// A space followed by a bare dimension letter
pub const MISSING_DATA_MARKERS: &[&str] = &[" d", " D"];

pub const MISSING_DIMENSION_ISSUE: &str = "Missing dimension value";

/// Tokens for the markup scan's dimension callouts
pub const CALLOUT_TOKENS: &[&str] = &["d", "D", "MM", "THK"];

/// Callouts are short lines only
pub const CALLOUT_MAX_CHARS: usize = 50;

/// Designer annotation searched across the whole document
pub const BOLD_ANNOTATION_TOKEN: &str = "Bold";

// Quality score

pub const BASE_SCORE: u32 = 50;
pub const MAX_SCORE: u32 = 100;

pub const DIMENSION_THRESHOLD: usize = 10;
pub const DIMENSION_BONUS: u32 = 15;

pub const SPECIFICATION_THRESHOLD: usize = 5;
pub const SPECIFICATION_BONUS: u32 = 15;

pub const NOTE_THRESHOLD: usize = 3;
pub const NOTE_BONUS: u32 = 10;

/// Awarded when no missing-data issue was found
pub const COMPLETE_DATA_BONUS: u32 = 10;

/// Minimum score for the completeness check to pass
pub const COMPLETENESS_PASS_SCORE: u32 = 80;

/// True if `text` contains any of `tokens`
pub fn contains_any(text: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| text.contains(token))
}

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}
