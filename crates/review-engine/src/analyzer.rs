//! Per-revision classification and quality scoring

use drawing_types::{LineCategory, MissingDataIssue};
use serde::Serialize;
use tracing::debug;

use crate::classifier::{classify_line, missing_data_issue};
use crate::document::Document;
use crate::patterns::{
    BASE_SCORE, COMPLETE_DATA_BONUS, DIMENSION_BONUS, DIMENSION_THRESHOLD, MAX_SCORE, NOTE_BONUS,
    NOTE_THRESHOLD, SPECIFICATION_BONUS, SPECIFICATION_THRESHOLD,
};

/// A revision's lines grouped by category, with its quality score.
///
/// The score is always derived from the collections; there is no way to
/// set it independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedDocument {
    total_lines: usize,
    dimensions: Vec<String>,
    specifications: Vec<String>,
    notes: Vec<String>,
    missing_data: Vec<MissingDataIssue>,
    quality_score: u32,
}

impl ClassifiedDocument {
    pub fn from_parts(
        total_lines: usize,
        dimensions: Vec<String>,
        specifications: Vec<String>,
        notes: Vec<String>,
        missing_data: Vec<MissingDataIssue>,
    ) -> Self {
        let quality_score = quality_score(
            dimensions.len(),
            specifications.len(),
            notes.len(),
            missing_data.len(),
        );
        Self {
            total_lines,
            dimensions,
            specifications,
            notes,
            missing_data,
            quality_score,
        }
    }

    /// Number of non-blank lines
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn specifications(&self) -> &[String] {
        &self.specifications
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn missing_data(&self) -> &[MissingDataIssue] {
        &self.missing_data
    }

    pub fn quality_score(&self) -> u32 {
        self.quality_score
    }
}

/// Base 50 plus threshold bonuses, capped at 100
pub fn quality_score(dimensions: usize, specifications: usize, notes: usize, missing: usize) -> u32 {
    let mut score = BASE_SCORE;
    if dimensions > DIMENSION_THRESHOLD {
        score += DIMENSION_BONUS;
    }
    if specifications > SPECIFICATION_THRESHOLD {
        score += SPECIFICATION_BONUS;
    }
    if notes > NOTE_THRESHOLD {
        score += NOTE_BONUS;
    }
    if missing == 0 {
        score += COMPLETE_DATA_BONUS;
    }
    score.min(MAX_SCORE)
}

/// Classify every non-blank line of a revision.
///
/// Repeated lines are kept as often as they occur.
pub fn analyze_document(document: &Document<'_>) -> ClassifiedDocument {
    let mut total_lines = 0;
    let mut dimensions = Vec::new();
    let mut specifications = Vec::new();
    let mut notes = Vec::new();
    let mut missing_data = Vec::new();

    for line in document.content_lines() {
        total_lines += 1;
        let trimmed = line.trim();

        for category in classify_line(line) {
            match category {
                LineCategory::Dimension => dimensions.push(trimmed.to_string()),
                LineCategory::Specification => specifications.push(trimmed.to_string()),
                LineCategory::Note => notes.push(trimmed.to_string()),
                LineCategory::MissingData => missing_data.extend(missing_data_issue(line)),
            }
        }
    }

    let classified =
        ClassifiedDocument::from_parts(total_lines, dimensions, specifications, notes, missing_data);

    debug!(
        total_lines = classified.total_lines(),
        dimensions = classified.dimensions().len(),
        specifications = classified.specifications().len(),
        notes = classified.notes().len(),
        missing_data = classified.missing_data().len(),
        quality_score = classified.quality_score(),
        "Classified revision"
    );

    classified
}
