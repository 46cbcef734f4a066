//! Engineering drawing revision review.
//!
//! Classifies the lines of two drawing revisions, scores each revision,
//! derives the change-set between them and turns it into a checklist.
//! Everything here is pure computation over decoded text; use
//! [`decode_revision`] first when starting from raw bytes.

pub mod analyzer;
pub mod checklist;
pub mod classifier;
pub mod comparator;
pub mod decode;
pub mod document;
pub mod markup;
pub mod patterns;
pub mod report;

pub use analyzer::{analyze_document, ClassifiedDocument};
pub use checklist::build_checklist;
pub use comparator::{
    compare, fingerprint, ComparisonResult, IdenticalRevisions, RevisionComparison,
};
pub use decode::decode_revision;
pub use document::Document;
pub use markup::{scan_markup, MarkedLine, MarkupScan};
pub use report::AnalysisReport;

use drawing_types::Checklist;

/// ReviewEngine entry point
pub struct ReviewEngine;

impl ReviewEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn compare(&self, before_text: &str, after_text: &str) -> ComparisonResult {
        compare(before_text, after_text)
    }

    /// Checklist for a comparison result, `None` for identical revisions
    pub fn build_checklist(&self, result: &ComparisonResult) -> Option<Checklist> {
        result.comparison().map(build_checklist)
    }

    /// Compare and build the checklist in one step
    pub fn analyze(&self, before_text: &str, after_text: &str) -> AnalysisReport {
        AnalysisReport::new(self.compare(before_text, after_text))
    }

    /// Classify a single revision (for testing)
    pub fn classify(&self, text: &str) -> ClassifiedDocument {
        analyze_document(&Document::new(text))
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawing_types::ChecklistStatus;

    #[test]
    fn test_engine_flags_identical_revisions() {
        let engine = ReviewEngine::new();
        let result = engine.compare("10 THK MM\nGRADE 50", "10 THK MM\nGRADE 50");

        assert!(result.is_identical());
        assert!(engine.build_checklist(&result).is_none());
    }

    #[test]
    fn test_engine_builds_checklist_for_changes() {
        let engine = ReviewEngine::new();
        let result = engine.compare("5 d", "5 d 12MM\nGRADE 50");
        let checklist = engine.build_checklist(&result).unwrap();

        assert_eq!(checklist.critical_items[0].status, ChecklistStatus::Pass);
        assert_eq!(checklist.annotations[0].status, ChecklistStatus::Pass);
    }

    #[test]
    fn test_engine_classifies_single_revision() {
        let engine = ReviewEngine::new();
        let classified = engine.classify("12MM\nGRADE 50\nNOTE: TYP");

        assert_eq!(classified.total_lines(), 3);
        assert_eq!(classified.dimensions().len(), 1);
        assert_eq!(classified.specifications().len(), 1);
        assert_eq!(classified.notes().len(), 2);
    }
}
