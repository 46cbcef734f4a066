//! Comparison result and checklist bundled for front-ends

use chrono::{DateTime, Utc};
use drawing_types::Checklist;
use serde::Serialize;

use crate::checklist::build_checklist;
use crate::comparator::ComparisonResult;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis: ComparisonResult,
    /// Absent when the revisions were identical
    pub checklist: Option<Checklist>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(analysis: ComparisonResult) -> Self {
        let checklist = analysis.comparison().map(build_checklist);
        Self {
            analysis,
            checklist,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::compare;

    #[test]
    fn test_identical_report_has_no_checklist() {
        let report = AnalysisReport::new(compare("GRADE 50", "GRADE 50"));
        assert!(report.analysis.is_identical());
        assert!(report.checklist.is_none());
    }

    #[test]
    fn test_changed_report_carries_checklist() {
        let report = AnalysisReport::new(compare("5 d", "5 d 12MM"));
        let checklist = report.checklist.as_ref().unwrap();
        assert_eq!(checklist.annotations[0].details, "2 changes found");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["analysis"]["identical"], false);
        assert!(json["checklist"]["critical_items"].is_array());
        assert!(json["generated_at"].is_string());
    }
}
