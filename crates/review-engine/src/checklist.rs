//! Engineering checklist derived from a revision comparison

use drawing_types::{Checklist, ChecklistItem, ChecklistStatus};

use crate::comparator::RevisionComparison;
use crate::patterns::{COMPLETENESS_PASS_SCORE, DIMENSION_THRESHOLD, SPECIFICATION_THRESHOLD};

/// Build the checklist for the after revision.
///
/// Takes the changed variant only: identical revisions have nothing to check.
pub fn build_checklist(comparison: &RevisionComparison) -> Checklist {
    let after = comparison.after();
    let mut checklist = Checklist::default();

    // Critical items
    if after.missing_data().is_empty() {
        checklist.critical_items.push(ChecklistItem::new(
            ChecklistStatus::Pass,
            "All Dimensions Specified",
            "No missing dimension values detected",
        ));
    } else {
        checklist
            .critical_items
            .extend(after.missing_data().iter().map(|missing| {
                ChecklistItem::new(
                    ChecklistStatus::Fail,
                    "Missing Dimension Value",
                    missing.line_text.clone(),
                )
            }));
    }

    let dim_count = after.dimensions().len();
    checklist.dimensions.push(if dim_count > DIMENSION_THRESHOLD {
        ChecklistItem::new(
            ChecklistStatus::Pass,
            "Adequate Dimensions",
            format!("{} dimensions found", dim_count),
        )
    } else {
        ChecklistItem::new(
            ChecklistStatus::Warning,
            "Limited Dimensions",
            format!("Only {} dimensions found", dim_count),
        )
    });

    // Left empty below the threshold
    let spec_count = after.specifications().len();
    if spec_count > SPECIFICATION_THRESHOLD {
        checklist.specifications.push(ChecklistItem::new(
            ChecklistStatus::Pass,
            "Material Specifications",
            format!("{} specifications provided", spec_count),
        ));
    }

    let total_changes = comparison.total_changes();
    checklist.annotations.push(if total_changes > 0 {
        ChecklistItem::new(
            ChecklistStatus::Pass,
            "Designer Updates Detected",
            format!("{} changes found", total_changes),
        )
    } else {
        ChecklistItem::new(
            ChecklistStatus::Fail,
            "No Updates Detected",
            "Files appear identical or no changes made",
        )
    });

    let score = after.quality_score();
    checklist.completeness.push(if score >= COMPLETENESS_PASS_SCORE {
        ChecklistItem::new(
            ChecklistStatus::Pass,
            "Drawing Completeness",
            format!("Quality Score: {}%", score),
        )
    } else {
        ChecklistItem::new(
            ChecklistStatus::Warning,
            "Drawing Needs Improvement",
            format!("Quality Score: {}%", score),
        )
    });

    checklist
}
