//! End-to-end review scenarios

use drawing_types::{ChangeKind, ChecklistStatus, Severity};
use pretty_assertions::assert_eq;
use review_engine::{ComparisonResult, ReviewEngine, RevisionComparison};

fn changed(result: ComparisonResult) -> RevisionComparison {
    match result {
        ComparisonResult::Changed(comparison) => comparison,
        ComparisonResult::Identical(_) => panic!("expected differing revisions"),
    }
}

fn dimension_lines() -> Vec<String> {
    (1..=12).map(|i| format!("PLATE {}MM", i * 5)).collect()
}

fn specification_lines() -> Vec<String> {
    (0..6).map(|i| format!("STEEL GRADE S{}", 235 + i)).collect()
}

#[test]
fn test_identical_revisions_are_reported() {
    let engine = ReviewEngine::new();
    let text = "10 THK MM\nGRADE 50";
    let result = engine.compare(text, text);

    assert!(result.is_identical());
    assert!(result.changes().is_empty());
}

#[test]
fn test_resolved_missing_dimension_improves_quality() {
    let engine = ReviewEngine::new();
    let before = "5 d\nGRADE 50\nSTEEL REBAR";
    let after = "5 d 12MM\nGRADE 50\nSTEEL REBAR\nNOTE: verify";

    let comparison = changed(engine.compare(before, after));

    assert_eq!(comparison.before().missing_data().len(), 1);
    assert_eq!(comparison.before().missing_data()[0].line_text, "5 d");
    assert!(comparison.after().missing_data().is_empty());

    let resolved: Vec<_> = comparison
        .changes()
        .iter()
        .filter(|c| c.kind == ChangeKind::MissingDataResolved)
        .collect();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].description, "Resolved 1 missing dimensions");
    assert_eq!(resolved[0].severity, Severity::Good);

    assert!(comparison.after().quality_score() > comparison.before().quality_score());
    assert_eq!(comparison.quality_improvement(), 10);
}

#[test]
fn test_specification_checklist_follows_after_revision() {
    let engine = ReviewEngine::new();
    let before = dimension_lines().join("\n");
    let after = dimension_lines()
        .into_iter()
        .chain(specification_lines())
        .collect::<Vec<_>>()
        .join("\n");

    let forward = engine.compare(&before, &after);
    let forward_checklist = engine.build_checklist(&forward).unwrap();
    let reverse = engine.compare(&after, &before);
    let reverse_checklist = engine.build_checklist(&reverse).unwrap();

    assert_eq!(forward_checklist.specifications.len(), 1);
    assert_eq!(
        forward_checklist.specifications[0].details,
        "6 specifications provided"
    );
    assert!(reverse_checklist.specifications.is_empty());

    assert_eq!(forward_checklist.dimensions[0].status, ChecklistStatus::Pass);
    assert_eq!(reverse_checklist.dimensions[0].status, ChecklistStatus::Pass);
    assert_eq!(forward_checklist.dimensions[0].details, "12 dimensions found");
}

#[test]
fn test_complete_after_revision_passes_critical_and_completeness() {
    let engine = ReviewEngine::new();
    let before = "PLATE 5MM";
    // 12 dimensions and 4 notes, no missing data: 50 + 15 + 10 + 10
    let mut after = dimension_lines();
    after.extend((1..=4).map(|i| format!("NOTE {}: CHECK WELDS", i)));
    let after = after.join("\n");

    let result = engine.compare(before, &after);
    let comparison = result.comparison().unwrap();
    assert_eq!(comparison.after().quality_score(), 85);

    let checklist = engine.build_checklist(&result).unwrap();
    assert_eq!(checklist.critical_items.len(), 1);
    assert_eq!(checklist.critical_items[0].status, ChecklistStatus::Pass);
    assert_eq!(checklist.completeness[0].status, ChecklistStatus::Pass);
    assert_eq!(checklist.completeness[0].details, "Quality Score: 85%");
}

#[test]
fn test_every_category_but_specifications_is_filled() {
    let engine = ReviewEngine::new();
    let report = engine.analyze("HOLE D", "HOLE D\nWEB d");
    let checklist = report.checklist.unwrap();

    for (category, items) in checklist.categories() {
        if category.key() == "specifications" {
            assert!(items.is_empty());
        } else {
            assert!(!items.is_empty(), "{} should not be empty", category.key());
        }
    }
    assert_eq!(checklist.critical_items.len(), 2);
    assert!(checklist.has_failures());
}

#[test]
fn test_reversed_comparison_swaps_dimension_labels() {
    let engine = ReviewEngine::new();
    let before = "PLATE 10MM\nANGLE 50 X 50";
    let after = "PLATE 12MM\nANGLE 50 X 50";

    let forward = changed(engine.compare(before, after));
    let reverse = changed(engine.compare(after, before));

    let describe = |comparison: &RevisionComparison| -> Vec<(ChangeKind, String)> {
        comparison
            .changes()
            .iter()
            .map(|c| (c.kind, c.description.clone()))
            .collect()
    };

    assert_eq!(
        describe(&forward),
        vec![
            (ChangeKind::DimensionAdded, "New dimension: PLATE 12MM".to_string()),
            (ChangeKind::DimensionRemoved, "Removed dimension: PLATE 10MM".to_string()),
        ]
    );
    assert_eq!(
        describe(&reverse),
        vec![
            (ChangeKind::DimensionAdded, "New dimension: PLATE 10MM".to_string()),
            (ChangeKind::DimensionRemoved, "Removed dimension: PLATE 12MM".to_string()),
        ]
    );
    assert_eq!(forward.quality_improvement(), -reverse.quality_improvement());
}
