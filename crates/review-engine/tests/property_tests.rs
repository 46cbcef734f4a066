//! Property-based tests for revision review
//!
//! Tests scoring, the identical short-circuit and the set-based diff using proptest.

use std::collections::BTreeSet;

use drawing_types::ChangeKind;
use proptest::prelude::*;
use review_engine::{analyze_document, compare, ComparisonResult, Document};

/// Lines drawn from a small drawing vocabulary so revisions overlap
fn drawing_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..40).prop_map(|n| format!("PLATE {}MM", n * 5)),
        (1u32..20).prop_map(|n| format!("{} THK", n)),
        (1u32..10).prop_map(|n| format!("ANGLE {0} X {0}", n * 10)),
        (40u32..50).prop_map(|n| format!("GRADE {}", n)),
        (1u32..9).prop_map(|n| format!("{}. SEE DETAIL", n)),
        prop::sample::select(vec![
            "STEEL REBAR",
            "CONCRETE M30",
            "NOTE: VERIFY ON SITE",
            "HOLE D",
            "5 d",
            "Bold",
            "",
        ])
        .prop_map(str::to_string),
        "[a-z ]{0,12}",
    ]
}

fn drawing() -> impl Strategy<Value = String> {
    prop::collection::vec(drawing_line(), 0..25).prop_map(|lines| lines.join("\n"))
}

fn changed(before: &str, after: &str) -> review_engine::RevisionComparison {
    match compare(before, after) {
        ComparisonResult::Changed(comparison) => comparison,
        ComparisonResult::Identical(_) => panic!("revisions were expected to differ"),
    }
}

fn values(comparison: &review_engine::RevisionComparison, kind: ChangeKind) -> BTreeSet<String> {
    comparison
        .changes()
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| {
            c.description
                .split_once(": ")
                .map(|(_, value)| value.to_string())
                .unwrap_or_default()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Quality Score
    // ============================================================

    #[test]
    fn score_follows_bonus_formula(
        dims in 0usize..15,
        specs in 0usize..9,
        notes in 0usize..6,
        missing in 0usize..3
    ) {
        let mut lines = Vec::new();
        lines.extend((0..dims).map(|i| format!("PLATE {}MM", i)));
        lines.extend((0..specs).map(|i| format!("GRADE S{}", i)));
        lines.extend((0..notes).map(|i| format!("NOTE {}", i)));
        lines.extend((0..missing).map(|_| "HOLE D".to_string()));
        let text = lines.join("\n");

        let classified = analyze_document(&Document::new(&text));

        let expected = (50u32
            + if dims > 10 { 15 } else { 0 }
            + if specs > 5 { 15 } else { 0 }
            + if notes > 3 { 10 } else { 0 }
            + if missing == 0 { 10 } else { 0 })
        .min(100);
        prop_assert_eq!(classified.quality_score(), expected);
    }

    #[test]
    fn score_stays_in_range(text in drawing()) {
        let score = analyze_document(&Document::new(&text)).quality_score();
        prop_assert!((50..=100).contains(&score));
    }

    // ============================================================
    // Identical Revisions
    // ============================================================

    #[test]
    fn same_text_is_identical(text in prop_oneof![drawing(), Just("\n".to_string()), Just(" ".to_string())]) {
        let result = compare(&text, &text);
        prop_assert!(result.is_identical());
        prop_assert!(result.changes().is_empty());
    }

    // ============================================================
    // Change Set
    // ============================================================

    #[test]
    fn reversing_revisions_swaps_labels(before in drawing(), after in drawing()) {
        prop_assume!(before != after);

        let forward = changed(&before, &after);
        let reverse = changed(&after, &before);

        prop_assert_eq!(forward.quality_improvement(), -reverse.quality_improvement());
        prop_assert_eq!(
            values(&forward, ChangeKind::DimensionAdded),
            values(&reverse, ChangeKind::DimensionRemoved)
        );
        prop_assert_eq!(
            values(&forward, ChangeKind::DimensionRemoved),
            values(&reverse, ChangeKind::DimensionAdded)
        );
    }

    #[test]
    fn repeated_dimension_yields_one_record(base in drawing(), repeats in 2usize..6) {
        let value = "FLANGE 999MM";
        let after = std::iter::once(base.clone())
            .chain(std::iter::repeat(value.to_string()).take(repeats))
            .collect::<Vec<_>>()
            .join("\n");

        let comparison = changed(&base, &after);
        let expected = format!("New dimension: {}", value);
        let count = comparison
            .changes()
            .iter()
            .filter(|c| c.kind == ChangeKind::DimensionAdded && c.description == expected)
            .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn total_changes_matches_record_count(before in drawing(), after in drawing()) {
        prop_assume!(before != after);
        let comparison = changed(&before, &after);
        prop_assert_eq!(comparison.total_changes(), comparison.changes().len());
    }
}
