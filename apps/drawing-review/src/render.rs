//! Plain-text and JSON rendering of an analysis report

use review_engine::{AnalysisReport, ClassifiedDocument, ComparisonResult, RevisionComparison};

use crate::error::CliError;

pub fn render_json(report: &AnalysisReport) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &AnalysisReport, verbose: bool) -> String {
    let mut lines = vec![
        "DRAWING REVIEW REPORT".to_string(),
        format!(
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        String::new(),
    ];

    match &report.analysis {
        ComparisonResult::Identical(identical) => {
            lines.push(format!("WARNING: {}", identical.message));
            lines.push(identical.recommendation.clone());
            lines.push("  BEFORE file: should contain the engineer's markups/comments".to_string());
            lines.push("  AFTER file: should contain the designer's updates/revisions".to_string());
        }
        ComparisonResult::Changed(comparison) => {
            push_changes(&mut lines, comparison);
            push_statistics(&mut lines, comparison);
            if verbose {
                push_callouts(&mut lines, comparison);
            }
        }
    }

    if let Some(checklist) = &report.checklist {
        let tally = checklist.tally();
        lines.push(String::new());
        lines.push(format!(
            "Checklist: {} passed, {} failed, {} warnings",
            tally.pass, tally.fail, tally.warning
        ));
        for (category, items) in checklist.categories() {
            if items.is_empty() {
                continue;
            }
            lines.push(category.title().to_string());
            for item in items {
                lines.push(format!(
                    "  [{}] {}: {}",
                    item.status.as_str(),
                    item.item,
                    item.details
                ));
            }
        }
    }

    lines.join("\n")
}

fn push_changes(lines: &mut Vec<String>, comparison: &RevisionComparison) {
    lines.push(format!("Detected Changes: {}", comparison.total_changes()));
    for change in comparison.changes() {
        lines.push(format!(
            "  {:<22} {:<7} {}",
            change.kind.label(),
            change.severity.as_str(),
            change.description
        ));
    }
}

fn push_statistics(lines: &mut Vec<String>, comparison: &RevisionComparison) {
    let (before, after) = (comparison.before(), comparison.after());
    lines.push(String::new());
    lines.push(format!(
        "Quality Score: {}% -> {}% ({:+})",
        before.quality_score(),
        after.quality_score(),
        comparison.quality_improvement()
    ));
    lines.push(format!("  Before: {}", summarize(before)));
    lines.push(format!("  After:  {}", summarize(after)));
}

fn summarize(doc: &ClassifiedDocument) -> String {
    format!(
        "{} lines, {} dimensions, {} specifications, {} notes, {} missing values",
        doc.total_lines(),
        doc.dimensions().len(),
        doc.specifications().len(),
        doc.notes().len(),
        doc.missing_data().len()
    )
}

fn push_callouts(lines: &mut Vec<String>, comparison: &RevisionComparison) {
    let callouts = &comparison.after_markup().dimension_callouts;
    if callouts.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push("Dimension callouts (after revision):".to_string());
    for callout in callouts {
        lines.push(format!("  line {}: {}", callout.line, callout.text));
    }
}
