//! Before/after revision comparison

use std::collections::BTreeSet;

use drawing_types::{ChangeKind, ChangeRecord, Severity};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::analyzer::{analyze_document, ClassifiedDocument};
use crate::document::Document;
use crate::markup::{scan_markup, MarkupScan};

pub const IDENTICAL_MESSAGE: &str = "IDENTICAL FILES DETECTED";

pub const IDENTICAL_RECOMMENDATION: &str =
    "BEFORE file should be ENGINEER COMMENTED version. AFTER file should be DESIGNER UPDATED version.";

/// Hex SHA-256 of the document text
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Both inputs carried the same content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalRevisions {
    pub message: String,
    pub recommendation: String,
}

impl Default for IdenticalRevisions {
    fn default() -> Self {
        Self {
            message: IDENTICAL_MESSAGE.to_string(),
            recommendation: IDENTICAL_RECOMMENDATION.to_string(),
        }
    }
}

/// Classified revisions and the change-set between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionComparison {
    before: ClassifiedDocument,
    after: ClassifiedDocument,
    changes: Vec<ChangeRecord>,
    before_markup: MarkupScan,
    after_markup: MarkupScan,
}

impl RevisionComparison {
    pub(crate) fn new(
        before: ClassifiedDocument,
        after: ClassifiedDocument,
        changes: Vec<ChangeRecord>,
        before_markup: MarkupScan,
        after_markup: MarkupScan,
    ) -> Self {
        Self {
            before,
            after,
            changes,
            before_markup,
            after_markup,
        }
    }

    pub fn before(&self) -> &ClassifiedDocument {
        &self.before
    }

    pub fn after(&self) -> &ClassifiedDocument {
        &self.after
    }

    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    pub fn total_changes(&self) -> usize {
        self.changes.len()
    }

    /// After score minus before score; negative when quality dropped
    pub fn quality_improvement(&self) -> i32 {
        self.after.quality_score() as i32 - self.before.quality_score() as i32
    }

    pub fn before_markup(&self) -> &MarkupScan {
        &self.before_markup
    }

    pub fn after_markup(&self) -> &MarkupScan {
        &self.after_markup
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonResult {
    Identical(IdenticalRevisions),
    Changed(RevisionComparison),
}

impl ComparisonResult {
    pub fn is_identical(&self) -> bool {
        matches!(self, ComparisonResult::Identical(_))
    }

    /// Empty for identical revisions
    pub fn changes(&self) -> &[ChangeRecord] {
        match self {
            ComparisonResult::Identical(_) => &[],
            ComparisonResult::Changed(comparison) => comparison.changes(),
        }
    }

    pub fn comparison(&self) -> Option<&RevisionComparison> {
        match self {
            ComparisonResult::Identical(_) => None,
            ComparisonResult::Changed(comparison) => Some(comparison),
        }
    }
}

impl Serialize for ComparisonResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ComparisonResult::Identical(identical) => {
                let mut state = serializer.serialize_struct("ComparisonResult", 4)?;
                state.serialize_field("identical", &true)?;
                state.serialize_field("message", &identical.message)?;
                state.serialize_field("recommendation", &identical.recommendation)?;
                state.serialize_field("changes", &Vec::<ChangeRecord>::new())?;
                state.end()
            }
            ComparisonResult::Changed(comparison) => {
                let mut state = serializer.serialize_struct("ComparisonResult", 6)?;
                state.serialize_field("identical", &false)?;
                state.serialize_field("before_analysis", comparison.before())?;
                state.serialize_field("after_analysis", comparison.after())?;
                state.serialize_field("changes", comparison.changes())?;
                state.serialize_field("total_changes", &comparison.total_changes())?;
                state.serialize_field("quality_improvement", &comparison.quality_improvement())?;
                state.end()
            }
        }
    }
}

/// Compare two revisions of a drawing.
///
/// Byte-identical inputs short-circuit to [`ComparisonResult::Identical`]
/// without classification.
pub fn compare(before_text: &str, after_text: &str) -> ComparisonResult {
    if fingerprint(before_text) == fingerprint(after_text) {
        debug!("Revisions share a fingerprint, skipping analysis");
        return ComparisonResult::Identical(IdenticalRevisions::default());
    }

    let before_doc = Document::new(before_text);
    let after_doc = Document::new(after_text);

    let before = analyze_document(&before_doc);
    let after = analyze_document(&after_doc);
    let before_markup = scan_markup(&before_doc);
    let after_markup = scan_markup(&after_doc);

    let mut changes = dimension_changes(&before, &after);
    changes.extend(missing_data_resolution(&before, &after));
    changes.extend(markup_change(&before_markup, &after_markup));
    changes.extend(formatting_change(&before_markup, &after_markup));

    debug!(
        changes = changes.len(),
        before_score = before.quality_score(),
        after_score = after.quality_score(),
        "Compared revisions"
    );

    ComparisonResult::Changed(RevisionComparison::new(
        before,
        after,
        changes,
        before_markup,
        after_markup,
    ))
}

/// Set difference over distinct dimension strings, in lexical order.
///
/// Repeat counts are discarded: a value present twice in one revision and
/// absent from the other yields a single record.
fn dimension_changes(before: &ClassifiedDocument, after: &ClassifiedDocument) -> Vec<ChangeRecord> {
    let before_dims: BTreeSet<&str> = before.dimensions().iter().map(String::as_str).collect();
    let after_dims: BTreeSet<&str> = after.dimensions().iter().map(String::as_str).collect();

    let added = after_dims.difference(&before_dims).map(|dim| ChangeRecord {
        kind: ChangeKind::DimensionAdded,
        description: format!("New dimension: {}", dim),
        severity: Severity::High,
    });
    let removed = before_dims.difference(&after_dims).map(|dim| ChangeRecord {
        kind: ChangeKind::DimensionRemoved,
        description: format!("Removed dimension: {}", dim),
        severity: Severity::Medium,
    });

    added.chain(removed).collect()
}

fn missing_data_resolution(
    before: &ClassifiedDocument,
    after: &ClassifiedDocument,
) -> Option<ChangeRecord> {
    let before_missing = before.missing_data().len();
    let after_missing = after.missing_data().len();

    (before_missing > after_missing).then(|| ChangeRecord {
        kind: ChangeKind::MissingDataResolved,
        description: format!("Resolved {} missing dimensions", before_missing - after_missing),
        severity: Severity::Good,
    })
}

fn markup_change(before: &MarkupScan, after: &MarkupScan) -> Option<ChangeRecord> {
    (after.has_bold_annotation && !before.has_bold_annotation).then(|| ChangeRecord {
        kind: ChangeKind::MarkupDetected,
        description: "Designer markup: \"Bold\" annotation found".to_string(),
        severity: Severity::Info,
    })
}

fn formatting_change(before: &MarkupScan, after: &MarkupScan) -> Option<ChangeRecord> {
    (after.bold_candidate_count() > before.bold_candidate_count()).then(|| ChangeRecord {
        kind: ChangeKind::FormattingChange,
        description: "Bold formatting applied to dimensions".to_string(),
        severity: Severity::Info,
    })
}
