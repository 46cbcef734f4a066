/// Engineering category a single drawing line can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineCategory {
    Dimension,
    Specification,
    Note,
    MissingData,
}

/// A line flagged as referencing a dimension without giving its value
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MissingDataIssue {
    pub issue_description: String, // e.g., "Missing dimension value"
    pub line_text: String,         // Trimmed line content
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    High,
    Medium,
    Good,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Good => "GOOD",
            Severity::Info => "INFO",
        }
    }
}

/// Kind of delta detected between two revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    DimensionAdded,
    DimensionRemoved,
    MissingDataResolved,
    MarkupDetected,
    FormattingChange,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::DimensionAdded => "DIMENSION_ADDED",
            ChangeKind::DimensionRemoved => "DIMENSION_REMOVED",
            ChangeKind::MissingDataResolved => "MISSING_DATA_RESOLVED",
            ChangeKind::MarkupDetected => "MARKUP_DETECTED",
            ChangeKind::FormattingChange => "FORMATTING_CHANGE",
        }
    }

    /// Human-readable label ("DIMENSION ADDED")
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub description: String,
    pub severity: Severity,
}
