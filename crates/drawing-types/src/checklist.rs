//! Categorized pass/fail/warning verdicts for a drawing revision

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistStatus {
    Pass,
    Fail,
    Warning,
}

impl ChecklistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistStatus::Pass => "PASS",
            ChecklistStatus::Fail => "FAIL",
            ChecklistStatus::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub status: ChecklistStatus,
    pub item: String,
    pub details: String,
}

impl ChecklistItem {
    pub fn new(status: ChecklistStatus, item: &str, details: impl Into<String>) -> Self {
        Self {
            status,
            item: item.to_string(),
            details: details.into(),
        }
    }
}

/// Checklist categories in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistCategory {
    CriticalItems,
    Dimensions,
    Specifications,
    Annotations,
    Completeness,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 5] = [
        ChecklistCategory::CriticalItems,
        ChecklistCategory::Dimensions,
        ChecklistCategory::Specifications,
        ChecklistCategory::Annotations,
        ChecklistCategory::Completeness,
    ];

    /// Key used in serialized output ("critical_items")
    pub fn key(&self) -> &'static str {
        match self {
            ChecklistCategory::CriticalItems => "critical_items",
            ChecklistCategory::Dimensions => "dimensions",
            ChecklistCategory::Specifications => "specifications",
            ChecklistCategory::Annotations => "annotations",
            ChecklistCategory::Completeness => "completeness",
        }
    }

    /// Title-cased heading ("Critical Items")
    pub fn title(&self) -> &'static str {
        match self {
            ChecklistCategory::CriticalItems => "Critical Items",
            ChecklistCategory::Dimensions => "Dimensions",
            ChecklistCategory::Specifications => "Specifications",
            ChecklistCategory::Annotations => "Annotations",
            ChecklistCategory::Completeness => "Completeness",
        }
    }
}

/// Checklist keyed by category.
///
/// Every category carries at least one item once generated, except
/// `specifications`, which stays empty unless the revision clears the
/// specification threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub critical_items: Vec<ChecklistItem>,
    pub dimensions: Vec<ChecklistItem>,
    pub specifications: Vec<ChecklistItem>,
    pub annotations: Vec<ChecklistItem>,
    pub completeness: Vec<ChecklistItem>,
}

/// Item counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTally {
    pub pass: usize,
    pub fail: usize,
    pub warning: usize,
}

impl Checklist {
    pub fn items(&self, category: ChecklistCategory) -> &[ChecklistItem] {
        match category {
            ChecklistCategory::CriticalItems => &self.critical_items,
            ChecklistCategory::Dimensions => &self.dimensions,
            ChecklistCategory::Specifications => &self.specifications,
            ChecklistCategory::Annotations => &self.annotations,
            ChecklistCategory::Completeness => &self.completeness,
        }
    }

    pub fn items_mut(&mut self, category: ChecklistCategory) -> &mut Vec<ChecklistItem> {
        match category {
            ChecklistCategory::CriticalItems => &mut self.critical_items,
            ChecklistCategory::Dimensions => &mut self.dimensions,
            ChecklistCategory::Specifications => &mut self.specifications,
            ChecklistCategory::Annotations => &mut self.annotations,
            ChecklistCategory::Completeness => &mut self.completeness,
        }
    }

    /// Iterate categories in report order
    pub fn categories(&self) -> impl Iterator<Item = (ChecklistCategory, &[ChecklistItem])> + '_ {
        ChecklistCategory::ALL
            .into_iter()
            .map(move |category| (category, self.items(category)))
    }

    pub fn tally(&self) -> StatusTally {
        let mut tally = StatusTally::default();
        for (_, items) in self.categories() {
            for item in items {
                match item.status {
                    ChecklistStatus::Pass => tally.pass += 1,
                    ChecklistStatus::Fail => tally.fail += 1,
                    ChecklistStatus::Warning => tally.warning += 1,
                }
            }
        }
        tally
    }

    pub fn has_failures(&self) -> bool {
        self.tally().fail > 0
    }
}
