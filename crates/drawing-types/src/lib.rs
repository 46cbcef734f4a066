pub mod checklist;
pub mod types;

pub use checklist::{Checklist, ChecklistCategory, ChecklistItem, ChecklistStatus, StatusTally};
pub use types::{ChangeKind, ChangeRecord, LineCategory, MissingDataIssue, Severity};
