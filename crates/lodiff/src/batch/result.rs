//! Batch result types.

use std::time::Duration;

use lodiff_compare::{Comparison, Priority};
use serde::Serialize;

/// Outcome of one document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Passed,
    Failed,
    /// The candidate dump does not exist.
    Missing,
}

/// Result of comparing one document. Serialized as one JSON object per line
/// by `--json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentResult {
    pub name: String,
    pub status: DocumentStatus,
    /// Failure report, or the reason the document was missing.
    pub report: String,
    /// Tolerance codes, `vtedfc` order.
    pub flags: String,
    /// Lowest failing priority level.
    pub priority: Option<u8>,
}

impl DocumentResult {
    pub fn from_comparison(name: String, comparison: &Comparison) -> Self {
        DocumentResult {
            name,
            status: if comparison.equal {
                DocumentStatus::Passed
            } else {
                DocumentStatus::Failed
            },
            report: comparison.report.clone(),
            flags: comparison.flags_code(),
            priority: comparison.first_failing_priority.map(Priority::level),
        }
    }

    #[cold]
    pub fn missing(name: String, reason: String) -> Self {
        DocumentResult {
            name,
            status: DocumentStatus::Missing,
            report: reason,
            flags: String::new(),
            priority: None,
        }
    }
}

/// Counters over a whole batch.
#[derive(Clone, Debug, Default)]
pub struct BatchSummary {
    /// Per-document results, in discovery order.
    pub documents: Vec<DocumentResult>,
    pub passed: usize,
    pub failed: usize,
    pub missing: usize,
    /// Failed documents by lowest failing priority (0, 1, 2). Failures that
    /// never reached a pass (malformed dumps) are not bucketed.
    pub failed_by_priority: [usize; 3],
    /// Documents with at least one tolerance flag.
    pub flagged: usize,
    pub duration: Duration,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: DocumentResult) {
        match result.status {
            DocumentStatus::Passed => self.passed += 1,
            DocumentStatus::Failed => {
                self.failed += 1;
                if let Some(bucket) = result
                    .priority
                    .and_then(|p| self.failed_by_priority.get_mut(usize::from(p)))
                {
                    *bucket += 1;
                }
            }
            DocumentStatus::Missing => self.missing += 1,
        }
        if !result.flags.is_empty() {
            self.flagged += 1;
        }
        self.documents.push(result);
    }

    pub fn total(&self) -> usize {
        self.documents.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.missing > 0
    }

    /// 0 = all equal, 1 = failures or missing dumps, 2 = nothing to compare.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}
