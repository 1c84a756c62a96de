//! Fix application
//!
//! Applies the fixes attached to diagnostics to the document they were
//! computed against. Rules only describe fixes; this is the one place that
//! edits a document.

use std::collections::BTreeSet;

use tracing::debug;

use crate::diagnostics::{Diagnostic, FixAction};
use crate::document::Document;

/// Result of applying fixes to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The fixed document
    pub document: Document,
    /// Number of lines changed
    pub applied: usize,
    /// Number of fixes that pointed outside the document
    pub skipped: usize,
}

impl FixOutcome {
    /// Check if anything changed
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Apply every fix carried by `diagnostics` to `doc`
///
/// All fixes are resolved against the original line numbers, so their order
/// does not matter. Several fixes deleting the same line delete it once.
pub fn apply_fixes(doc: &Document, diagnostics: &[Diagnostic]) -> FixOutcome {
    let mut deletions = BTreeSet::new();
    let mut skipped = 0;

    for fix in diagnostics.iter().filter_map(|d| d.fix) {
        match fix.action {
            FixAction::DeleteLine => {
                if doc.line(fix.line).is_some() {
                    deletions.insert(fix.line);
                } else {
                    skipped += 1;
                }
            }
        }
    }

    let mut document = doc.clone();
    document.retain_lines(|number| !deletions.contains(&number));

    debug!(deleted = deletions.len(), skipped, "applied line fixes");

    FixOutcome {
        document,
        applied: deletions.len(),
        skipped,
    }
}
