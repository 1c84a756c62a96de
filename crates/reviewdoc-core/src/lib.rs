//! reviewdoc-core - Document model and diagnostics
//!
//! Core library for reviewdoc, providing the line-oriented document model
//! that rules read, the diagnostics they produce, and the machinery that
//! applies their fixes.
//!
//! # Example
//!
//! ```
//! use reviewdoc_core::{apply_fixes, Diagnostic, Document, Fix, Span};
//!
//! let doc = Document::parse("# Report\n**Stray:**\nBody\n");
//! let diag = Diagnostic::error("Unexpected subsection")
//!     .with_span(Span::line(2))
//!     .with_fix(Fix::delete_line(2));
//!
//! let outcome = apply_fixes(&doc, &[diag]);
//! assert_eq!(outcome.document.to_text(), "# Report\nBody\n");
//! assert_eq!(outcome.applied, 1);
//! ```

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod fix;

// Re-export main types and functions
pub use diagnostics::{Diagnostic, Diagnostics, Fix, FixAction, Severity, Span};
pub use document::{Document, Line};
pub use error::ConfigError;
pub use fix::{apply_fixes, FixOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
