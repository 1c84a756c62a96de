//! Lint diagnostics for reviewdoc
//!
//! This module provides structures for reporting rule violations found in
//! a document, together with the machine-applicable fixes that remediate
//! them.

use serde::{Deserialize, Serialize};

/// A diagnostic message from a rule
///
/// Diagnostics represent structural issues found while validating a
/// document. Rules attach the offending text as `context` and may attach a
/// [`Fix`] that a fixer can apply without human intervention.
///
/// # Example
///
/// ```
/// use reviewdoc_core::diagnostics::{Diagnostic, Fix, Severity, Span};
///
/// let diag = Diagnostic::new(
///     Severity::Error,
///     "Unexpected subsection",
/// )
/// .with_code("AIS001")
/// .with_span(Span::line(6))
/// .with_context("**Extra Section:**")
/// .with_fix(Fix::delete_line(6));
///
/// assert_eq!(diag.line(), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level of the diagnostic
    pub severity: Severity,

    /// The diagnostic message
    pub message: String,

    /// Optional diagnostic code (e.g., "AIS001")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Name of the rule that produced this diagnostic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Source location where the issue occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,

    /// Optional file path where the issue occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// The offending source text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Additional help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Automatic fix for the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,

    /// Warning, indicates a potential issue
    Warning,

    /// Error, indicates a problem that should be fixed
    Error,
}

/// A source location span
///
/// Byte offsets into the document text, plus the 1-based line and column
/// that reports are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,

    /// End offset (exclusive)
    pub end: usize,

    /// Optional line number (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Optional column number (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

/// A machine-applicable fix
///
/// Fixes are keyed by the 1-based line number of the document they were
/// computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fix {
    /// Target line (1-indexed)
    pub line: usize,

    /// What to do with the line
    pub action: FixAction,
}

/// The edit a fix performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixAction {
    /// Remove the whole line, terminator included
    DeleteLine,
}

impl Fix {
    /// Fix that deletes the given line entirely
    pub fn delete_line(line: usize) -> Self {
        Self {
            line,
            action: FixAction::DeleteLine,
        }
    }
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            rule: None,
            span: None,
            file: None,
            context: None,
            help: None,
            fix: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the producing rule's name
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Set the source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the offending text
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach a fix
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// The 1-based line this diagnostic points at, if known
    pub fn line(&self) -> Option<usize> {
        self.span.and_then(|s| s.line)
    }

    /// Check if this is an error-level diagnostic
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning-level diagnostic
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }

    /// Check if a fix is attached
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

impl Span {
    /// Create a new span from start and end offsets
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            line: None,
            column: None,
        }
    }

    /// Create a span that only knows its line (column 1)
    pub fn line(line: usize) -> Self {
        Self::new(0, 0).with_position(line, 1)
    }

    /// Set both line and column
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: severity[code]: message
        write!(f, "{}", self.severity)?;
        if let Some(ref code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        let position = self.span.and_then(|s| s.line.zip(s.column));
        match (&self.file, position) {
            (Some(file), Some((line, col))) => write!(f, "\n  --> {}:{}:{}", file, line, col)?,
            (Some(file), None) => write!(f, "\n  --> {}", file)?,
            (None, Some((line, col))) => write!(f, "\n  --> line {}:{}", line, col)?,
            (None, None) => {}
        }

        if let Some(ref context) = self.context {
            write!(f, "\n   | {}", context)?;
        }

        if let Some(ref help) = self.help {
            write!(f, "\n  = help: {}", help)?;
        }

        Ok(())
    }
}

/// A collection of diagnostics
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    /// Get the number of diagnostics carrying a fix
    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_fixable()).count()
    }

    /// Get all diagnostics
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the count
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Severity::Error, "Test error");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test error");
        assert!(diag.code.is_none());
        assert!(diag.line().is_none());
        assert!(!diag.is_fixable());
    }

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::error("Unexpected subsection")
            .with_code("AIS001")
            .with_rule("action-items-structure")
            .with_span(Span::line(6))
            .with_file("report.md")
            .with_context("**Extra Section:**")
            .with_fix(Fix::delete_line(6));

        assert!(diag.is_error());
        assert_eq!(diag.code, Some("AIS001".to_string()));
        assert_eq!(diag.rule, Some("action-items-structure".to_string()));
        assert_eq!(diag.line(), Some(6));
        assert_eq!(diag.fix, Some(Fix::delete_line(6)));
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_diagnostics_collection() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::error("Error 1").with_fix(Fix::delete_line(1)));
        diags.push(Diagnostic::warning("Warning 1"));
        diags.push(Diagnostic::error("Error 2"));

        assert!(diags.has_errors());
        assert_eq!(diags.error_count(), 2);
        assert_eq!(diags.warning_count(), 1);
        assert_eq!(diags.fixable_count(), 1);
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("Only two subsections are allowed")
            .with_code("AIS001")
            .with_file("report.md")
            .with_span(Span::line(6))
            .with_context("**Extra Section:**")
            .with_help("Delete the line");

        let display = format!("{}", diag);
        assert!(display.contains("error[AIS001]"));
        assert!(display.contains("Only two subsections are allowed"));
        assert!(display.contains("report.md:6:1"));
        assert!(display.contains("| **Extra Section:**"));
        assert!(display.contains("help: Delete the line"));
    }

    #[test]
    fn test_display_without_file() {
        let diag = Diagnostic::warning("Something").with_span(Span::line(3));
        assert!(format!("{}", diag).contains("--> line 3:1"));
    }

    #[test]
    fn test_diagnostic_serialize() {
        let diag = Diagnostic::warning("Stray subsection")
            .with_code("AIS001")
            .with_fix(Fix::delete_line(4));

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"code\":\"AIS001\""));
        assert!(json.contains("\"action\":\"delete-line\""));
        assert!(!json.contains("\"span\""));

        let restored: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, diag);
    }
}
