//! reviewdoc-validate - Document structure rules
//!
//! This crate provides a pluggable validation engine for checking the
//! structure of review reports written with markdown headings.
//!
//! # Architecture
//!
//! The validation engine uses a trait-based design where individual rules
//! implement the `Validator` trait. The `ValidationEngine` orchestrates running
//! all registered validators and collecting diagnostics in document order.
//!
//! # Example
//!
//! ```
//! use reviewdoc_core::Document;
//! use reviewdoc_validate::{ActionItemsValidator, ValidationEngine};
//!
//! let mut engine = ValidationEngine::new();
//! engine.add_validator(Box::new(ActionItemsValidator::default()));
//!
//! let doc = Document::parse("# Review\n\nNothing to do.\n");
//! let diagnostics = engine.validate(&doc);
//! assert!(diagnostics.is_empty());
//! ```

pub mod action_items;
pub mod config;
pub mod patterns;

use reviewdoc_core::{ConfigError, Diagnostic, Document};
use tracing::debug;

// Re-export validators
pub use action_items::{ActionItemsConfig, ActionItemsValidator, ScanState, Verdict, Violations};
pub use config::{ActionItemsSettings, RuleSettings, RuleSeverity, Settings};

/// Trait for document validators
///
/// Validators inspect a document and return a list of diagnostics
/// for any issues found. Each validator has a unique short code that
/// can be used in place of its name.
pub trait Validator: Send + Sync {
    /// Get the validator's unique short code (e.g., "AIS")
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this validator
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// One-line description of what the rule checks
    fn description(&self) -> &'static str {
        ""
    }

    /// Tags grouping related rules
    fn tags(&self) -> &'static [&'static str] {
        &[]
    }

    /// Validate the document and return any diagnostics
    fn validate(&self, doc: &Document) -> Vec<Diagnostic>;
}

/// Validation engine that orchestrates multiple validators
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create a new empty validation engine
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with default validators
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(ActionItemsValidator::default()));
        engine
    }

    /// Create an engine from settings
    ///
    /// Rules whose severity is `ignore` are not registered.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let mut engine = Self::new();

        if let Some(config) = settings.rules.action_items_structure.to_config()? {
            engine.add_validator(Box::new(ActionItemsValidator::new(config)));
        }

        Ok(engine)
    }

    /// Add a validator to the engine
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Get the number of registered validators
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Get the names of all registered validators
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Iterate over registered validators
    pub fn validators(&self) -> impl Iterator<Item = &dyn Validator> + '_ {
        self.validators.iter().map(|v| &**v as &dyn Validator)
    }

    /// Validate a document using all registered validators
    ///
    /// Diagnostics are ordered by line; diagnostics on the same line keep
    /// the order in which their validators were registered.
    pub fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for validator in &self.validators {
            let validator_diagnostics = validator.validate(doc);
            debug!(
                rule = validator.name(),
                count = validator_diagnostics.len(),
                "validator finished"
            );
            diagnostics.extend(validator_diagnostics);
        }

        diagnostics.sort_by_key(|d| d.line().unwrap_or(0));
        diagnostics
    }

    /// Check if a document has any errors
    pub fn has_errors(&self, doc: &Document) -> bool {
        self.validate(doc).iter().any(|d| d.is_error())
    }

    /// Check if a document has any warnings or errors
    pub fn has_issues(&self, doc: &Document) -> bool {
        !self.validate(doc).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use reviewdoc_core::Span;

    /// Flags every line that says "TODO"
    struct TodoValidator;

    impl Validator for TodoValidator {
        fn code(&self) -> &'static str {
            "TODO"
        }

        fn name(&self) -> &'static str {
            "no-todo"
        }

        fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
            doc.lines()
                .filter(|l| l.text.contains("TODO"))
                .map(|l| Diagnostic::warning("TODO left in report").with_span(Span::line(l.number)))
                .collect()
        }
    }

    fn report_with_extra_section() -> Document {
        Document::from_lines([
            "## 🎯 ACTION ITEMS",
            "**Immediate Actions Required:**",
            "TODO",
            "**Recommended Improvements:**",
            "**Extra:**",
            "TODO again",
        ])
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_engine_new() {
        let engine = ValidationEngine::new();
        assert_eq!(engine.validator_count(), 0);
    }

    #[test]
    fn test_engine_with_defaults() {
        let engine = ValidationEngine::with_defaults();
        assert!(engine.validator_count() > 0);
        assert!(engine.validator_names().contains(&"action-items-structure"));
    }

    #[test]
    fn test_engine_add_validator() {
        let mut engine = ValidationEngine::new();
        engine.add_validator(Box::new(TodoValidator));
        assert_eq!(engine.validator_count(), 1);
        assert_eq!(engine.validators().next().map(|v| v.code()), Some("TODO"));
    }

    #[test]
    fn test_validate_empty_document() {
        let engine = ValidationEngine::with_defaults();
        let doc = Document::new();
        assert!(engine.validate(&doc).is_empty());
        assert!(!engine.has_issues(&doc));
    }

    #[test]
    fn test_diagnostics_are_in_line_order() {
        let mut engine = ValidationEngine::with_defaults();
        engine.add_validator(Box::new(TodoValidator));

        let diagnostics = engine.validate(&report_with_extra_section());
        let lines: Vec<_> = diagnostics.iter().filter_map(Diagnostic::line).collect();
        assert_eq!(lines, vec![3, 5, 6]);
    }

    #[test]
    fn test_has_errors() {
        let engine = ValidationEngine::with_defaults();
        assert!(engine.has_errors(&report_with_extra_section()));

        let mut todo_only = ValidationEngine::new();
        todo_only.add_validator(Box::new(TodoValidator));
        assert!(!todo_only.has_errors(&report_with_extra_section()));
        assert!(todo_only.has_issues(&report_with_extra_section()));
    }

    #[test]
    fn test_from_settings_ignore_disables_rule() {
        let settings = Settings::from_toml_str(
            r#"
[rules.action_items_structure]
severity = "ignore"
"#,
        )
        .unwrap();

        let engine = ValidationEngine::from_settings(&settings).unwrap();
        assert_eq!(engine.validator_count(), 0);
    }

    #[test]
    fn test_from_settings_rejects_invalid_rule_config() {
        let settings = Settings::from_toml_str(
            r#"
[rules.action_items_structure]
section_heading = "ACTION ITEMS"
"#,
        )
        .unwrap();

        assert!(matches!(
            ValidationEngine::from_settings(&settings),
            Err(ConfigError::NotAHeading(_))
        ));
    }
}
