//! Action items structure validator
//!
//! Polices the subsections of one report section. The section must contain
//! exactly two bold-labeled subsections, and any other bold `**Label:**` line
//! found after both of them is reported with a fix that deletes it.
//!
//! ```text
//! ## 🎯 ACTION ITEMS
//! **Immediate Actions Required:**
//! - ...
//! **Recommended Improvements:**
//! - ...
//! **Extra Section:**        <- AIS001, fix: delete line
//! ## NEXT                   <- scan stops here
//! ```
//!
//! Bold labels that appear before both required labels have been seen are
//! tolerated and never reported.

use std::iter::FusedIterator;

use reviewdoc_core::{ConfigError, Diagnostic, Document, Fix, Line, Severity, Span};
use tracing::debug;

use crate::patterns::{closes_section, heading_level, is_bold_label};
use crate::Validator;

/// Heading of the section policed by default
pub const DEFAULT_SECTION_HEADING: &str = "## 🎯 ACTION ITEMS";

/// The two subsection labels allowed by default, in required order
pub const DEFAULT_REQUIRED_LABELS: [&str; 2] = [
    "**Immediate Actions Required:**",
    "**Recommended Improvements:**",
];

/// Diagnostic code for a disallowed subsection
pub const UNEXPECTED_SUBSECTION: &str = "AIS001";

/// Configuration for [`ActionItemsValidator`]
///
/// Construction validates the heading and labels, so a validator built from
/// a config can never fail mid-scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItemsConfig {
    section_heading: String,
    section_level: u8,
    required_labels: [String; 2],
    severity: Severity,
}

impl ActionItemsConfig {
    /// Create a config for `section_heading` allowing only `required_labels`
    ///
    /// Heading and labels are compared against trimmed lines, so they are
    /// trimmed here as well.
    pub fn new<H, L>(section_heading: H, required_labels: [L; 2]) -> Result<Self, ConfigError>
    where
        H: Into<String>,
        L: Into<String>,
    {
        let section_heading = section_heading.into().trim().to_string();
        if section_heading.is_empty() {
            return Err(ConfigError::EmptyHeading);
        }
        let section_level = heading_level(&section_heading)
            .ok_or_else(|| ConfigError::NotAHeading(section_heading.clone()))?;

        let required_labels = required_labels.map(|label| label.into().trim().to_string());
        for (index, label) in required_labels.iter().enumerate() {
            if label.is_empty() {
                return Err(ConfigError::EmptyLabel(index + 1));
            }
        }
        if required_labels[0] == required_labels[1] {
            return Err(ConfigError::DuplicateLabel(required_labels[0].clone()));
        }

        Ok(Self {
            section_heading,
            section_level,
            required_labels,
            severity: Severity::Error,
        })
    }

    /// Set the severity of reported diagnostics
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Exact heading text that opens the section
    pub fn section_heading(&self) -> &str {
        &self.section_heading
    }

    /// Heading level of the section (number of leading `#`)
    pub fn section_level(&self) -> u8 {
        self.section_level
    }

    /// The allowed subsection labels, in required order
    pub fn required_labels(&self) -> [&str; 2] {
        [&self.required_labels[0], &self.required_labels[1]]
    }

    /// Severity of reported diagnostics
    pub fn severity(&self) -> Severity {
        self.severity
    }

    fn message(&self) -> String {
        let title = self.section_heading.trim_start_matches('#').trim();
        format!(
            "{} section should only contain '{}' and '{}' subsections",
            title,
            label_name(&self.required_labels[0]),
            label_name(&self.required_labels[1]),
        )
    }
}

impl Default for ActionItemsConfig {
    fn default() -> Self {
        Self {
            section_heading: DEFAULT_SECTION_HEADING.to_string(),
            section_level: 2,
            required_labels: DEFAULT_REQUIRED_LABELS.map(str::to_string),
            severity: Severity::Error,
        }
    }
}

/// `**Recommended Improvements:**` -> `Recommended Improvements`
fn label_name(label: &str) -> &str {
    label
        .trim_start_matches("**")
        .trim_end_matches("**")
        .trim_end_matches(':')
}

/// Where the scanner is relative to the policed section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Section heading not reached yet
    BeforeSection,
    /// Inside the section, neither required label seen
    AwaitingBoth,
    /// Only the first label seen
    AwaitingSecond,
    /// Only the second label seen
    AwaitingFirst,
    /// Both labels seen; any other bold label is a violation
    BothDeclared,
    /// Section ended; nothing more is inspected
    Closed,
}

/// What a single line means for the rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to report
    Pass,
    /// Disallowed subsection label
    Violation,
}

impl ScanState {
    /// Feed one line and return the next state with the line's verdict
    pub fn transition(self, line: &Line<'_>, config: &ActionItemsConfig) -> (ScanState, Verdict) {
        let trimmed = line.trimmed();
        let [first, second] = config.required_labels();

        match self {
            ScanState::Closed => (ScanState::Closed, Verdict::Pass),
            ScanState::BeforeSection if trimmed == config.section_heading() => {
                (ScanState::AwaitingBoth, Verdict::Pass)
            }
            ScanState::BeforeSection => (ScanState::BeforeSection, Verdict::Pass),
            // Repeated heading inside the section is skipped, not a close
            _ if trimmed == config.section_heading() => (self, Verdict::Pass),
            _ if closes_section(line.text, config.section_level()) => {
                (ScanState::Closed, Verdict::Pass)
            }
            _ if trimmed == first => (self.first_seen(), Verdict::Pass),
            _ if trimmed == second => (self.second_seen(), Verdict::Pass),
            ScanState::BothDeclared if is_bold_label(line.text) => {
                (ScanState::BothDeclared, Verdict::Violation)
            }
            _ => (self, Verdict::Pass),
        }
    }

    fn first_seen(self) -> Self {
        match self {
            ScanState::AwaitingBoth => ScanState::AwaitingSecond,
            ScanState::AwaitingFirst => ScanState::BothDeclared,
            other => other,
        }
    }

    fn second_seen(self) -> Self {
        match self {
            ScanState::AwaitingBoth => ScanState::AwaitingFirst,
            ScanState::AwaitingSecond => ScanState::BothDeclared,
            other => other,
        }
    }

    /// Check if the scanner is inside the policed section
    pub fn in_section(self) -> bool {
        !matches!(self, ScanState::BeforeSection | ScanState::Closed)
    }
}

/// Validates the subsection structure of the action items section
///
/// # Diagnostic Codes
///
/// - `AIS001`: Subsection other than the two required ones
///
/// # Example
///
/// ```
/// use reviewdoc_core::Document;
/// use reviewdoc_validate::{ActionItemsValidator, Validator};
///
/// let doc = Document::from_lines([
///     "## 🎯 ACTION ITEMS",
///     "**Immediate Actions Required:**",
///     "- do X",
///     "**Recommended Improvements:**",
///     "- do Y",
///     "**Extra Section:**",
///     "- z",
///     "## NEXT",
/// ]);
///
/// let diagnostics = ActionItemsValidator::default().validate(&doc);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].line(), Some(6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActionItemsValidator {
    config: ActionItemsConfig,
}

impl ActionItemsValidator {
    /// Create a validator from a checked config
    pub fn new(config: ActionItemsConfig) -> Self {
        Self { config }
    }

    /// The validator's configuration
    pub fn config(&self) -> &ActionItemsConfig {
        &self.config
    }

    /// Lazily scan a document
    pub fn scan<'v, 'd>(
        &'v self,
        doc: &'d Document,
    ) -> Violations<'v, impl Iterator<Item = Line<'d>> + 'd> {
        self.scan_lines(doc.lines())
    }

    /// Lazily scan any sequence of numbered lines
    ///
    /// The returned iterator stops pulling lines once the section closes.
    pub fn scan_lines<'d, I>(&self, lines: I) -> Violations<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Line<'d>>,
    {
        Violations {
            validator: self,
            lines: lines.into_iter(),
            state: ScanState::BeforeSection,
        }
    }

    fn diagnostic(&self, line: &Line<'_>) -> Diagnostic {
        Diagnostic::new(self.config.severity(), self.config.message())
            .with_code(UNEXPECTED_SUBSECTION)
            .with_rule(self.name())
            .with_span(Span::line(line.number))
            .with_context(line.trimmed())
            .with_help("Delete the line or merge its content into an allowed subsection")
            .with_fix(Fix::delete_line(line.number))
    }
}

impl Validator for ActionItemsValidator {
    fn code(&self) -> &'static str {
        "AIS"
    }

    fn name(&self) -> &'static str {
        "action-items-structure"
    }

    fn description(&self) -> &'static str {
        "ACTION ITEMS section must only contain allowed subsections"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["structure"]
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        self.scan(doc)
            .map(|diag| match diag.line().and_then(|n| doc.line_span(n)) {
                Some(span) => diag.with_span(span),
                None => diag,
            })
            .collect()
    }
}

/// Lazy sequence of violations produced by [`ActionItemsValidator::scan`]
///
/// All scan state lives here, so a caller may pull violations one at a time
/// between other work.
pub struct Violations<'v, I> {
    validator: &'v ActionItemsValidator,
    lines: I,
    state: ScanState,
}

impl<I> Violations<'_, I> {
    /// Current scan state
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl<'v, 'd, I> Iterator for Violations<'v, I>
where
    I: Iterator<Item = Line<'d>>,
{
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state != ScanState::Closed {
            let Some(line) = self.lines.next() else {
                // End of document closes the section implicitly
                self.state = ScanState::Closed;
                break;
            };

            let config = &self.validator.config;
            let (next, verdict) = self.state.transition(&line, config);
            if next.in_section() && !self.state.in_section() {
                debug!(line = line.number, "entered {}", config.section_heading());
            } else if next == ScanState::Closed {
                debug!(line = line.number, "left {}", config.section_heading());
            }
            self.state = next;

            if verdict == Verdict::Violation {
                return Some(self.validator.diagnostic(&line));
            }
        }

        None
    }
}

impl<'d, I> FusedIterator for Violations<'_, I> where I: Iterator<Item = Line<'d>> {}
