//! Error types for rule configuration

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when a rule is configured with unusable values
///
/// These are caller-side mistakes. Rules reject them when they are
/// constructed so that a scan can never fail halfway through a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The section heading is empty after trimming
    #[error("section heading must not be empty")]
    EmptyHeading,

    /// The section heading is not an ATX heading (`#`-run followed by text)
    #[error("section heading is not a markdown heading: {0:?}")]
    NotAHeading(String),

    /// A required subsection label is empty after trimming
    #[error("required label #{0} must not be empty")]
    EmptyLabel(usize),

    /// Both required labels are the same string
    #[error("required labels must differ, both are {0:?}")]
    DuplicateLabel(String),
}
