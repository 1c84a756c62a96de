//! Configuration settings structures

use reviewdoc_core::{ConfigError, Severity};
use serde::{Deserialize, Serialize};

use crate::action_items::{ActionItemsConfig, DEFAULT_REQUIRED_LABELS, DEFAULT_SECTION_HEADING};

/// Configured severity of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Rule violations are errors (non-zero exit)
    #[default]
    Error,
    /// Rule violations are warnings
    Warning,
    /// Rule violations are informational
    Info,
    /// Rule is disabled
    Ignore,
}

impl RuleSeverity {
    /// Convert to diagnostic Severity, returns None if Ignore
    pub fn to_severity(self) -> Option<Severity> {
        match self {
            RuleSeverity::Error => Some(Severity::Error),
            RuleSeverity::Warning => Some(Severity::Warning),
            RuleSeverity::Info => Some(Severity::Info),
            RuleSeverity::Ignore => None,
        }
    }

    /// Check if this severity means the rule is enabled
    pub fn is_enabled(self) -> bool {
        self != RuleSeverity::Ignore
    }
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Per-rule settings
    pub rules: RuleSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Settings for each built-in rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleSettings {
    /// `action-items-structure` (AIS)
    pub action_items_structure: ActionItemsSettings,
}

/// Settings for the action items structure rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItemsSettings {
    /// Severity of AIS001
    pub severity: RuleSeverity,
    /// Exact heading that opens the policed section
    pub section_heading: String,
    /// The two allowed subsection labels, in required order
    pub required_labels: [String; 2],
}

impl Default for ActionItemsSettings {
    fn default() -> Self {
        Self {
            severity: RuleSeverity::default(),
            section_heading: DEFAULT_SECTION_HEADING.to_string(),
            required_labels: DEFAULT_REQUIRED_LABELS.map(str::to_string),
        }
    }
}

impl ActionItemsSettings {
    /// Build a checked rule config, or `None` when the rule is ignored
    pub fn to_config(&self) -> Result<Option<ActionItemsConfig>, ConfigError> {
        let Some(severity) = self.severity.to_severity() else {
            return Ok(None);
        };

        let config = ActionItemsConfig::new(
            self.section_heading.as_str(),
            [
                self.required_labels[0].as_str(),
                self.required_labels[1].as_str(),
            ],
        )?;

        Ok(Some(config.with_severity(severity)))
    }
}
