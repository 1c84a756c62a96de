//! Rule configuration
//!
//! Settings are loaded from `reviewdoc.toml`:
//!
//! ```toml
//! [rules.action_items_structure]
//! severity = "error"
//! section_heading = "## 🎯 ACTION ITEMS"
//! required_labels = ["**Immediate Actions Required:**", "**Recommended Improvements:**"]
//! ```
//!
//! Every field is optional and falls back to the built-in default.

mod settings;


pub use settings::{ActionItemsSettings, RuleSettings, RuleSeverity, Settings};
