//! reviewdoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for reviewdoc:
//! - Check: Validate report structure, optionally fixing it in place
//! - Rules: List the registered rules
//!
//! # Library Usage
//!
//! ```ignore
//! use reviewdoc_cli::{check_command, OutputFormat};
//!
//! let report = check_command(&inputs, false, None)?;
//! println!("{}", report.render(OutputFormat::Json)?);
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Check a report
//! reviewdoc check review.md
//!
//! # Check every markdown file under docs/ and fix what can be fixed
//! reviewdoc check docs/ --fix
//!
//! # Machine-readable output
//! reviewdoc check review.md --format json
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{check_command, log_filter, rules_command, run_cli, CheckReport, OutputFormat};
