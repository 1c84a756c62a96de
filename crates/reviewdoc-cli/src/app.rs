//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use reviewdoc_core::{apply_fixes, Diagnostic, Diagnostics, Document};
use reviewdoc_validate::{Settings, ValidationEngine};

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "reviewdoc")]
#[command(author, version, about = "Structure checks for review reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check markdown reports for structural issues
    Check {
        /// Input files or directories (directories are searched for *.md)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Apply automatic fixes and rewrite the files
        #[arg(long)]
        fix: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the rules that would run
    Rules {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            inputs,
            format,
            fix,
            config,
        } => {
            let report = check_command(&inputs, fix, config.as_deref())?;
            println!("{}", report.render(format)?);

            // Exit with error code if there are errors
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        Commands::Rules { config } => {
            println!("{}", rules_command(config.as_deref())?);
        }
    }

    Ok(())
}

/// Outcome of a check run across all inputs
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Number of files checked
    pub files: usize,
    /// Diagnostics remaining after any fixes, tagged with their file
    pub diagnostics: Diagnostics,
    /// Number of lines removed by fixes
    pub fixed: usize,
}

impl CheckReport {
    /// Check if any error-level diagnostics remain
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Format the report for output
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self.diagnostics.as_slice())
                .context("Failed to serialize diagnostics to JSON"),
            OutputFormat::Text => {
                let mut out = String::new();

                if self.fixed > 0 {
                    out.push_str(&format!("Fixed {} line(s)\n", self.fixed));
                }

                if self.diagnostics.is_empty() {
                    out.push_str(&format!("✓ No issues found in {} file(s)", self.files));
                } else {
                    for diag in self.diagnostics.iter() {
                        out.push_str(&format!("{}\n\n", diag));
                    }
                    out.push_str(&format!(
                        "Found {} error(s) and {} warning(s)",
                        self.diagnostics.error_count(),
                        self.diagnostics.warning_count()
                    ));
                    let fixable = self.diagnostics.fixable_count();
                    if fixable > 0 {
                        out.push_str(&format!(" ({} fixable with --fix)", fixable));
                    }
                }

                Ok(out)
            }
        }
    }
}

/// Execute the check command
///
/// With `fix`, files are rewritten with all fixes applied and the report
/// lists what remains.
pub fn check_command(
    inputs: &[PathBuf],
    fix: bool,
    config_path: Option<&Path>,
) -> Result<CheckReport> {
    let settings = load_settings(config_path)?;
    let engine = ValidationEngine::from_settings(&settings).context("Invalid rule configuration")?;

    let files = collect_inputs(inputs)?;
    let mut report = CheckReport {
        files: files.len(),
        ..CheckReport::default()
    };

    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        let mut doc = Document::parse(&content);
        let mut diagnostics = engine.validate(&doc);

        if fix && diagnostics.iter().any(Diagnostic::is_fixable) {
            let outcome = apply_fixes(&doc, &diagnostics);
            if outcome.changed() {
                fs::write(path, outcome.document.to_text())
                    .with_context(|| format!("Failed to write fixed file: {}", path.display()))?;
                info!(file = %path.display(), lines = outcome.applied, "applied fixes");
                report.fixed += outcome.applied;
                doc = outcome.document;
                diagnostics = engine.validate(&doc);
            }
        }

        debug!(file = %path.display(), count = diagnostics.len(), "checked");
        let file = path.display().to_string();
        report
            .diagnostics
            .extend(diagnostics.into_iter().map(|d| d.with_file(file.clone())));
    }

    Ok(report)
}

/// Execute the rules command
pub fn rules_command(config_path: Option<&Path>) -> Result<String> {
    let settings = load_settings(config_path)?;
    let engine = ValidationEngine::from_settings(&settings).context("Invalid rule configuration")?;

    if engine.validator_count() == 0 {
        return Ok("No rules enabled".to_string());
    }

    let lines: Vec<String> = engine
        .validators()
        .map(|v| {
            format!(
                "{} ({}) [{}]: {}",
                v.name(),
                v.code(),
                v.tags().join(", "),
                v.description()
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Load settings from a config file or use defaults
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Settings::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        }
        None => discover_settings(Path::new(".")),
    }
}

/// Look for `reviewdoc.toml` or `.reviewdoc.toml` in `dir`, else defaults
fn discover_settings(dir: &Path) -> Result<Settings> {
    for candidate in ["reviewdoc.toml", ".reviewdoc.toml"] {
        let path = dir.join(candidate);
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            return Settings::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()));
        }
    }
    Ok(Settings::default())
}

/// Log filter from a `RUST_LOG`-style value, `info` when unset or invalid
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Expand inputs into a sorted list of markdown files
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let patterns = [
                input.join("**/*.md").display().to_string(),
                input.join("**/*.markdown").display().to_string(),
            ];
            for pattern in &patterns {
                for entry in
                    glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?
                {
                    match entry {
                        Ok(path) => files.push(path),
                        Err(e) => warn!("Could not read {}", e),
                    }
                }
            }
        } else if input.exists() {
            files.push(input.clone());
        } else {
            anyhow::bail!("Input file not found: {}", input.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
