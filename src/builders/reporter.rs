use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt::Write as _;
use std::path::Path;

use crate::core::options::FormatOptions;

/// Output formats for a resolved formatting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary.
    #[default]
    Console,
    Json,
    Yaml,
    Toml,
}

pub trait RequestReporter {
    /// Renders `options` as text in the reporter's format.
    fn render(&self, options: &FormatOptions) -> Result<String>;
}

/// Renders a request through `serde` in one of the machine-readable formats,
/// or as a console summary.
pub struct SerdeReporter {
    format: ReportFormat,
}

impl SerdeReporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Writes the rendered report to `path`.
    pub fn export(&self, options: &FormatOptions, path: &Path) -> Result<()> {
        let content = self.render(options)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Formats the console summary.
    ///
    /// One line per concern: inputs, selection, style, imports, output mode.
    fn format_console(&self, options: &FormatOptions) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "📄 Formatting request")?;
        writeln!(out, "=====================")?;

        if options.stdin() {
            let name = options.assume_filename().unwrap_or("<stdin>");
            writeln!(out, "Input: standard input (as {name})")?;
        } else if options.files().is_empty() {
            writeln!(out, "Input: none")?;
        } else {
            writeln!(out, "Input: {} file(s)", options.files().len())?;
            for file in options.files() {
                writeln!(out, "  └─ {file}")?;
            }
        }

        if options.is_selection() {
            if !options.lines().is_empty() {
                writeln!(out, "Lines: {}", options.lines())?;
            }
            for (offset, length) in options.regions() {
                writeln!(out, "Region: offset {offset}, length {length}")?;
            }
        } else {
            writeln!(out, "Selection: whole file")?;
        }

        writeln!(
            out,
            "Style: {:?} (max width {})",
            options.style(),
            options.max_width()
        )?;

        let imports = if options.fix_imports_only() {
            "fix only"
        } else {
            "format"
        };
        writeln!(
            out,
            "Imports: {imports} (sort: {}, remove unused: {})",
            options.sort_imports(),
            options.remove_unused_imports()
        )?;
        writeln!(
            out,
            "Reflow long strings: {}, format javadoc: {}",
            options.reflow_long_strings(),
            options.format_javadoc()
        )?;

        let mode = match (options.dry_run(), options.in_place()) {
            (true, _) => "dry run",
            (false, true) => "in place",
            (false, false) => "stdout",
        };
        writeln!(
            out,
            "Output: {mode} (exit if changed: {})",
            options.set_exit_if_changed()
        )?;
        Ok(out)
    }
}

impl RequestReporter for SerdeReporter {
    fn render(&self, options: &FormatOptions) -> Result<String> {
        match self.format {
            ReportFormat::Console => self.format_console(options),
            ReportFormat::Json => {
                serde_json::to_string_pretty(options).context("Failed to serialize to JSON")
            }
            ReportFormat::Yaml => serde_yaml::to_string(options).context("Failed to serialize to YAML"),
            ReportFormat::Toml => {
                toml::to_string_pretty(options).context("Failed to serialize to TOML")
            }
        }
    }
}
