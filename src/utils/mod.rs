use anyhow::{Context, Result};
use std::path::Path;

use crate::builders::reporter::{ReportFormat, RequestReporter, SerdeReporter};
use crate::builders::validator::{RequestValidator, StandardValidator};
use crate::core::builder::FormatOptionsBuilder;
use crate::core::options::FormatOptions;
use crate::core::version;

/// Builds the request and applies the front-end policy to it.
pub fn resolve_request(builder: &FormatOptionsBuilder) -> Result<FormatOptions> {
    let options = builder.build().context("Invalid formatting request")?;

    let validator = StandardValidator::new();
    let issues = validator.validate_request(&options)?;
    if !issues.is_empty() {
        anyhow::bail!("{}", issues.join("; "));
    }
    Ok(options)
}

/// Produces the text the binary prints for `options`: the version line, or
/// the rendered request. `--help` is handled by the caller, which owns the
/// usage text.
pub fn describe_request(
    options: &FormatOptions,
    format: ReportFormat,
    export: Option<&Path>,
) -> Result<String> {
    if options.version() {
        return Ok(version::version_string());
    }

    let reporter = SerdeReporter::new(format);
    if let Some(path) = export {
        reporter.export(options, path)?;
        return Ok(format!("✓ Wrote formatting request to {}", path.display()));
    }
    reporter.render(options)
}
