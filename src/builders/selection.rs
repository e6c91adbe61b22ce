use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;
use std::ops::Range;
use tracing::debug;

use crate::core::builder::FormatOptionsBuilder;

/// One `--lines` token: a single 1-based line (`7`) or an inclusive
/// 1-based span (`1:5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    /// First selected line.
    pub first: usize,
    /// Last selected line, inclusive.
    pub last: usize,
}

const LINE_SPEC_PATTERN: &str = r"^(\d+)(?::(\d+))?$";

impl LineSpec {
    /// Parses `N` or `N:M`.
    ///
    /// Line numbers start at 1, so `0` is rejected here. A span whose end lies
    /// before its start is accepted; the builder reports it when the request
    /// is built.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        let regex = Regex::new(LINE_SPEC_PATTERN).context("Invalid line spec pattern")?;
        let caps = regex
            .captures(spec)
            .with_context(|| format!("Line range must be in format 'N' or 'N:M', got '{spec}'"))?;

        let first: usize = caps[1].parse().context("Invalid start line")?;
        let last: usize = match caps.get(2) {
            Some(m) => m.as_str().parse().context("Invalid end line")?,
            None => first,
        };
        if first == 0 || last == 0 {
            anyhow::bail!("Line numbers start from 1, not 0: '{spec}'");
        }
        Ok(Self { first, last })
    }

    /// The half-open range of line numbers this spec selects.
    pub fn to_range(self) -> Range<usize> {
        self.first..self.last.saturating_add(1)
    }
}

impl fmt::Display for LineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}:{}", self.first, self.last)
        }
    }
}

/// Parses a comma-separated `--lines` value such as `1:5,10:12`.
pub fn parse_line_ranges(text: &str) -> Result<Vec<LineSpec>> {
    text.split(',')
        .map(LineSpec::parse)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Invalid --lines value '{text}'"))
}

/// Parses every `--lines` value and feeds the ranges into `builder`.
pub fn apply_lines<S: AsRef<str>>(builder: &mut FormatOptionsBuilder, values: &[S]) -> Result<()> {
    for value in values {
        for spec in parse_line_ranges(value.as_ref())? {
            debug!(%spec, "selecting lines");
            let range = spec.to_range();
            builder.add_line_range(range.start, range.end);
        }
    }
    Ok(())
}
