use serde::Serialize;

use crate::core::builder::FormatOptionsBuilder;
use crate::core::ranges::FrozenRangeSet;

/// The indentation convention a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Google style: 2-space block indentation.
    Google,
    /// AOSP style: 4-space block indentation.
    Aosp,
}

impl Style {
    /// Factor applied to the base indentation unit.
    pub fn indent_multiplier(self) -> usize {
        match self {
            Style::Google => 1,
            Style::Aosp => 2,
        }
    }
}

/// A finalized formatting request.
///
/// Produced once per invocation by `FormatOptionsBuilder::build` and only read
/// afterwards. All cross-field invariants hold for every value of this type:
/// `offsets().len() == lengths().len()`, every length is positive, and
/// `max_width() > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatOptions {
    pub(crate) files: Vec<String>,
    pub(crate) in_place: bool,
    pub(crate) lines: FrozenRangeSet,
    pub(crate) offsets: Vec<usize>,
    pub(crate) lengths: Vec<usize>,
    pub(crate) aosp: bool,
    pub(crate) max_width: usize,
    pub(crate) version: bool,
    pub(crate) help: bool,
    pub(crate) stdin: bool,
    pub(crate) fix_imports_only: bool,
    pub(crate) sort_imports: bool,
    pub(crate) remove_unused_imports: bool,
    pub(crate) dry_run: bool,
    pub(crate) set_exit_if_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) assume_filename: Option<String>,
    pub(crate) reflow_long_strings: bool,
    pub(crate) format_javadoc: bool,
}

impl FormatOptions {
    pub fn builder() -> FormatOptionsBuilder {
        FormatOptionsBuilder::new()
    }

    /// The files to format, in the order they were given.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Write results back to the source files instead of stdout.
    pub fn in_place(&self) -> bool {
        self.in_place
    }

    /// 1-based line ranges to format, half-open.
    pub fn lines(&self) -> &FrozenRangeSet {
        &self.lines
    }

    /// Character offsets for partial formatting, paired with `lengths`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Partial formatting region lengths, paired with `offsets`.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// `(offset, length)` selection regions.
    pub fn regions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.offsets.iter().copied().zip(self.lengths.iter().copied())
    }

    /// Use AOSP style instead of Google style.
    pub fn aosp(&self) -> bool {
        self.aosp
    }

    pub fn style(&self) -> Style {
        if self.aosp { Style::Aosp } else { Style::Google }
    }

    /// Maximal line length.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Print the version.
    pub fn version(&self) -> bool {
        self.version
    }

    /// Print usage information.
    pub fn help(&self) -> bool {
        self.help
    }

    /// Format input from stdin.
    pub fn stdin(&self) -> bool {
        self.stdin
    }

    /// Fix imports, but do no formatting.
    pub fn fix_imports_only(&self) -> bool {
        self.fix_imports_only
    }

    pub fn sort_imports(&self) -> bool {
        self.sort_imports
    }

    pub fn remove_unused_imports(&self) -> bool {
        self.remove_unused_imports
    }

    /// Only report the files whose contents would change.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Exit with a non-zero status if formatting changed anything.
    pub fn set_exit_if_changed(&self) -> bool {
        self.set_exit_if_changed
    }

    /// Name used in diagnostics when formatting standard input.
    pub fn assume_filename(&self) -> Option<&str> {
        self.assume_filename.as_deref()
    }

    pub fn reflow_long_strings(&self) -> bool {
        self.reflow_long_strings
    }

    pub fn format_javadoc(&self) -> bool {
        self.format_javadoc
    }

    /// True if the request restricts formatting to part of the input, either
    /// by line ranges or by offset/length regions.
    pub fn is_selection(&self) -> bool {
        !self.lines.is_empty() || !self.offsets.is_empty() || !self.lengths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_options_are_shareable() {
        assert_send_sync::<FormatOptions>();
    }

    #[test]
    fn test_style_follows_aosp_flag() {
        let google = FormatOptions::builder().build().unwrap();
        assert_eq!(google.style(), Style::Google);
        assert_eq!(google.style().indent_multiplier(), 1);

        let aosp = FormatOptions::builder().aosp(true).build().unwrap();
        assert_eq!(aosp.style(), Style::Aosp);
        assert_eq!(aosp.style().indent_multiplier(), 2);
    }

    #[test]
    fn test_regions_pair_by_index() {
        let options = FormatOptions::builder()
            .add_offset(10)
            .add_offset(40)
            .add_length(5)
            .add_length(2)
            .build()
            .unwrap();
        let regions: Vec<_> = options.regions().collect();
        assert_eq!(regions, vec![(10, 5), (40, 2)]);
    }

    #[test]
    fn test_is_selection() {
        assert!(!FormatOptions::builder().build().unwrap().is_selection());

        let mut by_lines = FormatOptions::builder();
        by_lines.add_line_range(3, 4);
        assert!(by_lines.build().unwrap().is_selection());

        let by_offset = FormatOptions::builder()
            .add_offset(0)
            .add_length(12)
            .build()
            .unwrap();
        assert!(by_offset.is_selection());
    }

    #[test]
    fn test_assume_filename_is_omitted_from_report_when_unset() {
        let options = FormatOptions::builder().build().unwrap();
        let json = serde_json::to_value(&options).unwrap();
        assert!(json.get("assume_filename").is_none());
        assert_eq!(json["max_width"], 100);
    }
}
