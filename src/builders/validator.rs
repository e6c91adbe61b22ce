use anyhow::Result;
use tracing::warn;

use crate::core::options::FormatOptions;

/// The `RequestValidator` trait checks a built request against the policy of
/// the command-line front-end.
///
/// `FormatOptions` already guarantees its own structural invariants (paired
/// offsets and lengths, a positive width). A validator looks at combinations
/// of flags that are individually fine but make no sense together.
pub trait RequestValidator {
    /// Returns every policy issue found in `options`. An empty vector means the
    /// request can be handed to the formatter.
    fn validate_request(&self, options: &FormatOptions) -> Result<Vec<String>>;
}

/// The checks applied by the `jformat-options` binary.
///
/// Requests that combine `--lines` with `--offset/--length` pass: both
/// restrictions are honored together.
pub struct StandardValidator;

impl StandardValidator {
    pub fn new() -> Self {
        Self
    }

    /// Counts the inputs a request will format. Stdin counts as one.
    fn input_count(&self, options: &FormatOptions) -> usize {
        options.files().len() + usize::from(options.stdin())
    }

    /// Checks for flags that only apply to one kind of input.
    fn check_input_conflicts(&self, options: &FormatOptions) -> Vec<String> {
        let mut issues = Vec::new();

        if options.stdin() && !options.files().is_empty() {
            issues.push("cannot format from standard input and files simultaneously".to_string());
        }
        if options.assume_filename().is_some() && !options.stdin() {
            issues.push(
                "--assume-filename is only supported when formatting standard input".to_string(),
            );
        }
        if options.in_place() && options.stdin() {
            issues.push("in-place formatting was requested but no files were provided".to_string());
        }
        if options.dry_run() && options.in_place() {
            issues.push("cannot use --dry-run and --in-place at the same time".to_string());
        }
        issues
    }

    /// Checks that a partial-formatting request targets a single input.
    fn check_selection(&self, options: &FormatOptions) -> Vec<String> {
        let mut issues = Vec::new();
        if !options.is_selection() {
            return issues;
        }

        if self.input_count(options) > 1 {
            issues.push("partial formatting is only supported for a single file".to_string());
        }
        if options.fix_imports_only() {
            issues.push("--fix-imports-only cannot be combined with a line or offset selection".to_string());
        }
        issues
    }
}

impl Default for StandardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestValidator for StandardValidator {
    fn validate_request(&self, options: &FormatOptions) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        // `--help` and `--version` short-circuit everything else.
        if options.help() || options.version() {
            return Ok(issues);
        }

        if self.input_count(options) == 0 {
            issues.push("no files were provided".to_string());
        }
        issues.extend(self.check_input_conflicts(options));
        issues.extend(self.check_selection(options));

        for issue in &issues {
            warn!(%issue, "rejected formatting request");
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::FormatOptionsBuilder;

    fn issues_for(builder: &FormatOptionsBuilder) -> Vec<String> {
        let options = builder.build().unwrap();
        StandardValidator::new().validate_request(&options).unwrap()
    }

    #[test]
    fn test_single_file_is_valid() {
        let mut builder = FormatOptionsBuilder::new();
        builder.add_file("A.java").in_place(true);
        assert!(issues_for(&builder).is_empty());
    }

    #[test]
    fn test_no_input() {
        let builder = FormatOptionsBuilder::new();
        assert_eq!(issues_for(&builder), vec!["no files were provided"]);
    }

    #[test]
    fn test_help_and_version_skip_checks() {
        let mut builder = FormatOptionsBuilder::new();
        builder.help(true).dry_run(true).in_place(true);
        assert!(issues_for(&builder).is_empty());

        let mut builder = FormatOptionsBuilder::new();
        builder.version(true);
        assert!(issues_for(&builder).is_empty());
    }

    #[test]
    fn test_stdin_with_files() {
        let mut builder = FormatOptionsBuilder::new();
        builder.stdin(true).add_file("A.java");
        assert_eq!(
            issues_for(&builder),
            vec!["cannot format from standard input and files simultaneously"]
        );
    }

    #[test]
    fn test_assume_filename_requires_stdin() {
        let mut builder = FormatOptionsBuilder::new();
        builder.add_file("A.java").assume_filename("Foo.java");
        assert_eq!(issues_for(&builder).len(), 1);

        let mut builder = FormatOptionsBuilder::new();
        builder.stdin(true).assume_filename("Foo.java");
        assert!(issues_for(&builder).is_empty());
    }

    #[test]
    fn test_dry_run_with_in_place() {
        let mut builder = FormatOptionsBuilder::new();
        builder.add_file("A.java").dry_run(true).in_place(true);
        assert_eq!(
            issues_for(&builder),
            vec!["cannot use --dry-run and --in-place at the same time"]
        );
    }

    #[test]
    fn test_in_place_with_stdin() {
        let mut builder = FormatOptionsBuilder::new();
        builder.stdin(true).in_place(true);
        assert_eq!(issues_for(&builder).len(), 1);
    }

    #[test]
    fn test_selection_needs_single_input() {
        let mut builder = FormatOptionsBuilder::new();
        builder.add_files(["A.java", "B.java"]).add_line_range(1, 4);
        assert_eq!(
            issues_for(&builder),
            vec!["partial formatting is only supported for a single file"]
        );
    }

    #[test]
    fn test_fix_imports_only_with_selection() {
        let mut builder = FormatOptionsBuilder::new();
        builder
            .add_file("A.java")
            .fix_imports_only(true)
            .add_offset(0)
            .add_length(3);
        assert_eq!(issues_for(&builder).len(), 1);
    }

    #[test]
    fn test_lines_and_offsets_together_are_allowed() {
        let mut builder = FormatOptionsBuilder::new();
        builder
            .add_file("A.java")
            .add_line_range(1, 4)
            .add_offset(100)
            .add_length(20);
        assert!(issues_for(&builder).is_empty());
    }
}
