use tracing::debug;

use crate::core::error::OptionsError;
use crate::core::options::FormatOptions;
use crate::core::ranges::RangeSet;

/// Line width used when none is requested.
pub const DEFAULT_MAX_WIDTH: usize = 100;

/// Accumulates a formatting request while the command line is parsed.
///
/// Appenders (`add_*`) may be called any number of times; scalar setters
/// overwrite the previous value. Nothing is rejected here: `build` checks the
/// accumulated input and reports the first problem it finds.
#[derive(Debug, Clone)]
pub struct FormatOptionsBuilder {
    files: Vec<String>,
    lines: RangeSet,
    invalid_line_range: Option<OptionsError>,
    offsets: Vec<usize>,
    lengths: Vec<usize>,
    in_place: bool,
    aosp: bool,
    max_width: usize,
    version: bool,
    help: bool,
    stdin: bool,
    fix_imports_only: bool,
    sort_imports: bool,
    remove_unused_imports: bool,
    dry_run: bool,
    set_exit_if_changed: bool,
    assume_filename: Option<String>,
    reflow_long_strings: bool,
    format_javadoc: bool,
}

impl Default for FormatOptionsBuilder {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            lines: RangeSet::new(),
            invalid_line_range: None,
            offsets: Vec::new(),
            lengths: Vec::new(),
            in_place: false,
            aosp: false,
            max_width: DEFAULT_MAX_WIDTH,
            version: false,
            help: false,
            stdin: false,
            fix_imports_only: false,
            sort_imports: true,
            remove_unused_imports: true,
            dry_run: false,
            set_exit_if_changed: false,
            assume_filename: None,
            reflow_long_strings: true,
            format_javadoc: true,
        }
    }
}

impl FormatOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: impl Into<String>) -> &mut Self {
        self.files.push(file.into());
        self
    }

    pub fn add_files<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Adds the half-open line range `[start, end)`.
    ///
    /// An empty or inverted range is remembered and reported by `build`.
    pub fn add_line_range(&mut self, start: usize, end: usize) -> &mut Self {
        if let Err(err) = self.lines.add(start, end) {
            debug!(start, end, "rejected line range");
            self.invalid_line_range.get_or_insert(err);
        }
        self
    }

    pub fn add_offset(&mut self, offset: usize) -> &mut Self {
        self.offsets.push(offset);
        self
    }

    pub fn add_length(&mut self, length: usize) -> &mut Self {
        self.lengths.push(length);
        self
    }

    pub fn in_place(&mut self, in_place: bool) -> &mut Self {
        self.in_place = in_place;
        self
    }

    pub fn aosp(&mut self, aosp: bool) -> &mut Self {
        self.aosp = aosp;
        self
    }

    pub fn max_width(&mut self, max_width: usize) -> &mut Self {
        self.max_width = max_width;
        self
    }

    pub fn version(&mut self, version: bool) -> &mut Self {
        self.version = version;
        self
    }

    pub fn help(&mut self, help: bool) -> &mut Self {
        self.help = help;
        self
    }

    pub fn stdin(&mut self, stdin: bool) -> &mut Self {
        self.stdin = stdin;
        self
    }

    pub fn fix_imports_only(&mut self, fix_imports_only: bool) -> &mut Self {
        self.fix_imports_only = fix_imports_only;
        self
    }

    pub fn sort_imports(&mut self, sort_imports: bool) -> &mut Self {
        self.sort_imports = sort_imports;
        self
    }

    pub fn remove_unused_imports(&mut self, remove_unused_imports: bool) -> &mut Self {
        self.remove_unused_imports = remove_unused_imports;
        self
    }

    pub fn dry_run(&mut self, dry_run: bool) -> &mut Self {
        self.dry_run = dry_run;
        self
    }

    pub fn set_exit_if_changed(&mut self, set_exit_if_changed: bool) -> &mut Self {
        self.set_exit_if_changed = set_exit_if_changed;
        self
    }

    pub fn assume_filename(&mut self, assume_filename: impl Into<String>) -> &mut Self {
        self.assume_filename = Some(assume_filename.into());
        self
    }

    pub fn reflow_long_strings(&mut self, reflow_long_strings: bool) -> &mut Self {
        self.reflow_long_strings = reflow_long_strings;
        self
    }

    pub fn format_javadoc(&mut self, format_javadoc: bool) -> &mut Self {
        self.format_javadoc = format_javadoc;
        self
    }

    /// Validates the accumulated input and freezes it into a `FormatOptions`.
    ///
    /// The builder is left untouched, so calling `build` again yields an
    /// independent snapshot of the same state.
    ///
    /// # Errors
    /// * `OptionsError::InvalidRange` for an empty or inverted line range, or
    ///   for a zero-length offset/length region.
    /// * `OptionsError::MismatchedPairing` when the offset and length counts
    ///   differ.
    /// * `OptionsError::InvalidWidth` when the width is zero.
    pub fn build(&self) -> Result<FormatOptions, OptionsError> {
        if let Some(err) = &self.invalid_line_range {
            return Err(err.clone());
        }
        if self.offsets.len() != self.lengths.len() {
            return Err(OptionsError::MismatchedPairing {
                offsets: self.offsets.len(),
                lengths: self.lengths.len(),
            });
        }
        if let Some((&offset, _)) = self
            .offsets
            .iter()
            .zip(&self.lengths)
            .find(|&(_, &length)| length == 0)
        {
            return Err(OptionsError::InvalidRange {
                start: offset,
                end: offset,
            });
        }
        if self.max_width == 0 {
            return Err(OptionsError::InvalidWidth(self.max_width));
        }

        let options = FormatOptions {
            files: self.files.clone(),
            in_place: self.in_place,
            lines: self.lines.freeze(),
            offsets: self.offsets.clone(),
            lengths: self.lengths.clone(),
            aosp: self.aosp,
            max_width: self.max_width,
            version: self.version,
            help: self.help,
            stdin: self.stdin,
            fix_imports_only: self.fix_imports_only,
            sort_imports: self.sort_imports,
            remove_unused_imports: self.remove_unused_imports,
            dry_run: self.dry_run,
            set_exit_if_changed: self.set_exit_if_changed,
            assume_filename: self.assume_filename.clone(),
            reflow_long_strings: self.reflow_long_strings,
            format_javadoc: self.format_javadoc,
        };
        debug!(
            files = options.files.len(),
            lines = %options.lines,
            regions = options.offsets.len(),
            max_width = options.max_width,
            "built formatting request"
        );
        Ok(options)
    }
}
