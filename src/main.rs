//! jformat-options reads the command line of a Java source formatter and
//! resolves it into a single formatting request: which files, which lines or
//! character regions, which style, and what to do with the output.
//! The resolved request is printed (or exported) instead of being formatted,
//! which makes the tool useful for checking how flags combine.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jformat_options::builders::reporter::ReportFormat;
use jformat_options::builders::selection;
use jformat_options::core::builder::FormatOptionsBuilder;
use jformat_options::utils;

/// The argument that stands for standard input.
const STDIN_FILENAME: &str = "-";

#[derive(Parser)]
#[command(name = "jformat-options")]
#[command(about = "Resolve Java formatter flags into a formatting request")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Files to format; `-` reads standard input
    files: Vec<String>,

    /// Send formatted output back to files, not stdout
    #[arg(short = 'i', long = "replace", visible_short_alias = 'r', visible_alias = "in-place")]
    in_place: bool,

    /// Line range(s) to format, like 5:10 (1-based; default is all code)
    #[arg(long = "lines", visible_alias = "line", value_name = "N:M")]
    lines: Vec<String>,

    /// Character offset to format (0-based; default is all code)
    #[arg(long = "offset", value_name = "OFFSET")]
    offsets: Vec<usize>,

    /// Character length to format
    #[arg(long = "length", value_name = "LENGTH")]
    lengths: Vec<usize>,

    /// Use AOSP style instead of Google Style (4-space indentation)
    #[arg(short = 'a', long = "aosp")]
    aosp: bool,

    /// Maximal line length
    #[arg(long = "line-length", value_name = "WIDTH")]
    line_length: Option<usize>,

    /// Fix import order and remove any unused imports, but do no other formatting
    #[arg(long = "fix-imports-only")]
    fix_imports_only: bool,

    /// Do not fix the import order
    #[arg(long = "skip-sorting-imports")]
    skip_sorting_imports: bool,

    /// Do not remove unused imports
    #[arg(long = "skip-removing-unused-imports")]
    skip_removing_unused_imports: bool,

    /// Do not reflow string literals that exceed the column limit
    #[arg(long = "skip-reflowing-long-strings")]
    skip_reflowing_long_strings: bool,

    /// Do not reformat javadoc
    #[arg(long = "skip-javadoc-formatting")]
    skip_javadoc_formatting: bool,

    /// Print the paths of the files whose contents would change
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Return exit code 1 if there are any formatting changes
    #[arg(long = "set-exit-if-changed")]
    set_exit_if_changed: bool,

    /// File name to use for diagnostics when formatting standard input
    #[arg(long = "assume-filename", value_name = "NAME")]
    assume_filename: Option<String>,

    /// Print the version
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Print this usage statement
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// How to print the resolved request
    #[arg(long = "output-format", value_enum, default_value_t = ReportFormat::Console)]
    output_format: ReportFormat,

    /// Write the resolved request to this file instead of stdout
    #[arg(long = "export", value_name = "PATH")]
    export: Option<PathBuf>,
}

impl Cli {
    /// Translates the parsed flags into builder calls.
    fn to_builder(&self) -> Result<FormatOptionsBuilder> {
        let mut builder = FormatOptionsBuilder::new();

        for file in &self.files {
            if file == STDIN_FILENAME {
                builder.stdin(true);
            } else {
                builder.add_file(file.as_str());
            }
        }
        selection::apply_lines(&mut builder, self.lines.as_slice())?;
        for &offset in &self.offsets {
            builder.add_offset(offset);
        }
        for &length in &self.lengths {
            builder.add_length(length);
        }
        if let Some(width) = self.line_length {
            builder.max_width(width);
        }
        if let Some(name) = &self.assume_filename {
            builder.assume_filename(name.as_str());
        }

        builder
            .in_place(self.in_place)
            .aosp(self.aosp)
            .fix_imports_only(self.fix_imports_only)
            .sort_imports(!self.skip_sorting_imports)
            .remove_unused_imports(!self.skip_removing_unused_imports)
            .reflow_long_strings(!self.skip_reflowing_long_strings)
            .format_javadoc(!self.skip_javadoc_formatting)
            .dry_run(self.dry_run)
            .set_exit_if_changed(self.set_exit_if_changed)
            .version(self.version)
            .help(self.help);
        Ok(builder)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let builder = cli.to_builder()?;
    let options = utils::resolve_request(&builder)?;

    if options.help() {
        println!("{}", Cli::command().render_help());
        return Ok(());
    }

    let output = utils::describe_request(&options, cli.output_format, cli.export.as_deref())?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
