// This file is the module declaration file for the `core` module.
// It holds the formatting-request model itself; everything that turns
// command-line text into that model lives in `builders`.

// `ranges` module:
// The interval set used for `--lines`. `RangeSet` is the mutable form that
// coalesces overlapping and adjacent ranges on insert; `FrozenRangeSet` is
// the immutable snapshot stored in the finished request.
pub mod ranges;

// `options` module:
// `FormatOptions`, the immutable request consumed by the formatter, and the
// `Style` it selects.
pub mod options;

// `builder` module:
// `FormatOptionsBuilder`, the accumulator filled in while arguments are
// parsed. Its `build` step validates and freezes the request.
pub mod builder;

// `error` module:
// `OptionsError`, the construction failures `build` can report.
pub mod error;

pub mod version;
