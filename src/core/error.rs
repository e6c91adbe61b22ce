use thiserror::Error;

/// Failures detected while assembling a `FormatOptions` snapshot.
///
/// Every variant describes malformed caller input. None of them are
/// transient, so nothing in the crate retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A half-open range whose end does not lie past its start. Zero-length
    /// offset/length regions are reported through this variant too.
    #[error("invalid range [{start}, {end}): end must be greater than start")]
    InvalidRange { start: usize, end: usize },

    /// Offsets and lengths are paired by index, so their counts must agree.
    #[error("offsets and lengths must be provided in matching pairs ({offsets} offsets, {lengths} lengths)")]
    MismatchedPairing { offsets: usize, lengths: usize },

    /// The maximum line width must be positive.
    #[error("invalid line width {0}: must be greater than zero")]
    InvalidWidth(usize),
}
