use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::core::error::OptionsError;

/// A mutable set of `usize` points stored as half-open ranges.
///
/// The stored ranges are always canonical: sorted by start, pairwise
/// disjoint and never touching. `[1, 5)` and `[5, 8)` are kept as `[1, 8)`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range<usize>>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Inserts `[start, end)`, merging it with every stored range it overlaps
    /// or touches.
    ///
    /// # Errors
    /// Returns `OptionsError::InvalidRange` when `end <= start`. The set is
    /// left unchanged in that case.
    pub fn add(&mut self, start: usize, end: usize) -> Result<(), OptionsError> {
        if end <= start {
            return Err(OptionsError::InvalidRange { start, end });
        }

        // First stored range that ends at or after `start` can merge with us,
        // and so can every range that starts at or before `end`.
        let lo = self.ranges.partition_point(|r| r.end < start);
        let hi = self.ranges.partition_point(|r| r.start <= end);

        let mut merged = start..end;
        if lo < hi {
            merged.start = merged.start.min(self.ranges[lo].start);
            merged.end = merged.end.max(self.ranges[hi - 1].end);
        }
        self.ranges.splice(lo..hi, std::iter::once(merged));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of canonical ranges, not the number of points.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn contains(&self, point: usize) -> bool {
        contains_point(&self.ranges, point)
    }

    pub fn iter(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.ranges.iter().cloned()
    }

    /// Captures the current contents as an immutable snapshot. Later inserts
    /// into `self` do not affect the returned value.
    pub fn freeze(&self) -> FrozenRangeSet {
        FrozenRangeSet {
            ranges: Arc::from(self.ranges.as_slice()),
        }
    }
}

/// An immutable, canonical range set.
///
/// Equality and hashing look at the canonical range list only, so two
/// snapshots built from the same points in a different insertion order
/// compare equal. Cloning is cheap and the value can be shared between
/// threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrozenRangeSet {
    ranges: Arc<[Range<usize>]>,
}

impl FrozenRangeSet {
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.ranges.iter().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn contains(&self, point: usize) -> bool {
        contains_point(&self.ranges, point)
    }

    /// The smallest single range covering every point in the set.
    pub fn span(&self) -> Option<Range<usize>> {
        let first = self.ranges.first()?;
        let last = self.ranges.last()?;
        Some(first.start..last.end)
    }
}

impl Default for FrozenRangeSet {
    fn default() -> Self {
        RangeSet::new().freeze()
    }
}

impl FromIterator<Range<usize>> for FrozenRangeSet {
    /// Empty or inverted ranges carry no points and are skipped.
    fn from_iter<I: IntoIterator<Item = Range<usize>>>(iter: I) -> Self {
        let mut set = RangeSet::new();
        for range in iter {
            // `add` only fails for ranges without points.
            let _ = set.add(range.start, range.end);
        }
        set.freeze()
    }
}

impl fmt::Display for FrozenRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}..{}", range.start, range.end)?;
        }
        Ok(())
    }
}

/// Serialized as a list of `[start, end]` pairs.
impl Serialize for FrozenRangeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.ranges.len()))?;
        for range in self.ranges.iter() {
            seq.serialize_element(&[range.start, range.end])?;
        }
        seq.end()
    }
}

fn contains_point(ranges: &[Range<usize>], point: usize) -> bool {
    let idx = ranges.partition_point(|r| r.end <= point);
    ranges.get(idx).is_some_and(|r| r.start <= point)
}
