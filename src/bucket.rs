//! Counting pass and stable scatter for one byte position.
//!
//! The histogram has one slot per byte value plus a leading slot for keys
//! that end before the byte being examined. Exhausted keys sort before any
//! key that continues, so that slot comes first.

use crate::core::SortKey;
use cuneiform::cuneiform;
use std::ops::Range;

/// Number of buckets for one radix digit (one per byte value).
pub const RADIX_BUCKETS: usize = 256;

/// Byte buckets plus the exhausted-key slot.
const SLOTS: usize = RADIX_BUCKETS + 1;

/// Slot of keys whose length is at most the current depth.
const EXHAUSTED: usize = 0;

#[inline(always)]
fn slot_of<T: SortKey>(item: &T, depth: usize) -> usize {
    match item.byte_at(depth) {
        Some(byte) => byte as usize + 1,
        None => EXHAUSTED,
    }
}

/// An occupied slot after a counting pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Bucket {
    /// Position of the bucket relative to the start of the counted range.
    pub range: Range<usize>,
    /// Some member has bytes past `depth + 1`, so the bucket may still need ordering.
    pub deeper: bool,
}

impl Bucket {
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.range.len()
    }
}

// Cache-aligned so the hot counting loop stays within its own lines.
#[cuneiform]
pub(crate) struct Histogram {
    counts: [usize; SLOTS],
    offsets: [usize; SLOTS],
    deeper: [bool; SLOTS],
    distinct: usize,
}

impl Histogram {
    pub(crate) fn new() -> Self {
        Self {
            counts: [0; SLOTS],
            offsets: [0; SLOTS],
            deeper: [false; SLOTS],
            distinct: 0,
        }
    }

    /// Counts the byte at `depth` over `items` and derives the bucket offsets.
    pub(crate) fn count<T: SortKey>(&mut self, items: &[T], depth: usize) {
        self.counts.fill(0);
        self.deeper.fill(false);

        items.iter().for_each(|item| {
            let slot = slot_of(item, depth);
            self.counts[slot] += 1;
            self.deeper[slot] |= item.key_len() > depth + 1;
        });

        let mut sum = 0;
        let mut distinct = 0;
        self.offsets
            .iter_mut()
            .zip(self.counts.iter())
            .for_each(|(offset, &count)| {
                *offset = sum;
                sum += count;
                distinct += usize::from(count > 0);
            });
        self.distinct = distinct;
    }

    /// Number of occupied slots in the last pass.
    #[inline(always)]
    pub(crate) fn distinct(&self) -> usize {
        self.distinct
    }

    /// The occupied slots, in key order.
    pub(crate) fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        (0..SLOTS).filter(|&slot| self.counts[slot] > 0).map(|slot| {
            let start = self.offsets[slot];
            Bucket {
                range: start..start + self.counts[slot],
                deeper: self.deeper[slot],
            }
        })
    }

    /// Stable counting-sort scatter of `src` into `dst` by the byte at `depth`.
    ///
    /// `src` must be the slice the histogram was last counted over, and `dst`
    /// a slice of the same length.
    pub(crate) fn scatter<T: SortKey + Copy>(&self, src: &[T], dst: &mut [T], depth: usize) {
        debug_assert_eq!(src.len(), dst.len());
        let mut next = self.offsets;
        src.iter().for_each(|item| {
            let slot = slot_of(item, depth);
            dst[next[slot]] = *item;
            next[slot] += 1;
        });
    }
}
