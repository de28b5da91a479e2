//! Ping-pong storage for the radix engine.
//!
//! The caller's slice (primary) and an engine-owned copy of equal length
//! (scratch) take turns as source and destination of the counting-sort
//! scatter. Every task records which of the two holds its valid data.

use crate::error::{AllocationSite, Result, SortError};
use std::ops::Range;

/// Which buffer currently holds the valid copy of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Location {
    Primary,
    Scratch,
}

impl Location {
    /// The buffer a scatter out of `self` writes into.
    #[inline(always)]
    pub(crate) fn other(self) -> Self {
        match self {
            Location::Primary => Location::Scratch,
            Location::Scratch => Location::Primary,
        }
    }
}

pub(crate) struct DoubleBuffer<'a, T> {
    primary: &'a mut [T],
    scratch: Vec<T>,
}

impl<'a, T: Copy> DoubleBuffer<'a, T> {
    /// Allocates the scratch buffer for `primary`.
    ///
    /// Scratch starts as a copy of primary so that every slot holds a valid
    /// value without `unsafe` uninitialised storage. This costs one extra
    /// pass over the input per call in exchange for a fully safe buffer; its
    /// contents are only meaningful inside ranges a task has scattered into it.
    pub(crate) fn new(primary: &'a mut [T]) -> Result<Self> {
        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(primary.len())
            .map_err(|_| SortError::allocation(AllocationSite::Scratch))?;
        scratch.extend_from_slice(primary);
        Ok(Self { primary, scratch })
    }

    #[inline(always)]
    pub(crate) fn get(&self, location: Location) -> &[T] {
        match location {
            Location::Primary => &*self.primary,
            Location::Scratch => &self.scratch,
        }
    }

    #[inline(always)]
    pub(crate) fn primary_mut(&mut self) -> &mut [T] {
        &mut *self.primary
    }

    /// Splits into `(source, destination)` for a scatter out of `from`.
    #[inline(always)]
    pub(crate) fn split(&mut self, from: Location) -> (&[T], &mut [T]) {
        match from {
            Location::Primary => (&*self.primary, &mut self.scratch[..]),
            Location::Scratch => (&self.scratch[..], &mut *self.primary),
        }
    }

    /// Makes `range` final in primary, copying it up from scratch if that is
    /// where it currently lives.
    #[inline(always)]
    pub(crate) fn settle(&mut self, location: Location, range: Range<usize>) {
        if location == Location::Scratch {
            self.primary[range.clone()].copy_from_slice(&self.scratch[range]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_mirrors_primary() {
        let mut data = [3u8, 1, 2];
        let buffers = DoubleBuffer::new(&mut data).unwrap();
        assert_eq!(buffers.get(Location::Scratch), &[3, 1, 2]);
        assert_eq!(buffers.get(Location::Primary), &[3, 1, 2]);
    }

    #[test]
    fn settle_copies_only_from_scratch() {
        let mut data = [0u8; 4];
        let mut buffers = DoubleBuffer::new(&mut data).unwrap();
        {
            let (_, dst) = buffers.split(Location::Primary);
            dst.copy_from_slice(&[9, 8, 7, 6]);
        }
        buffers.settle(Location::Primary, 0..4);
        assert_eq!(buffers.get(Location::Primary), &[0, 0, 0, 0]);

        buffers.settle(Location::Scratch, 1..3);
        assert_eq!(buffers.get(Location::Primary), &[0, 8, 7, 0]);
    }

    #[test]
    fn locations_alternate() {
        assert_eq!(Location::Primary.other(), Location::Scratch);
        assert_eq!(Location::Scratch.other().other(), Location::Scratch);
    }
}
