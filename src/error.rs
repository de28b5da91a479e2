//! Error types for the `nextsort` crate.

use std::fmt;

/// Status code reported for a successful sort.
pub const STATUS_OK: i32 = 0;

/// Status code reported when a working buffer could not be allocated.
pub const STATUS_ALLOCATION_FAILED: i32 = 1;

/// Where in the engine an allocation was attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocationSite {
    /// The scratch buffer mirroring the caller's slice.
    Scratch,
    /// The initial backing storage of the task stack.
    TaskStack,
    /// Doubling the task stack once it is full.
    TaskStackGrowth,
}

impl fmt::Display for AllocationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AllocationSite::Scratch => "scratch buffer",
            AllocationSite::TaskStack => "task stack",
            AllocationSite::TaskStackGrowth => "task stack growth",
        })
    }
}

/// Errors returned by the sorting entry points.
///
/// Allocation failure is the only way a sort can fail. When it happens the
/// contents of the caller's slice are unspecified: each slot holds a valid
/// value, but ranges may already have been overwritten from scratch, so some
/// elements can appear twice and others be missing. Restore from a copy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// A working buffer could not be allocated or grown.
    #[error("could not allocate memory for the {site}")]
    AllocationFailed {
        /// The allocation that failed.
        site: AllocationSite,
    },
}

impl SortError {
    pub(crate) fn allocation(site: AllocationSite) -> Self {
        log::debug!("allocation failed: {site}");
        SortError::AllocationFailed { site }
    }

    /// Numeric status matching [`STATUS_ALLOCATION_FAILED`].
    pub fn code(&self) -> i32 {
        match self {
            SortError::AllocationFailed { .. } => STATUS_ALLOCATION_FAILED,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SortError>;
