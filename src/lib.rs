//! # nextsort
//!
//! `nextsort` is a stable MSD radix sort for variable-length byte keys, built for keys that
//! were encoded ahead of time so that their bytes compare in the desired order
//! ("nextified" keys). It sorts the elements themselves, each element carrying its key and
//! any payload along.
//!
//! ## Key Features
//!
//! - **Counting sort per byte**: every pass examines one byte position, builds a 256-way
//!   histogram and scatters the range into order. Equal bytes keep their relative order,
//!   so the whole sort is stable.
//! - **Double buffering**: passes alternate between the caller's slice and one scratch
//!   buffer, and a range only travels back to the caller's slice once it is final.
//! - **Explicit task stack**: pending ranges live on a growable heap stack instead of the
//!   call stack, so long keys and skewed distributions cannot overflow it.
//! - **Common prefix skipping**: when a whole range shares its next byte nothing is moved;
//!   the engine just looks one byte further.
//! - **Fallible allocation**: scratch space and stack growth use `try_reserve`, and a
//!   failure is reported as [`SortError`] instead of aborting.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Any `Copy` type implementing [`SortKey`] can be sorted in place. References to byte-like
//! values (`&str`, `&[u8]`, `&String`, `&Vec<u8>`) implement it already.
//!
//! ```rust
//! use nextsort::sort;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! sort(&mut data).unwrap();
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ### Payloads
//!
//! [`Element`] pairs a key with a payload. Elements with equal keys keep their input order.
//!
//! ```rust
//! use nextsort::{Element, sort_stable};
//!
//! let mut rows = vec![
//!     Element::new(b"xx", 1),
//!     Element::new(b"xx", 2),
//!     Element::new(b"xa", 3),
//! ];
//! sort_stable(&mut rows).unwrap();
//!
//! let payloads: Vec<i32> = rows.iter().map(|e| e.payload).collect();
//! assert_eq!(payloads, vec![3, 1, 2]);
//! ```
//!
//! ### Engines
//!
//! [`sort_radix8_count`] runs the pure radix engine; [`sort_radix8_count_insertion`] adds
//! insertion sort for inputs of at most five elements and resolves two-element buckets with
//! one comparison. [`sort`] and [`sort_stable`] pick the best known engine, currently the
//! hybrid one. [`sort_with`] selects an engine from a [`Strategy`] value.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(total examined key bytes + 256 × passes). Bytes past the point where a key
//!   becomes distinguishable are never read.
//! - **Memory Overhead**: one scratch copy of the slice plus a task stack that starts at
//!   eight entries and doubles when full.

pub mod algo;
mod bucket;
mod buffer;
pub mod core;
pub mod error;
mod insertion;
mod stack;

pub use algo::{
    Strategy, sort, sort_indices, sort_mut, sort_radix8_count, sort_radix8_count_insertion,
    sort_stable, sort_with,
};
pub use bucket::RADIX_BUCKETS;
pub use crate::core::{Element, SortKey};
pub use crate::error::{AllocationSite, Result, STATUS_ALLOCATION_FAILED, STATUS_OK, SortError};
pub use insertion::{INSERTION_SORT_THRESHOLD, PAIR_BUCKET_SIZE};
pub use stack::INITIAL_TASK_CAPACITY;

pub mod prelude {
    pub use crate::algo::{
        Strategy, sort, sort_indices, sort_mut, sort_radix8_count, sort_radix8_count_insertion,
        sort_stable, sort_with,
    };
    pub use crate::core::{Element, SortKey};
    pub use crate::error::SortError;
}
