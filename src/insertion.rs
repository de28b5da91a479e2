//! Comparison-based fallback for tiny inputs and two-element buckets.

use crate::core::{SortKey, less_from};

/// Inputs of at most this many elements skip the radix engine entirely.
pub const INSERTION_SORT_THRESHOLD: usize = 5;

/// Buckets of exactly this size are ordered inline instead of becoming tasks.
pub const PAIR_BUCKET_SIZE: usize = 2;

/// Stable insertion sort over full keys.
///
/// The smallest of the first [`INSERTION_SORT_THRESHOLD`] elements is moved
/// to the front first, which shortens the inner loop for the inputs this is
/// used on. The move is a rotation rather than a swap, which keeps equal
/// keys in input order.
pub(crate) fn insertion_sort<T: SortKey + Copy>(v: &mut [T]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let window = len.min(INSERTION_SORT_THRESHOLD);
    let mut min = 0;
    for i in 1..window {
        if less_from(&v[i], &v[min], 0) {
            min = i;
        }
    }
    v[..=min].rotate_right(1);

    for i in 2..len {
        let mut j = i;
        while j > 0 && less_from(&v[i], &v[j - 1], 0) {
            j -= 1;
        }
        if j != i {
            v[j..=i].rotate_right(1);
        }
    }
}

/// Orders a two-element bucket whose keys agree on every byte before `from`.
///
/// Swaps only when the second key is strictly smaller.
#[inline(always)]
pub(crate) fn order_pair<T: SortKey>(pair: &mut [T], from: usize) {
    debug_assert_eq!(pair.len(), PAIR_BUCKET_SIZE);
    if less_from(&pair[1], &pair[0], from) {
        pair.swap(0, 1);
    }
}
