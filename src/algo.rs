//! Sorting entry points and the MSD radix engine behind them.
//!
//! The engine is a byte-at-a-time MSD radix sort:
//! - **Counting sort** per byte position, scattering between the caller's slice and a
//!   scratch buffer of the same length (double buffering).
//! - **Explicit task stack** instead of recursion, so neither long keys nor skewed byte
//!   distributions grow the call stack.
//! - **Insertion sort** for tiny inputs and inline compare-and-swap for two-element buckets
//!   in the hybrid variant.
//!
//! The main entry points are [`sort`] and [`sort_stable`]. Every variant is stable.

use crate::buffer::DoubleBuffer;
use crate::bucket::Histogram;
use crate::core::{Element, SortKey};
use crate::error::Result;
use crate::insertion::{INSERTION_SORT_THRESHOLD, PAIR_BUCKET_SIZE, insertion_sort, order_pair};
use crate::stack::{Task, TaskStack};

/// Which engine a sort runs on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Pure MSD radix sort with counting sort at every level.
    Radix8Count,
    /// Radix sort with insertion sort for inputs of at most
    /// [`INSERTION_SORT_THRESHOLD`] elements and inline ordering of
    /// two-element buckets.
    #[default]
    Radix8CountInsertion,
}

/// Sorts `elements` by key with the best known engine.
///
/// Currently the same as [`sort_radix8_count_insertion`]. The engine behind
/// this function may change between releases; its result will not, since every
/// engine is stable.
///
/// # Errors
///
/// Returns [`SortError::AllocationFailed`](crate::SortError::AllocationFailed)
/// if the working buffers could not be allocated. The slice contents are then
/// unspecified and may contain duplicates or lose elements; restore them from
/// a copy.
///
/// # Examples
///
/// ```
/// use nextsort::sort;
///
/// let mut data = vec!["b", "ab", "a", "ba", "aa"];
/// sort(&mut data).unwrap();
///
/// assert_eq!(data, vec!["a", "aa", "ab", "b", "ba"]);
/// ```
pub fn sort<T: SortKey + Copy>(elements: &mut [T]) -> Result<()> {
    sort_radix8_count_insertion(elements)
}

/// Sorts `elements` by key with the best known stable engine.
///
/// Elements with equal keys keep their input order. Currently the same as
/// [`sort_radix8_count_insertion`].
///
/// # Examples
///
/// ```
/// use nextsort::{Element, sort_stable};
///
/// let mut data = [
///     Element::new(b"xx", "P1"),
///     Element::new(b"xx", "P2"),
///     Element::new(b"xa", "P0"),
/// ];
/// sort_stable(&mut data).unwrap();
///
/// let order: Vec<&str> = data.iter().map(|e| e.payload).collect();
/// assert_eq!(order, vec!["P0", "P1", "P2"]);
/// ```
pub fn sort_stable<T: SortKey + Copy>(elements: &mut [T]) -> Result<()> {
    sort_radix8_count_insertion(elements)
}

/// Stable MSD radix sort with one byte per digit and counting sort at every level.
///
/// No small-range specialization: every range of two or more elements that
/// still has bytes to examine is bucketed.
pub fn sort_radix8_count<T: SortKey + Copy>(elements: &mut [T]) -> Result<()> {
    sort_with(elements, Strategy::Radix8Count)
}

/// Stable MSD radix sort with insertion-sort cutovers.
///
/// Inputs of at most [`INSERTION_SORT_THRESHOLD`] elements are insertion
/// sorted directly, without allocating. During the radix passes, a bucket of
/// exactly two elements is ordered with a single comparison instead of being
/// pushed as a new task.
pub fn sort_radix8_count_insertion<T: SortKey + Copy>(elements: &mut [T]) -> Result<()> {
    sort_with(elements, Strategy::Radix8CountInsertion)
}

/// Sorts `elements` with the given engine.
///
/// # Arguments
///
/// * `elements` - The slice to sort in place.
/// * `strategy` - The engine to run.
pub fn sort_with<T: SortKey + Copy>(elements: &mut [T], strategy: Strategy) -> Result<()> {
    if elements.len() < 2 {
        return Ok(());
    }

    log::trace!("sorting {} elements with {strategy:?}", elements.len());

    match strategy {
        Strategy::Radix8Count => radix_sort(elements, false),
        Strategy::Radix8CountInsertion => {
            if elements.len() <= INSERTION_SORT_THRESHOLD {
                insertion_sort(elements);
                Ok(())
            } else {
                radix_sort(elements, true)
            }
        }
    }
}

/// Returns the stable sorting permutation of `keys`.
///
/// This function does not modify the input. The returned vector holds the
/// indices that order the collection: `keys[indices[i]] <= keys[indices[i + 1]]`,
/// with ties in ascending index order.
///
/// # Examples
///
/// ```
/// use nextsort::sort_indices;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = sort_indices(&data).unwrap();
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn sort_indices<K: AsRef<[u8]>>(keys: &[K]) -> Result<Vec<usize>> {
    let mut elements: Vec<Element<'_, usize>> = keys
        .iter()
        .enumerate()
        .map(|(index, key)| Element::new(key.as_ref(), index))
        .collect();

    sort(&mut elements)?;

    Ok(elements.into_iter().map(|e| e.payload).collect())
}

/// Sorts a mutable slice of byte-like values in place.
///
/// This is a convenience wrapper for [`sort_indices`] which computes the
/// sorted indices and then applies the permutation to the slice. Unlike
/// [`sort`], the values need not be `Copy`.
///
/// # Examples
///
/// ```
/// use nextsort::sort_mut;
///
/// let mut data = vec![String::from("banana"), String::from("apple")];
/// sort_mut(&mut data).unwrap();
///
/// assert_eq!(data, vec!["apple", "banana"]);
/// ```
pub fn sort_mut<K: AsRef<[u8]>>(keys: &mut [K]) -> Result<()> {
    let indices = sort_indices(keys)?;
    permute_in_place(keys, indices);
    Ok(())
}

/// Rearranges `data` so that position `i` receives the value at `order[i]`.
///
/// Each cycle of the permutation is walked once: the value that belongs in
/// the current hole is swapped in, and the hole moves to where it came from.
/// Visited positions are marked by making `order` the identity there.
fn permute_in_place<T>(data: &mut [T], mut order: Vec<usize>) {
    for start in 0..data.len() {
        let mut hole = start;
        loop {
            let source = order[hole];
            order[hole] = hole;
            if source == start {
                break;
            }
            data.swap(hole, source);
            hole = source;
        }
    }
}

/// The task loop shared by both engines.
///
/// `resolve_pairs` enables the inline ordering of two-element buckets.
fn radix_sort<T: SortKey + Copy>(elements: &mut [T], resolve_pairs: bool) -> Result<()> {
    let mut current = Task::root(elements.len());
    let mut buffers = DoubleBuffer::new(elements)?;
    let mut stack = TaskStack::new()?;
    let mut histogram = Histogram::new();

    loop {
        histogram.count(&buffers.get(current.location)[current.range()], current.depth);

        if histogram.distinct() == 1 {
            // One shared byte: nothing moves, look one byte further on the same buffer.
            let continues = histogram.buckets().any(|bucket| bucket.deeper);
            if continues {
                current.depth += 1;
                continue;
            }
            // Every key in the range is equal.
            buffers.settle(current.location, current.range());
        } else {
            let destination = current.location.other();
            {
                let range = current.range();
                let (src, dst) = buffers.split(current.location);
                histogram.scatter(&src[range.clone()], &mut dst[range], current.depth);
            }

            let depth = current.depth + 1;
            for bucket in histogram.buckets() {
                let len = bucket.len();
                let range = current.start + bucket.range.start..current.start + bucket.range.end;

                let inline_pair = resolve_pairs && len == PAIR_BUCKET_SIZE;
                if bucket.deeper && len > 1 && !inline_pair {
                    stack.push(Task {
                        start: range.start,
                        end: range.end,
                        depth,
                        location: destination,
                    })?;
                    continue;
                }

                buffers.settle(destination, range.clone());
                if bucket.deeper && inline_pair {
                    order_pair(&mut buffers.primary_mut()[range], depth);
                }
            }
        }

        match stack.pop() {
            Some(task) => current = task,
            None => break,
        }
    }

    Ok(())
}
