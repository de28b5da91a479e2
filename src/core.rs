//! Core traits and types for nextsort.
//!
//! This module defines:
//! - [`SortKey`]: The trait every sortable element implements to expose its key bytes.
//! - [`Element`]: A key slice paired with a caller-defined payload.
//! - Key comparison helpers shared by the radix engine and the insertion-sort fallback.

use std::cmp::Ordering;

/// A value that can be ordered by the bytes of its key.
///
/// The key is expected to be already encoded ("nextified") so that plain
/// byte-wise lexicographic order is the order the caller wants. A key that
/// is a proper prefix of another sorts first.
///
/// The engines move elements between the caller's slice and an internal
/// scratch buffer by copy, so sortable types are also `Copy`. Large values
/// should be carried behind a reference or an index in the payload.
///
/// # Examples
///
/// ```
/// use nextsort::SortKey;
///
/// #[derive(Clone, Copy)]
/// struct Row<'a> {
///     name: &'a str,
///     id: u32,
/// }
///
/// impl SortKey for Row<'_> {
///     fn key(&self) -> &[u8] {
///         self.name.as_bytes()
///     }
/// }
///
/// let mut rows = [Row { name: "b", id: 0 }, Row { name: "a", id: 1 }];
/// nextsort::sort(&mut rows).unwrap();
/// assert_eq!(rows[0].id, 1);
/// ```
pub trait SortKey {
    /// Returns the key bytes. The slice length is the key length.
    fn key(&self) -> &[u8];

    /// Returns the key length in bytes.
    #[inline(always)]
    fn key_len(&self) -> usize {
        self.key().len()
    }

    /// Returns the key byte at `depth`, or `None` when the key is exhausted.
    #[inline(always)]
    fn byte_at(&self, depth: usize) -> Option<u8> {
        self.key().get(depth).copied()
    }
}

// Blanket implementation for references to byte-like values
// (`&[u8]`, `&str`, `&Vec<u8>`, `&String`, ...).
impl<K: AsRef<[u8]> + ?Sized> SortKey for &K {
    #[inline(always)]
    fn key(&self) -> &[u8] {
        (**self).as_ref()
    }
}

/// A key slice with a payload that travels with it through every move.
///
/// ```
/// use nextsort::Element;
///
/// let mut items = [Element::new(b"xx", 1), Element::new(b"xx", 2), Element::new(b"xa", 3)];
/// nextsort::sort_stable(&mut items).unwrap();
///
/// let payloads: Vec<u32> = items.iter().map(|e| e.payload).collect();
/// assert_eq!(payloads, vec![3, 1, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Element<'a, P = ()> {
    /// The encoded key bytes.
    pub key: &'a [u8],
    /// Caller data moved along with the key.
    pub payload: P,
}

impl<'a, P> Element<'a, P> {
    /// Pairs `key` with `payload`.
    pub fn new(key: &'a [u8], payload: P) -> Self {
        Self { key, payload }
    }
}

impl<'a> Element<'a, ()> {
    /// An element that carries no payload.
    pub fn bare(key: &'a [u8]) -> Self {
        Self { key, payload: () }
    }
}

impl<P> SortKey for Element<'_, P> {
    #[inline(always)]
    fn key(&self) -> &[u8] {
        self.key
    }
}

/// Compares two keys starting at byte `from`.
///
/// Bytes before `from` are assumed equal and skipped. A key that ends before
/// `from` compares as empty. When one remaining suffix is a prefix of the
/// other, the shorter one sorts first.
#[inline(always)]
pub(crate) fn compare_from<T: SortKey + ?Sized>(a: &T, b: &T, from: usize) -> Ordering {
    let a = a.key().get(from..).unwrap_or(&[]);
    let b = b.key().get(from..).unwrap_or(&[]);
    a.cmp(b)
}

/// `true` when `a` sorts strictly before `b`, comparing from byte `from`.
#[inline(always)]
pub(crate) fn less_from<T: SortKey + ?Sized>(a: &T, b: &T, from: usize) -> bool {
    compare_from(a, b, from) == Ordering::Less
}
