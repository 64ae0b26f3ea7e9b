//! In-place unstable sorting of contiguous fixed-width byte records.
//!
//! A safe counterpart to C's `qsort_r`: the buffer is a `&mut [u8]` holding
//! `v.len() / width` records of `width` bytes each, and the comparator decides
//! the order without the sort ever interpreting record contents itself.

#![no_std]

use core::cmp::Ordering;

mod chunks;
mod quicksort;
mod smallsort;

/// Sorts the records of `v` by their natural byte-lexicographic order, but
/// might not preserve the order of equal records.
///
/// This sort is unstable (i.e., may reorder equal records), in-place
/// (i.e., does not allocate), and sorts the `v.len() / width` complete
/// records of `v`; trailing bytes that do not form a whole record are left
/// untouched. A `width` of zero is a no-op.
///
/// # Examples
///
/// ```
/// let mut v = *b"ccbbaa";
///
/// rawsort::sort(&mut v, 2);
/// assert_eq!(&v, b"aabbcc");
/// ```
#[inline]
pub fn sort(v: &mut [u8], width: usize) {
    sort_by(v, width, |a, b| a.cmp(b));
}

/// Sorts the records of `v` with a comparator function, but might not
/// preserve the order of equal records.
///
/// This sort is unstable (i.e., may reorder equal records), in-place
/// (i.e., does not allocate), and sorts the `v.len() / width` complete
/// records of `v`; trailing bytes that do not form a whole record are left
/// untouched. A `width` of zero is a no-op.
///
/// The comparator receives two `width`-byte record views into `v` and must
/// define a total ordering for the records that actually appear. If the
/// ordering is not total, the order of the records is unspecified, but the
/// multiset of record contents is preserved: the only mutation the sort ever
/// performs is swapping two records.
///
/// # Current implementation
///
/// A recursive quicksort with median-of-three pivot selection and three-way
/// (Dutch national flag) partitioning, falling back to insertion sort for
/// small ranges. The equal-to-pivot zone is excluded from recursion, so
/// inputs with many duplicate keys degrade toward linear rather than
/// quadratic behavior.
///
/// # Examples
///
/// ```
/// let mut v: Vec<u8> = [5i32, 4, 1, 3, 2]
///     .iter()
///     .flat_map(|val| val.to_ne_bytes())
///     .collect();
///
/// rawsort::sort_by(&mut v, 4, |a, b| {
///     let a = i32::from_ne_bytes(a.try_into().unwrap());
///     let b = i32::from_ne_bytes(b.try_into().unwrap());
///     a.cmp(&b)
/// });
///
/// let sorted: Vec<i32> = v
///     .chunks_exact(4)
///     .map(|c| i32::from_ne_bytes(c.try_into().unwrap()))
///     .collect();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn sort_by<F>(v: &mut [u8], width: usize, mut compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    // Sorting has no meaningful behavior on zero-width records.
    if width == 0 {
        return;
    }

    let len = v.len() / width;
    if len < 2 {
        return;
    }

    quicksort::quicksort(&mut v[..len * width], width, &mut compare);
}

/// Sorts the records of `v` with a comparator function that additionally
/// receives a caller-supplied context value on every invocation.
///
/// Behaves exactly like [`sort_by`]; the context enables comparators that
/// need external state, e.g. multi-key sorts or locale rules, without global
/// variables.
///
/// # Examples
///
/// ```
/// // Sort by absolute distance from a context-supplied reference value.
/// let mut v = [9u8, 2, 7, 4];
/// let mut reference = 5i16;
///
/// rawsort::sort_by_with(&mut v, 1, &mut reference, |a, b, reference| {
///     let dist_a = (a[0] as i16 - *reference).abs();
///     let dist_b = (b[0] as i16 - *reference).abs();
///     dist_a.cmp(&dist_b)
/// });
///
/// assert_eq!(v, [4, 7, 2, 9]);
/// ```
#[inline]
pub fn sort_by_with<C, F>(v: &mut [u8], width: usize, context: &mut C, mut compare: F)
where
    F: FnMut(&[u8], &[u8], &mut C) -> Ordering,
{
    sort_by(v, width, |a, b| compare(a, b, context));
}
