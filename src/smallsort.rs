//! Insertion sort for ranges below the quicksort threshold, where its low
//! constant overhead beats the partitioning machinery.

use core::cmp::Ordering;

use crate::chunks::swap_records_if_greater;

/// Sorts the records of `v` by walking each record leftward with guarded
/// swaps until it meets the range start or a record that is not greater.
/// `v.len()` must be a multiple of `width`.
pub(crate) fn insertion_sort<F>(v: &mut [u8], width: usize, compare: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let len = v.len() / width;

    for i in 1..len {
        let mut j = i;
        while j > 0 && swap_records_if_greater(v, width, j - 1, j, compare) {
            j -= 1;
        }
    }
}
