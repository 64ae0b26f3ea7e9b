//! Recursive three-way quicksort over fixed-width records.

use core::cmp::Ordering;

use crate::chunks::{
    compare_records, swap_adjacent_blocks, swap_records, swap_records_if_greater,
};
use crate::smallsort::insertion_sort;

/// Empirically chosen crossover below which insertion sort beats the
/// partitioning overhead.
const INSERTION_SORT_THRESHOLD: usize = 10;

/// Sorts the records of `v` recursively. `v.len()` must be a multiple of
/// `width`.
///
/// Performs no allocation and no failure handling of its own: if `compare`
/// does not implement a total order the resulting order is unspecified, but
/// every mutation is a record swap, so the multiset of record contents is
/// preserved regardless.
pub(crate) fn quicksort<F>(v: &mut [u8], width: usize, compare: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let len = v.len() / width;

    if len < INSERTION_SORT_THRESHOLD {
        insertion_sort(v, width, compare);
        return;
    }

    let last = len - 1;
    let mid = len / 2;

    // Median of the second, middle and second-to-last records. The first and
    // last records may be extreme values parked there by a parent partition,
    // which makes them poor candidates. Up to three guarded swaps order the
    // candidates in place, leaving the median at `mid`. This guards against
    // quadratic blowup on sorted, reversed and constant-run inputs.
    swap_records_if_greater(v, width, 1, mid, compare);
    if swap_records_if_greater(v, width, mid, last - 1, compare) {
        swap_records_if_greater(v, width, 1, mid, compare);
    }

    // Park the pivot at a fixed position beyond the scanned area.
    swap_records(v, width, mid, last);
    let pivot = last;

    // Three-way partition, zones left to right:
    //
    //   EEEEEELLLLLLLLuuuuuuuuGGGGGGGEEEEEEEE.
    //   ^     ^       ^       ^      ^      ^- len (pivot sits at len - 1)
    //   0     ple     pl      pr     pre
    //
    // E = equal to pivot, L = less, u = unprocessed, G = greater. `pl` is the
    // next unprocessed record on the left, `pr` the last processed one on the
    // right; pivot-equal records are shuttled outward to the two edges as the
    // scans find them.
    let mut ple = 0;
    let mut pl = 0;
    let mut pr = pivot;
    let mut pre = pivot;

    while pl < pr {
        // Advance the left scan over records that compare <= pivot. Breaks on
        // the first record greater than the pivot.
        while pl < pr {
            match compare_records(v, width, pl, pivot, compare) {
                Ordering::Greater => break,
                Ordering::Equal => {
                    if ple < pl {
                        swap_records(v, width, ple, pl);
                    }
                    ple += 1;
                    pl += 1;
                }
                Ordering::Less => pl += 1,
            }
        }

        // The last batch of left-hand records was all equal to the pivot.
        if pl >= pr {
            break;
        }

        // Shrink from the right. On the first record less than the pivot,
        // swap it across to the stalled left scan position and resume.
        while pl < pr {
            pr -= 1;
            match compare_records(v, width, pr, pivot, compare) {
                Ordering::Equal => {
                    pre -= 1;
                    if pr < pre {
                        swap_records(v, width, pr, pre);
                    }
                }
                Ordering::Less => {
                    if pl < pr {
                        swap_records(v, width, pl, pr);
                    }
                    pl += 1;
                    break;
                }
                Ordering::Greater => {}
            }
        }
    }

    // The scans have met; `pr` separates the left zones from the right ones.
    let split = pr;

    // Rotate both equal zones inward: EEELLL....GGGEEE -> LLLEEE....EEEGGG.
    swap_adjacent_blocks(&mut v[..split * width], width, ple);
    swap_adjacent_blocks(&mut v[split * width..], width, pre - pr);

    let lt_len = split - ple;
    let gt_len = pre - pr;

    // The equal zone is in its final position and needs no further
    // comparisons; recurse on the two strictly smaller outer zones.
    quicksort(&mut v[..lt_len * width], width, compare);
    quicksort(&mut v[(len - gt_len) * width..], width, compare);
}
