//! Record-level primitives over a `&mut [u8]` buffer viewed as a sequence of
//! fixed-width chunks, indexed in record units rather than byte offsets.
//! Record-pair disjointness is established via split borrows, so the swap
//! primitives cannot be called on aliasing regions.

use core::cmp::Ordering;

/// Returns a view of the `i`-th record of `v`.
#[inline(always)]
pub(crate) fn record(v: &[u8], width: usize, i: usize) -> &[u8] {
    &v[i * width..(i + 1) * width]
}

/// Compares records `i` and `j`, passed to the comparator in that argument
/// order.
#[inline(always)]
pub(crate) fn compare_records<F>(
    v: &[u8],
    width: usize,
    i: usize,
    j: usize,
    compare: &mut F,
) -> Ordering
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    compare(record(v, width, i), record(v, width, j))
}

/// Exchanges the byte contents of records `i` and `j`. Requires `i < j`,
/// which makes the two records provably disjoint.
#[inline(always)]
pub(crate) fn swap_records(v: &mut [u8], width: usize, i: usize, j: usize) {
    debug_assert!(i < j);

    let (head, tail) = v.split_at_mut(j * width);
    head[i * width..(i + 1) * width].swap_with_slice(&mut tail[..width]);
}

/// Swaps records `i` and `j` iff record `i` compares strictly greater than
/// record `j`, and reports whether a swap occurred. Requires `i < j`.
///
/// This is the single point where a comparator result decides mutation during
/// insertion sort and pivot candidate ordering, which keeps the comparator
/// call count easy to reason about.
#[inline(always)]
pub(crate) fn swap_records_if_greater<F>(
    v: &mut [u8],
    width: usize,
    i: usize,
    j: usize,
    compare: &mut F,
) -> bool
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if compare_records(v, width, i, j, compare) == Ordering::Greater {
        swap_records(v, width, i, j);
        true
    } else {
        false
    }
}

/// Exchanges the adjacent record blocks `[0, na)` and `[na, len)` of `span`
/// so that they end up in the opposite order, using the minimum number of
/// record swaps: the shorter block is swapped against the equal-sized lead of
/// the longer one. The longer block may come out internally re-ordered, e.g.
///
/// ```text
/// 12345ab -> ab34512
/// 123abc  -> abc123
/// 12abcde -> deabc12
/// ```
///
/// Acceptable at every call site because each block consists entirely of
/// records that compare equal to the partition pivot.
pub(crate) fn swap_adjacent_blocks(span: &mut [u8], width: usize, na: usize) {
    let nb = (span.len() / width) - na;
    if na == 0 || nb == 0 {
        return;
    }

    let n_short = na.min(nb);
    let (head, tail) = span.split_at_mut(na.max(nb) * width);
    head[..n_short * width].swap_with_slice(&mut tail[..n_short * width]);
}
