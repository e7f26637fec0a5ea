use std::iter::FusedIterator;

use rayon::prelude::*;

use crate::algo::clamp::{check_bounds, clamp_with};
use crate::foundation::compare::{Compare, Less};
use crate::foundation::error::{ClampError, ClampResult};

/// Clamp every element of `input` into `[lo, hi]` and write the results to the matching
/// positions of `out`.
///
/// Returns the part of `out` past the last written element, so calls compose:
/// an exactly-sized `out` yields an empty slice.
///
/// # Panics
///
/// Panics if `out` is shorter than `input`. A malformed range is debug-asserted.
///
/// ```
/// let input = [-7, 1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let mut out = [0; 12];
/// let rest = clampkit::clamp_range(&input, &mut out, &3, &7);
/// assert_eq!(rest.len(), 2);
/// assert_eq!(out[..10], [3, 3, 3, 3, 4, 5, 6, 7, 7, 7]);
/// ```
pub fn clamp_range<'o, T>(input: &[T], out: &'o mut [T], lo: &T, hi: &T) -> &'o mut [T]
where
    T: PartialOrd + Clone,
{
    clamp_range_by(input, out, lo, hi, Less)
}

/// [`clamp_range`] with a custom comparator.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
pub fn clamp_range_by<'o, T, C>(
    input: &[T],
    out: &'o mut [T],
    lo: &T,
    hi: &T,
    comp: C,
) -> &'o mut [T]
where
    T: Clone,
    C: Compare<T>,
{
    assert!(
        out.len() >= input.len(),
        "clamp_range: output holds {} elements, input has {}",
        out.len(),
        input.len()
    );
    let (head, rest) = out.split_at_mut(input.len());
    for (dst, src) in head.iter_mut().zip(input) {
        dst.clone_from(clamp_with(src, lo, hi, &comp));
    }
    rest
}

/// Checked [`clamp_range_by`]: validates the bound pair and the output length before
/// writing anything.
pub fn try_clamp_range_by<'o, T, C>(
    input: &[T],
    out: &'o mut [T],
    lo: &T,
    hi: &T,
    comp: C,
) -> ClampResult<&'o mut [T]>
where
    T: Clone,
    C: Compare<T>,
{
    check_bounds(lo, hi, &comp)?;
    if out.len() < input.len() {
        tracing::debug!(
            needed = input.len(),
            available = out.len(),
            "rejecting short output"
        );
        return Err(ClampError::OutputTooShort {
            needed: input.len(),
            available: out.len(),
        });
    }
    Ok(clamp_range_by(input, out, lo, hi, comp))
}

/// Clamp `values` into `[lo, hi]` in place.
///
/// Only out-of-range elements are written. Produces the same sequence as an
/// out-of-place [`clamp_range`] over the same input. Returns the number of elements changed.
pub fn clamp_in_place<T>(values: &mut [T], lo: &T, hi: &T) -> usize
where
    T: PartialOrd + Clone,
{
    clamp_in_place_by(values, lo, hi, Less)
}

/// [`clamp_in_place`] with a custom comparator.
#[tracing::instrument(level = "trace", skip_all, fields(len = values.len()))]
pub fn clamp_in_place_by<T, C>(values: &mut [T], lo: &T, hi: &T, comp: C) -> usize
where
    T: Clone,
    C: Compare<T>,
{
    let mut changed = 0;
    for v in values.iter_mut() {
        if clamp_one_in_place(v, lo, hi, &comp) {
            changed += 1;
        }
    }
    tracing::trace!(changed, "clamped in place");
    changed
}

/// Checked [`clamp_in_place_by`]: leaves `values` untouched on a malformed range.
pub fn try_clamp_in_place_by<T, C>(values: &mut [T], lo: &T, hi: &T, comp: C) -> ClampResult<usize>
where
    T: Clone,
    C: Compare<T>,
{
    check_bounds(lo, hi, &comp)?;
    Ok(clamp_in_place_by(values, lo, hi, comp))
}

/// Parallel [`clamp_in_place_by`] on the rayon global pool.
///
/// Every element is independent, so the result matches the sequential form exactly.
#[tracing::instrument(level = "trace", skip_all, fields(len = values.len()))]
pub fn par_clamp_in_place_by<T, C>(values: &mut [T], lo: &T, hi: &T, comp: C) -> usize
where
    T: Clone + Send + Sync,
    C: Compare<T> + Sync,
{
    let changed = values
        .par_iter_mut()
        .filter_map(|v| clamp_one_in_place(v, lo, hi, &comp).then_some(()))
        .count();
    tracing::trace!(changed, "clamped in place (parallel)");
    changed
}

#[inline]
fn clamp_one_in_place<T, C>(v: &mut T, lo: &T, hi: &T, comp: &C) -> bool
where
    T: Clone,
    C: Compare<T>,
{
    debug_assert!(
        !comp.less(hi, lo),
        "clamp: malformed range, hi orders before lo"
    );
    if comp.less(v, lo) {
        v.clone_from(lo);
        true
    } else if comp.less(hi, v) {
        v.clone_from(hi);
        true
    } else {
        false
    }
}

/// Lazily clamp a stream of borrowed elements under natural order.
///
/// Nothing is cloned: each item is a reference to the input element or to a bound.
///
/// ```
/// let v = vec![1, 5, 9];
/// let out: Vec<i32> = clampkit::clamp_iter(&v, &2, &8).copied().collect();
/// assert_eq!(out, [2, 5, 8]);
/// ```
pub fn clamp_iter<'a, T, I>(iter: I, lo: &'a T, hi: &'a T) -> ClampIter<'a, T, I::IntoIter, Less>
where
    T: PartialOrd + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    clamp_iter_by(iter, lo, hi, Less)
}

/// [`clamp_iter`] with a custom comparator.
pub fn clamp_iter_by<'a, T, I, C>(
    iter: I,
    lo: &'a T,
    hi: &'a T,
    comp: C,
) -> ClampIter<'a, T, I::IntoIter, C>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Compare<T>,
{
    ClampIter {
        inner: iter.into_iter(),
        lo,
        hi,
        comp,
    }
}

/// Iterator returned by [`clamp_iter`] and [`clamp_iter_by`].
#[derive(Clone, Debug)]
pub struct ClampIter<'a, T: ?Sized, I, C> {
    inner: I,
    lo: &'a T,
    hi: &'a T,
    comp: C,
}

impl<'a, T, I, C> Iterator for ClampIter<'a, T, I, C>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T>,
    C: Compare<T>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let v = self.inner.next()?;
        Some(clamp_with(v, self.lo, self.hi, &self.comp))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, I, C> DoubleEndedIterator for ClampIter<'a, T, I, C>
where
    T: ?Sized + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
    C: Compare<T>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let v = self.inner.next_back()?;
        Some(clamp_with(v, self.lo, self.hi, &self.comp))
    }
}

impl<'a, T, I, C> ExactSizeIterator for ClampIter<'a, T, I, C>
where
    T: ?Sized + 'a,
    I: ExactSizeIterator<Item = &'a T>,
    C: Compare<T>,
{
}

impl<'a, T, I, C> FusedIterator for ClampIter<'a, T, I, C>
where
    T: ?Sized + 'a,
    I: FusedIterator<Item = &'a T>,
    C: Compare<T>,
{
}

#[cfg(test)]
#[path = "../../tests/unit/algo/range.rs"]
mod tests;
