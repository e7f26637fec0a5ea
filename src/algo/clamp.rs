use crate::foundation::compare::{Compare, Less};
use crate::foundation::error::{ClampError, ClampResult};

/// Clamp `value` into `[lo, hi]` under natural order.
///
/// Returns a reference to exactly one of the three arguments; nothing is cloned, so
/// non-`Clone` and unsized types work. A value equal to a bound is returned as `value`
/// itself, not as the bound.
///
/// Requires `!(hi < lo)`. This is checked with `debug_assert!` only; in release builds a
/// malformed range yields an unspecified (but memory-safe) choice among the three
/// references. Use [`try_clamp`] when the bounds come from untrusted input.
///
/// ```
/// assert_eq!(*clampkit::clamp(&12, &3, &7), 7);
/// assert_eq!(*clampkit::clamp(&5, &3, &7), 5);
/// ```
#[inline]
pub fn clamp<'a, T>(value: &'a T, lo: &'a T, hi: &'a T) -> &'a T
where
    T: PartialOrd + ?Sized,
{
    clamp_with(value, lo, hi, &Less)
}

/// Clamp `value` into `[lo, hi]` where the range is defined by `comp`.
///
/// `lo` is the bound that orders first under `comp`. With [`crate::Greater`] this means
/// `lo` is the numerically larger bound.
///
/// See [`clamp`] for the precondition policy.
#[inline]
pub fn clamp_by<'a, T, C>(value: &'a T, lo: &'a T, hi: &'a T, comp: C) -> &'a T
where
    T: ?Sized,
    C: Compare<T>,
{
    clamp_with(value, lo, hi, &comp)
}

#[inline]
pub(crate) fn clamp_with<'a, T, C>(value: &'a T, lo: &'a T, hi: &'a T, comp: &C) -> &'a T
where
    T: ?Sized,
    C: Compare<T> + ?Sized,
{
    debug_assert!(
        !comp.less(hi, lo),
        "clamp: malformed range, hi orders before lo"
    );
    if comp.less(value, lo) {
        lo
    } else if comp.less(hi, value) {
        hi
    } else {
        value
    }
}

/// Whether `[lo, hi]` is a non-empty range under `comp`.
///
/// Incomparable bounds (e.g. a NaN bound under [`Less`]) count as well-formed here, since a
/// bare comparator cannot tell them apart from equal bounds. [`try_clamp`] and
/// [`crate::ClampConfig`] reject them.
#[inline]
pub fn is_well_formed<T, C>(lo: &T, hi: &T, comp: C) -> bool
where
    T: ?Sized,
    C: Compare<T>,
{
    !comp.less(hi, lo)
}

/// Checked [`clamp`]: reports a malformed range instead of asserting.
///
/// Bounds that do not compare at all (`lo.partial_cmp(hi)` is `None`, e.g. a NaN bound)
/// are rejected as malformed too.
#[inline]
pub fn try_clamp<'a, T>(value: &'a T, lo: &'a T, hi: &'a T) -> ClampResult<&'a T>
where
    T: PartialOrd + ?Sized,
{
    if lo.partial_cmp(hi).is_none() {
        tracing::debug!("rejecting bound pair: lo and hi are incomparable");
        return Err(ClampError::malformed_range("lo and hi are incomparable"));
    }
    try_clamp_by(value, lo, hi, Less)
}

/// Checked [`clamp_by`]: reports a malformed range instead of asserting.
#[inline]
pub fn try_clamp_by<'a, T, C>(value: &'a T, lo: &'a T, hi: &'a T, comp: C) -> ClampResult<&'a T>
where
    T: ?Sized,
    C: Compare<T>,
{
    check_bounds(lo, hi, &comp)?;
    Ok(clamp_with(value, lo, hi, &comp))
}

#[inline]
pub(crate) fn check_bounds<T, C>(lo: &T, hi: &T, comp: &C) -> ClampResult<()>
where
    T: ?Sized,
    C: Compare<T> + ?Sized,
{
    if comp.less(hi, lo) {
        tracing::debug!("rejecting bound pair: hi orders before lo");
        return Err(ClampError::malformed_range(
            "hi orders strictly before lo under the active comparator",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/algo/clamp.rs"]
mod tests;
