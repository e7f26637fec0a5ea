//! Ordering predicates used to parameterize every clamp operation.

use std::marker::PhantomData;

/// Strict "orders before" relation over `T`.
///
/// `less(a, b)` must return `true` iff `a` orders strictly before `b`. Implementations are
/// expected to be pure and to describe a strict weak ordering; clamp results are only
/// meaningful under that assumption.
///
/// Any `Fn(&T, &T) -> bool` is a comparator, so ad-hoc orderings can be passed as closures:
///
/// ```
/// let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
/// assert_eq!(*clampkit::clamp_by(&-9, &2, &5, by_abs), 5);
/// ```
pub trait Compare<T: ?Sized> {
    /// Whether `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Flip this comparator so it orders in the opposite direction.
    ///
    /// Comparators generic over `T` (such as [`Less`]) need the element type spelled out,
    /// e.g. `Compare::<i32>::reversed(Less)`; the free function [`reversed`] avoids that.
    #[inline]
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Natural ascending order (`a < b`). The default comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Natural descending order (`a > b`).
///
/// Under `Greater` the roles of the bounds swap: the "low" bound is the numerically
/// larger one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Comparator adapter that flips the argument order of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T, C> Compare<T> for Reversed<C>
where
    T: ?Sized,
    C: Compare<T>,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

/// Wrap `comp` so that it orders in the opposite direction.
#[inline]
pub fn reversed<C>(comp: C) -> Reversed<C> {
    Reversed(comp)
}

/// Comparator ordering elements by a projected key in natural ascending order.
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<F: Copy, K> Copy for ByKey<F, K> {}

impl<F, K> std::fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, F, K> Compare<T> for ByKey<F, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.key)(a) < (self.key)(b)
    }
}

/// Order elements by `key(element)`.
///
/// ```
/// use clampkit::{by_key, clamp_by};
///
/// let by_len = by_key(|s: &&str| s.len());
/// assert_eq!(*clamp_by(&"a", &"abc", &"abcdef", by_len), "abc");
/// ```
#[inline]
pub fn by_key<F, K>(key: F) -> ByKey<F, K> {
    ByKey {
        key,
        _key: PhantomData,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/compare.rs"]
mod tests;
