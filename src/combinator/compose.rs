//! The composition primitive.
//!
//! Every derived operator in this crate is [`compose`] (or one of its
//! fallible/single-result siblings) instantiated with a fixed-to-fixed
//! function:
//!
//! | Operator | Function passed to `compose` |
//! |----------|------------------------------|
//! | `map(f)` | `|x| x.map(f)` |
//! | `filter(p)` | `|x| x.filter(p)` |
//! | `and_then(f)` | `|x| flatten(x.map(f))` (fallible) |
//! | `zip(o)` | `|x| x and o.fix()` (fallible) |
//!
//! # Fusion
//!
//! `compose(compose(o, f), g)` fixes to the same value as
//! `compose(o, |x| g(f(x)))`, and either way the source is fixed exactly once
//! per fixation of the outer option. Nested derived operators therefore
//! never repeat a source's side effects within one resolution.

use crate::deferred::Deferred;
use crate::error::Result;
use crate::fixation::{Fixable, SingleFixable};
use crate::types::{Fixed, SingleResult};

/// Lazily applies `f` to the fixed form of `source`.
///
/// ```
/// use zero_or_one::{compose, Fixed};
///
/// let doubled = compose(Fixed::full(21), |x| x.map(|v| v * 2));
/// assert_eq!(doubled.to_fixed().unwrap(), Fixed::full(42));
/// ```
pub fn compose<O, B, F>(source: O, f: F) -> Deferred<B>
where
    O: Fixable + 'static,
    B: 'static,
    F: Fn(Fixed<O::Item>) -> Fixed<B> + 'static,
{
    Deferred::try_new(move || source.to_fixed().map(&f))
}

/// Lazily applies a fallible `f` to the fixed form of `source`.
///
/// Errors from fixing `source` and from `f` both surface when the result is
/// fixed, never at construction.
pub fn try_compose<O, B, F>(source: O, f: F) -> Deferred<B>
where
    O: Fixable + 'static,
    B: 'static,
    F: Fn(Fixed<O::Item>) -> Result<Fixed<B>> + 'static,
{
    Deferred::try_new(move || f(source.to_fixed()?))
}

/// Lazily applies `f` to the resolved single result of `source`.
///
/// This is the hook the non-failing degraders use: `f` sees `MoreThanOne`
/// as a value instead of an error.
pub fn compose_single<O, B, F>(source: O, f: F) -> Deferred<B>
where
    O: SingleFixable + 'static,
    B: 'static,
    F: Fn(SingleResult<O::Item>) -> Result<Fixed<B>> + 'static,
{
    Deferred::try_new(move || f(source.to_single()?))
}
