//! Single-element filters over sequences.
//!
//! A scan stops as soon as a second (matching) element is seen, so infinite
//! sequences with at least two matches still terminate.

use crate::tracing_compat::trace;
use crate::types::{Shape, SingleResult};

/// Resolves `sequence` to `Zero`, `One` or `MoreThanOne` elements.
pub fn single_of<I>(sequence: I) -> SingleResult<I::Item>
where
    I: IntoIterator,
{
    SingleResult::from_shape(scan(sequence.into_iter()), false)
}

/// Resolves the elements of `sequence` matching `predicate` to `Zero`, `One`
/// or `MoreThanOne`.
pub fn single_where<I, P>(sequence: I, mut predicate: P) -> SingleResult<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    SingleResult::from_shape(
        scan(sequence.into_iter().filter(|item| predicate(item))),
        true,
    )
}

fn scan<I: Iterator>(mut cursor: I) -> Shape<I::Item> {
    let Some(first) = cursor.next() else {
        return Shape::Zero;
    };
    if cursor.next().is_some() {
        trace!("single-element scan stopped at second element");
        return Shape::MoreThanOne;
    }
    Shape::One(first)
}

/// Single-element filters available on every sequence.
///
/// ```
/// use zero_or_one::{Quantity, SingleExt};
///
/// assert_eq!(vec![1, 2, 3].single_result_where(|x| *x == 2).quantity(), Quantity::One);
/// assert_eq!(vec![1, 2, 3].single_result().quantity(), Quantity::MoreThanOne);
/// ```
pub trait SingleExt: IntoIterator + Sized {
    /// Eagerly resolves this sequence to a [`SingleResult`].
    fn single_result(self) -> SingleResult<Self::Item> {
        single_of(self)
    }

    /// Eagerly resolves the elements matching `predicate` to a
    /// [`SingleResult`].
    fn single_result_where<P>(self, predicate: P) -> SingleResult<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        single_where(self, predicate)
    }
}

impl<I: IntoIterator> SingleExt for I {}
