//! The fixation protocol: normalizing any option-shaped value to [`Fixed`].
//!
//! Fixation follows a priority order:
//!
//! 1. A [`Fixed`] is returned as-is.
//! 2. Shapes with a direct path ([`Deferred`](crate::Deferred),
//!    [`SingleResult`], [`DeferredSingleResult`](crate::DeferredSingleResult),
//!    `std::option::Option`) resolve without enumeration.
//! 3. Anything else is treated as a sequence: a cursor is advanced once for
//!    the value and once more to prove there is no second element
//!    ([`fix_sequence`], [`Foreign`]).
//!
//! A second element in step 3 is an implementation error
//! ([`ErrorKind::OptionEnumeratorMoreThanOneElement`](crate::ErrorKind)),
//! not a `MoreThanOneResult`: it means a foreign type broke the zero-or-one
//! contract.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::tracing_compat::{trace, warn};
use crate::types::{Fixed, Shape, SingleResult};

/// Capability shared by every option shape: reduce to a [`Fixed`].
pub trait Fixable {
    /// The type of the zero or one value.
    type Item;

    /// Returns the fixed form.
    ///
    /// # Errors
    ///
    /// Whatever the shape's resolution raises: `MoreThanOneResult` for an
    /// ambiguous single result, the implementation error for a misbehaving
    /// foreign sequence, or an error produced by a deferred generator.
    fn to_fixed(&self) -> Result<Fixed<Self::Item>>;

    /// Returns the canonical shape used by the equality algebra.
    ///
    /// Plain options reach only `Zero` and `One`; single-result shapes
    /// override this to report `MoreThanOne` without failing.
    ///
    /// # Errors
    ///
    /// Same as [`Fixable::to_fixed`], except that single-result shapes never
    /// fail for `MoreThanOne`.
    fn to_shape(&self) -> Result<Shape<Self::Item>> {
        self.to_fixed().map(Shape::from)
    }
}

/// Capability of the single-result shapes: reduce to a [`SingleResult`].
pub trait SingleFixable: Fixable {
    /// Returns the resolved single result.
    ///
    /// # Errors
    ///
    /// Errors raised while producing the result (for example by a deferred
    /// generator). `MoreThanOne` itself is a value here, not an error.
    fn to_single(&self) -> Result<SingleResult<Self::Item>>;
}

/// Fixes any option-shaped value.
///
/// # Errors
///
/// See [`Fixable::to_fixed`].
pub fn fix<O>(option: &O) -> Result<Fixed<O::Item>>
where
    O: Fixable + ?Sized,
{
    option.to_fixed()
}

/// Fixes a sequence that claims to hold zero or one element.
///
/// The cursor is advanced at most twice and dropped before returning on
/// every path.
///
/// # Errors
///
/// [`ErrorKind::OptionEnumeratorMoreThanOneElement`](crate::ErrorKind) if
/// the sequence yields a second element.
pub fn fix_sequence<I>(sequence: I) -> Result<Fixed<I::Item>>
where
    I: IntoIterator,
{
    let type_name = std::any::type_name::<I>();
    let mut cursor = sequence.into_iter();
    let Some(first) = cursor.next() else {
        trace!(sequence = type_name, "fixed foreign sequence as empty");
        return Ok(Fixed::Empty);
    };
    if cursor.next().is_some() {
        warn!(
            sequence = type_name,
            "foreign option-shaped sequence yielded more than one element"
        );
        return Err(Error::second_element(type_name));
    }
    trace!(sequence = type_name, "fixed foreign sequence as full");
    Ok(Fixed::Full(first))
}

/// Adapter that lets a re-enumerable foreign sequence act as an option.
///
/// Each fixation clones the sequence and runs [`fix_sequence`] on it.
///
/// ```
/// use zero_or_one::{Fixable, Fixed, Foreign};
///
/// assert_eq!(Foreign::new(vec![3]).to_fixed().unwrap(), Fixed::full(3));
/// assert!(Foreign::new(vec![1, 2, 3]).to_fixed().unwrap_err().is_implementation_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foreign<S> {
    sequence: S,
}

impl<S> Foreign<S> {
    /// Wraps a foreign sequence.
    #[must_use]
    pub const fn new(sequence: S) -> Self {
        Self { sequence }
    }

    /// Returns the wrapped sequence.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S> Fixable for Foreign<S>
where
    S: Clone + IntoIterator,
{
    type Item = S::Item;

    fn to_fixed(&self) -> Result<Fixed<Self::Item>> {
        fix_sequence(self.sequence.clone())
    }
}

impl<T: Clone> Fixable for Fixed<T> {
    type Item = T;

    fn to_fixed(&self) -> Result<Fixed<T>> {
        Ok(self.clone())
    }
}

impl<T: Clone> Fixable for Option<T> {
    type Item = T;

    fn to_fixed(&self) -> Result<Fixed<T>> {
        Ok(Fixed::from(self.clone()))
    }
}

impl<T: Clone> Fixable for SingleResult<T> {
    type Item = T;

    fn to_fixed(&self) -> Result<Fixed<T>> {
        SingleResult::to_fixed(self)
    }

    fn to_shape(&self) -> Result<Shape<T>> {
        Ok(self.shape().clone())
    }
}

impl<T: Clone> SingleFixable for SingleResult<T> {
    fn to_single(&self) -> Result<SingleResult<T>> {
        Ok(self.clone())
    }
}

impl<O: Fixable + ?Sized> Fixable for &O {
    type Item = O::Item;

    fn to_fixed(&self) -> Result<Fixed<Self::Item>> {
        (**self).to_fixed()
    }

    fn to_shape(&self) -> Result<Shape<Self::Item>> {
        (**self).to_shape()
    }
}

impl<O: Fixable + ?Sized> Fixable for Box<O> {
    type Item = O::Item;

    fn to_fixed(&self) -> Result<Fixed<Self::Item>> {
        (**self).to_fixed()
    }

    fn to_shape(&self) -> Result<Shape<Self::Item>> {
        (**self).to_shape()
    }
}

impl<O: Fixable + ?Sized> Fixable for Rc<O> {
    type Item = O::Item;

    fn to_fixed(&self) -> Result<Fixed<Self::Item>> {
        (**self).to_fixed()
    }

    fn to_shape(&self) -> Result<Shape<Self::Item>> {
        (**self).to_shape()
    }
}
