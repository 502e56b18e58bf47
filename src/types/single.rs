//! The single-result option: the three-state outcome of a single-element
//! filter.
//!
//! # State machine
//!
//! | Quantity | Produced when | As a plain option |
//! |----------|---------------|-------------------|
//! | `Zero` | the filter matched nothing | `Empty` |
//! | `One` | exactly one match | `Full(v)` |
//! | `MoreThanOne` | two or more matches | fails with `MoreThanOneResult` |
//!
//! The state is fixed at construction; nothing mutates it afterwards. The
//! `using_predicate` flag only selects "element" vs "match" wording in error
//! text.
//!
//! Degrading (`into_fixed`) is the one conversion the non-failing operators
//! ([`SingleResult::replace_if_more_than_one`],
//! [`SingleResult::empty_if_more_than_one`],
//! [`SingleResult::default_if_more_than_one`]) are built from.

use core::fmt;
use core::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::tracing_compat::debug;
use crate::types::fixed::Fixed;
use crate::types::matching::SingleMatch;
use crate::types::shape::{Quantity, Shape};

/// A resolved single-result option.
///
/// ```
/// use zero_or_one::{Quantity, SingleExt};
///
/// let one = vec![1, 2, 3].single_result_where(|x| *x == 2);
/// assert_eq!(one.quantity(), Quantity::One);
///
/// let many = vec![1, 2, 3].single_result_where(|x| *x > 1);
/// assert_eq!(many.quantity(), Quantity::MoreThanOne);
/// assert!(many.to_fixed().is_err());
/// assert_eq!(many.match_with(|| 0, |v| v, || -1), -1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SingleResult<T> {
    shape: Shape<T>,
    using_predicate: bool,
}

impl<T> SingleResult<T> {
    /// Creates a single result from its canonical shape.
    #[must_use]
    pub const fn from_shape(shape: Shape<T>, using_predicate: bool) -> Self {
        Self {
            shape,
            using_predicate,
        }
    }

    /// A filter that matched nothing.
    #[must_use]
    pub const fn zero(using_predicate: bool) -> Self {
        Self::from_shape(Shape::Zero, using_predicate)
    }

    /// A filter that matched exactly `value`.
    #[must_use]
    pub const fn one(value: T, using_predicate: bool) -> Self {
        Self::from_shape(Shape::One(value), using_predicate)
    }

    /// A filter that matched more than once.
    #[must_use]
    pub const fn more_than_one(using_predicate: bool) -> Self {
        Self::from_shape(Shape::MoreThanOne, using_predicate)
    }

    /// Returns the quantity discriminant.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.shape.quantity()
    }

    /// Returns true if the originating filter used a predicate.
    #[must_use]
    pub const fn using_predicate(&self) -> bool {
        self.using_predicate
    }

    /// Returns the canonical shape.
    #[must_use]
    pub const fn shape(&self) -> &Shape<T> {
        &self.shape
    }

    /// Consumes the result and returns its canonical shape.
    #[must_use]
    pub fn into_shape(self) -> Shape<T> {
        self.shape
    }

    /// Reports whether the result degrades to a full option.
    ///
    /// # Errors
    ///
    /// `MoreThanOneResult` for the `MoreThanOne` state, which has no plain
    /// option form to ask.
    pub fn has_value(&self) -> Result<bool> {
        match self.shape {
            Shape::Zero => Ok(false),
            Shape::One(_) => Ok(true),
            Shape::MoreThanOne => Err(Error::more_than_one(self.using_predicate)),
        }
    }

    /// Returns the value for `One`, otherwise `T::default()`. Never fails.
    #[must_use]
    pub fn value_or_default(&self) -> T
    where
        T: Default + Clone,
    {
        match &self.shape {
            Shape::One(value) => value.clone(),
            Shape::Zero | Shape::MoreThanOne => T::default(),
        }
    }

    /// Returns the single value.
    ///
    /// # Errors
    ///
    /// `NoElements`/`NoMatch` for `Zero`, `MoreThanOneResult` for
    /// `MoreThanOne`.
    pub fn value(&self) -> Result<&T> {
        match &self.shape {
            Shape::One(value) => Ok(value),
            Shape::Zero => Err(Error::nothing_found(self.using_predicate)),
            Shape::MoreThanOne => Err(Error::more_than_one(self.using_predicate)),
        }
    }

    /// Consumes the result and returns the single value.
    ///
    /// # Errors
    ///
    /// Same as [`SingleResult::value`].
    pub fn into_value(self) -> Result<T> {
        match self.shape {
            Shape::One(value) => Ok(value),
            Shape::Zero => Err(Error::nothing_found(self.using_predicate)),
            Shape::MoreThanOne => Err(Error::more_than_one(self.using_predicate)),
        }
    }

    /// Degrades to a plain option, calling `if_more_than_one` for the
    /// `MoreThanOne` state.
    pub fn degrade_or_else<F>(self, if_more_than_one: F) -> Fixed<T>
    where
        F: FnOnce() -> Fixed<T>,
    {
        match self.shape {
            Shape::Zero => Fixed::Empty,
            Shape::One(value) => Fixed::Full(value),
            Shape::MoreThanOne => if_more_than_one(),
        }
    }

    /// Degrades to a plain option.
    ///
    /// # Errors
    ///
    /// `MoreThanOneResult` for the `MoreThanOne` state.
    pub fn into_fixed(self) -> Result<Fixed<T>> {
        let using_predicate = self.using_predicate;
        self.shape.into_fixed().ok_or_else(|| {
            debug!(using_predicate, "degrading a more-than-one single result");
            Error::more_than_one(using_predicate)
        })
    }

    /// Degrades a copy of this result to a plain option.
    ///
    /// # Errors
    ///
    /// `MoreThanOneResult` for the `MoreThanOne` state.
    pub fn to_fixed(&self) -> Result<Fixed<T>>
    where
        T: Clone,
    {
        self.clone().into_fixed()
    }

    /// `MoreThanOne` becomes `Full(replacement)`; other states degrade.
    #[must_use]
    pub fn replace_if_more_than_one(self, replacement: T) -> Fixed<T> {
        self.degrade_or_else(|| Fixed::Full(replacement))
    }

    /// `MoreThanOne` becomes `Empty`; other states degrade.
    #[must_use]
    pub fn empty_if_more_than_one(self) -> Fixed<T> {
        self.degrade_or_else(|| Fixed::Empty)
    }

    /// `MoreThanOne` becomes `Full(T::default())`; other states degrade.
    #[must_use]
    pub fn default_if_more_than_one(self) -> Fixed<T>
    where
        T: Default,
    {
        self.degrade_or_else(|| Fixed::Full(T::default()))
    }

    /// Applies the branch for the reached state.
    pub fn match_with<R>(
        self,
        if_zero: impl FnOnce() -> R,
        if_one: impl FnOnce(T) -> R,
        if_more_than_one: impl FnOnce() -> R,
    ) -> R {
        match self.shape {
            Shape::Zero => if_zero(),
            Shape::One(value) => if_one(value),
            Shape::MoreThanOne => if_more_than_one(),
        }
    }

    /// Starts a three-branch resolver whose branches are optional.
    ///
    /// Resolution fails with `MatchCaseFailed` only when the branch for the
    /// reached state was not supplied.
    #[must_use]
    pub fn matching<'a, R>(self) -> SingleMatch<'a, T, R> {
        SingleMatch::new(self)
    }

    /// Returns an iterator over the value.
    ///
    /// Creating the iterator never fails. For `MoreThanOne` the first call
    /// to `next` yields the `MoreThanOneResult` error.
    pub fn iter(&self) -> SingleIter<&T> {
        SingleIter {
            pending: Some(self.shape.as_ref()),
            using_predicate: self.using_predicate,
        }
    }
}

impl<T: fmt::Display> fmt::Display for SingleResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            Shape::Zero => f.write_str("Zero"),
            Shape::One(value) => write!(f, "One({value})"),
            Shape::MoreThanOne if self.using_predicate => f.write_str("MoreThanOne(matches)"),
            Shape::MoreThanOne => f.write_str("MoreThanOne(elements)"),
        }
    }
}

/// Iterator over a [`SingleResult`], yielding `Result` items.
#[derive(Debug, Clone)]
pub struct SingleIter<T> {
    pending: Option<Shape<T>>,
    using_predicate: bool,
}

impl<T> Iterator for SingleIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.pending.take()? {
            Shape::Zero => None,
            Shape::One(value) => Some(Ok(value)),
            Shape::MoreThanOne => Some(Err(Error::more_than_one(self.using_predicate))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(Shape::One(_) | Shape::MoreThanOne) => (1, Some(1)),
            Some(Shape::Zero) | None => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for SingleIter<T> {}

impl<T> IntoIterator for SingleResult<T> {
    type Item = Result<T>;
    type IntoIter = SingleIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SingleIter {
            pending: Some(self.shape),
            using_predicate: self.using_predicate,
        }
    }
}

impl<'a, T> IntoIterator for &'a SingleResult<T> {
    type Item = Result<&'a T>;
    type IntoIter = SingleIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
