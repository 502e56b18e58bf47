//! The fixed option: an immediately-resolved container of zero or one value.
//!
//! [`Fixed`] is the canonical form every other option shape reduces to. It is
//! an explicit sum type, so emptiness is a discriminant rather than a flag
//! next to a placeholder value.

use core::fmt;
use core::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::types::matching::FixedMatch;

/// An immutable option that is already resolved.
///
/// ```
/// use zero_or_one::Fixed;
///
/// let full = Fixed::full(7);
/// assert!(full.has_value());
/// assert_eq!(*full.value().unwrap(), 7);
///
/// let empty = Fixed::<i32>::empty();
/// assert!(empty.value().is_err());
/// assert_eq!(empty.value_or_default(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub enum Fixed<T> {
    /// No value.
    #[default]
    Empty,
    /// Exactly one value.
    Full(T),
}

impl<T> Fixed<T> {
    /// Returns an empty option.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns an option holding `value`.
    #[must_use]
    pub const fn full(value: T) -> Self {
        Self::Full(value)
    }

    /// Returns `Full(value)` when `has_value` is true, otherwise `Empty`.
    ///
    /// `value` is dropped when `has_value` is false.
    #[must_use]
    pub fn create(has_value: bool, value: T) -> Self {
        if has_value { Self::Full(value) } else { Self::Empty }
    }

    /// Returns true if the option holds a value.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    /// Returns true if the option holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NoOptionValue`](crate::ErrorKind::NoOptionValue) if the
    /// option is empty.
    pub fn value(&self) -> Result<&T> {
        match self {
            Self::Full(value) => Ok(value),
            Self::Empty => Err(Error::no_value()),
        }
    }

    /// Consumes the option and returns the contained value.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NoOptionValue`](crate::ErrorKind::NoOptionValue) if the
    /// option is empty.
    pub fn into_value(self) -> Result<T> {
        match self {
            Self::Full(value) => Ok(value),
            Self::Empty => Err(Error::no_value()),
        }
    }

    /// Returns the contained value or `T::default()`. Never fails.
    #[must_use]
    pub fn value_or_default(&self) -> T
    where
        T: Default + Clone,
    {
        match self {
            Self::Full(value) => value.clone(),
            Self::Empty => T::default(),
        }
    }

    /// Returns the contained value or `alternative`.
    #[must_use]
    pub fn value_or(self, alternative: T) -> T {
        match self {
            Self::Full(value) => value,
            Self::Empty => alternative,
        }
    }

    /// Forces a single-element extraction.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NoElements`](crate::ErrorKind::NoElements) if the option
    /// is empty.
    pub fn single(&self) -> Result<&T> {
        self.as_ref().into_option().ok_or_else(|| Error::nothing_found(false))
    }

    /// Forces a single-element extraction of a value matching `predicate`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NoMatch`](crate::ErrorKind::NoMatch) if the option is
    /// empty or its value does not match.
    pub fn single_where<P>(&self, predicate: P) -> Result<&T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Full(value) if predicate(value) => Ok(value),
            _ => Err(Error::nothing_found(true)),
        }
    }

    /// Converts from `&Fixed<T>` to `Fixed<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Fixed<&T> {
        match self {
            Self::Full(value) => Fixed::Full(value),
            Self::Empty => Fixed::Empty,
        }
    }

    /// Converts into the standard library option.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Full(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Maps the contained value, eagerly.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Fixed<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Full(value) => Fixed::Full(f(value)),
            Self::Empty => Fixed::Empty,
        }
    }

    /// Keeps the value only if it matches `predicate`, eagerly.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Full(value) if predicate(&value) => Self::Full(value),
            _ => Self::Empty,
        }
    }

    /// Applies `if_empty` or `if_full` depending on the state.
    pub fn match_with<R>(self, if_empty: impl FnOnce() -> R, if_full: impl FnOnce(T) -> R) -> R {
        match self {
            Self::Full(value) => if_full(value),
            Self::Empty => if_empty(),
        }
    }

    /// Starts a two-branch resolver whose branches are optional.
    ///
    /// ```
    /// use zero_or_one::{ErrorKind, Fixed};
    ///
    /// let doubled = Fixed::full(4).matching().if_full(|v| v * 2).resolve();
    /// assert_eq!(doubled.unwrap(), 8);
    ///
    /// let missing = Fixed::<i32>::empty().matching().if_full(|v| v * 2).resolve();
    /// assert_eq!(missing.unwrap_err().kind(), ErrorKind::MatchCaseFailed);
    /// ```
    #[must_use]
    pub fn matching<'a, R>(self) -> FixedMatch<'a, T, R> {
        FixedMatch::new(self)
    }

    /// Returns an iterator over the zero or one contained values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_option(),
        }
    }
}

impl<T> From<Option<T>> for Fixed<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Full(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Fixed<T>> for Option<T> {
    fn from(fixed: Fixed<T>) -> Self {
        fixed.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Fixed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(value) => write!(f, "Full({value})"),
            Self::Empty => f.write_str("Empty"),
        }
    }
}

/// Borrowing iterator over a [`Fixed`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Fixed`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Fixed<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Fixed<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
