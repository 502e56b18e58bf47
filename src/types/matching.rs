//! Branch resolvers with optional handlers.
//!
//! A resolver only fails when the handler for the state actually reached is
//! missing; unused branches may be left out.

use crate::error::{Error, Result};
use crate::types::fixed::Fixed;
use crate::types::shape::Shape;
use crate::types::single::SingleResult;

type Nullary<'a, R> = Option<Box<dyn FnOnce() -> R + 'a>>;
type Unary<'a, T, R> = Option<Box<dyn FnOnce(T) -> R + 'a>>;

/// Two-branch resolver over a [`Fixed`] option.
#[must_use = "a resolver does nothing until `resolve` is called"]
pub struct FixedMatch<'a, T, R> {
    source: Fixed<T>,
    if_empty: Nullary<'a, R>,
    if_full: Unary<'a, T, R>,
}

impl<'a, T, R> FixedMatch<'a, T, R> {
    pub(crate) fn new(source: Fixed<T>) -> Self {
        Self {
            source,
            if_empty: None,
            if_full: None,
        }
    }

    /// Handler for the empty state.
    pub fn if_empty(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.if_empty = Some(Box::new(f));
        self
    }

    /// Handler for the full state.
    pub fn if_full(mut self, f: impl FnOnce(T) -> R + 'a) -> Self {
        self.if_full = Some(Box::new(f));
        self
    }

    /// Runs the handler for the source's state.
    ///
    /// # Errors
    ///
    /// `MatchCaseFailed` if that handler was not supplied.
    pub fn resolve(self) -> Result<R> {
        match self.source {
            Fixed::Empty => self
                .if_empty
                .map(|f| f())
                .ok_or_else(|| Error::match_case_failed("Empty")),
            Fixed::Full(value) => self
                .if_full
                .map(|f| f(value))
                .ok_or_else(|| Error::match_case_failed("Full")),
        }
    }
}

/// Three-branch resolver over a [`SingleResult`].
#[must_use = "a resolver does nothing until `resolve` is called"]
pub struct SingleMatch<'a, T, R> {
    source: SingleResult<T>,
    if_zero: Nullary<'a, R>,
    if_one: Unary<'a, T, R>,
    if_more_than_one: Nullary<'a, R>,
}

impl<'a, T, R> SingleMatch<'a, T, R> {
    pub(crate) fn new(source: SingleResult<T>) -> Self {
        Self {
            source,
            if_zero: None,
            if_one: None,
            if_more_than_one: None,
        }
    }

    /// Handler for the `Zero` state.
    pub fn if_zero(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.if_zero = Some(Box::new(f));
        self
    }

    /// Handler for the `One` state.
    pub fn if_one(mut self, f: impl FnOnce(T) -> R + 'a) -> Self {
        self.if_one = Some(Box::new(f));
        self
    }

    /// Handler for the `MoreThanOne` state.
    pub fn if_more_than_one(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.if_more_than_one = Some(Box::new(f));
        self
    }

    /// Runs the handler for the source's state.
    ///
    /// # Errors
    ///
    /// `MatchCaseFailed` if that handler was not supplied.
    pub fn resolve(self) -> Result<R> {
        let quantity = self.source.quantity();
        let missing = || Error::match_case_failed(quantity.name());
        match self.source.into_shape() {
            Shape::Zero => self.if_zero.map(|f| f()).ok_or_else(missing),
            Shape::One(value) => self.if_one.map(|f| f(value)).ok_or_else(missing),
            Shape::MoreThanOne => self.if_more_than_one.map(|f| f()).ok_or_else(missing),
        }
    }
}
