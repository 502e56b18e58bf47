//! Canonical discriminated form shared by every option shape.
//!
//! Equality, hashing and the single-result state all reduce to [`Shape`]:
//! `Zero`, `One(v)` or `MoreThanOne`. A plain option only ever reaches the
//! first two.

use crate::types::fixed::Fixed;

/// The discriminant of a single-result option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantity {
    /// The originating filter matched nothing.
    Zero,
    /// Exactly one match.
    One,
    /// Two or more matches. Invalid for plain-option purposes.
    MoreThanOne,
}

impl Quantity {
    /// Returns the name used in resolver and error text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "Zero",
            Self::One => "One",
            Self::MoreThanOne => "MoreThanOne",
        }
    }
}

/// Canonical form of any option-shaped value.
#[derive(Debug, Clone, Copy)]
pub enum Shape<T> {
    /// No value.
    Zero,
    /// Exactly one value.
    One(T),
    /// Ambiguous: more than one value.
    MoreThanOne,
}

impl<T> Shape<T> {
    /// Returns the quantity of this shape.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        match self {
            Self::Zero => Quantity::Zero,
            Self::One(_) => Quantity::One,
            Self::MoreThanOne => Quantity::MoreThanOne,
        }
    }

    /// Converts from `&Shape<T>` to `Shape<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Shape<&T> {
        match self {
            Self::Zero => Shape::Zero,
            Self::One(value) => Shape::One(value),
            Self::MoreThanOne => Shape::MoreThanOne,
        }
    }

    /// Maps the value of a `One` shape.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Shape<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Zero => Shape::Zero,
            Self::One(value) => Shape::One(f(value)),
            Self::MoreThanOne => Shape::MoreThanOne,
        }
    }

    /// Returns the plain-option form, or `None` for `MoreThanOne`.
    #[must_use]
    pub fn into_fixed(self) -> Option<Fixed<T>> {
        match self {
            Self::Zero => Some(Fixed::Empty),
            Self::One(value) => Some(Fixed::Full(value)),
            Self::MoreThanOne => None,
        }
    }
}

impl<T> From<Fixed<T>> for Shape<T> {
    fn from(fixed: Fixed<T>) -> Self {
        match fixed {
            Fixed::Empty => Self::Zero,
            Fixed::Full(value) => Self::One(value),
        }
    }
}
