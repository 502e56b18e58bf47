//! Derived operators, each a single instantiation of the composition
//! primitive.
//!
//! [`OptionExt`] is implemented for every [`Fixable`] shape. Eager inherent
//! methods of the same name on [`Fixed`] (`map`, `filter`) take precedence
//! there; use [`OptionExt::transform`] or call through the trait to get the
//! lazy form.

use crate::combinator::compose::{compose, try_compose};
use crate::deferred::Deferred;
use crate::fixation::Fixable;
use crate::types::Fixed;

/// Lazy combinators available on every option shape.
pub trait OptionExt: Fixable + Sized + 'static {
    /// Lazily applies a fixed-to-fixed function.
    fn transform<B, F>(self, f: F) -> Deferred<B>
    where
        B: 'static,
        F: Fn(Fixed<Self::Item>) -> Fixed<B> + 'static,
    {
        compose(self, f)
    }

    /// Lazily re-expresses this option as a [`Deferred`].
    fn to_deferred(self) -> Deferred<Self::Item>
    where
        Self::Item: 'static,
    {
        compose(self, |fixed| fixed)
    }

    /// Select: maps the value.
    fn map<B, F>(self, f: F) -> Deferred<B>
    where
        B: 'static,
        F: Fn(Self::Item) -> B + 'static,
    {
        compose(self, move |fixed| fixed.map(&f))
    }

    /// Where: keeps the value only if it matches `predicate`.
    fn filter<P>(self, predicate: P) -> Deferred<Self::Item>
    where
        Self::Item: 'static,
        P: Fn(&Self::Item) -> bool + 'static,
    {
        compose(self, move |fixed| fixed.filter(&predicate))
    }

    /// SelectMany: maps the value to another option and flattens.
    fn and_then<O, F>(self, f: F) -> Deferred<O::Item>
    where
        O: Fixable,
        O::Item: 'static,
        F: Fn(Self::Item) -> O + 'static,
    {
        try_compose(self, move |fixed| match fixed {
            Fixed::Empty => Ok(Fixed::Empty),
            Fixed::Full(value) => f(value).to_fixed(),
        })
    }

    /// Pairs this value with the value of `other`; empty if either is.
    ///
    /// `other` is only fixed when this option is full.
    fn zip<O>(self, other: O) -> Deferred<(Self::Item, O::Item)>
    where
        O: Fixable + 'static,
        Self::Item: 'static,
        O::Item: 'static,
    {
        try_compose(self, move |fixed| match fixed {
            Fixed::Empty => Ok(Fixed::Empty),
            Fixed::Full(a) => Ok(other.to_fixed()?.map(|b| (a, b))),
        })
    }

    /// Falls back to `alternative` when empty.
    fn or<O>(self, alternative: O) -> Deferred<Self::Item>
    where
        O: Fixable<Item = Self::Item> + 'static,
        Self::Item: 'static,
    {
        try_compose(self, move |fixed| match fixed {
            Fixed::Full(value) => Ok(Fixed::Full(value)),
            Fixed::Empty => alternative.to_fixed(),
        })
    }

    /// Replaces an empty option with `Full(value)`.
    fn or_else_value(self, value: Self::Item) -> Deferred<Self::Item>
    where
        Self::Item: Clone + 'static,
    {
        compose(self, move |fixed| match fixed {
            Fixed::Empty => Fixed::Full(value.clone()),
            full @ Fixed::Full(_) => full,
        })
    }

    /// Aggregate: folds the zero or one values into `seed`. Always full.
    fn fold_value<A, F>(self, seed: A, f: F) -> Deferred<A>
    where
        A: Clone + 'static,
        F: Fn(A, Self::Item) -> A + 'static,
    {
        compose(self, move |fixed| {
            Fixed::Full(match fixed {
                Fixed::Empty => seed.clone(),
                Fixed::Full(value) => f(seed.clone(), value),
            })
        })
    }
}

impl<O: Fixable + 'static> OptionExt for O {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::DeferredSingleResult;
    use crate::fixation::Foreign;
    use crate::types::SingleResult;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn map_and_filter_are_lazy_through_the_trait() {
        init_test("map_and_filter_are_lazy_through_the_trait");
        let mapped = OptionExt::map(Fixed::full(2), |v| v * 3);
        assert_eq!(mapped.to_fixed().expect("map"), Fixed::full(6));

        let filtered = mapped.filter(|v| *v > 10);
        crate::assert_with_log!(
            filtered.to_fixed().expect("filter").is_empty(),
            "filtered out",
            "Empty",
            filtered.to_fixed()
        );
        crate::test_complete!("map_and_filter_are_lazy_through_the_trait");
    }

    #[test]
    fn and_then_flattens() {
        let nested = Fixed::full(4).to_deferred().and_then(|v| {
            if v > 3 { Fixed::full(v * 2) } else { Fixed::empty() }
        });
        assert_eq!(nested.to_fixed().expect("flatten"), Fixed::full(8));

        let inner_fails = Fixed::full(1).to_deferred().and_then(|_| Foreign::new(vec![1, 2]));
        assert!(
            inner_fails
                .to_fixed()
                .unwrap_err()
                .is_implementation_error()
        );
    }

    #[test]
    fn zip_requires_both() {
        let both = Fixed::full(1).to_deferred().zip(Some("a"));
        assert_eq!(both.to_fixed().expect("zip"), Fixed::full((1, "a")));

        let left_empty = Fixed::<i32>::empty().to_deferred().zip(Some("a"));
        assert!(left_empty.to_fixed().expect("zip").is_empty());

        let right_empty = Fixed::full(1).to_deferred().zip(None::<&str>);
        assert!(right_empty.to_fixed().expect("zip").is_empty());
    }

    #[test]
    fn zip_does_not_fix_other_when_empty() {
        let other = DeferredSingleResult::from_sequence(vec![1, 2]);
        let zipped = Fixed::<i32>::empty().to_deferred().zip(other);
        assert!(zipped.to_fixed().expect("short-circuit").is_empty());
    }

    #[test]
    fn fallbacks() {
        let empty = Fixed::<i32>::empty().to_deferred();
        assert_eq!(
            empty.clone().or(Fixed::full(5)).to_fixed().expect("or"),
            Fixed::full(5)
        );
        assert_eq!(
            empty.or_else_value(9).to_fixed().expect("or_else_value"),
            Fixed::full(9)
        );
        assert_eq!(
            Fixed::full(1).to_deferred().or(Fixed::full(5)).to_fixed().expect("or"),
            Fixed::full(1)
        );
    }

    #[test]
    fn fold_value_seeds() {
        let summed = Fixed::full(3).to_deferred().fold_value(10, |acc, v| acc + v);
        assert_eq!(summed.to_fixed().expect("fold"), Fixed::full(13));
        let seed_only = Fixed::<i32>::empty().to_deferred().fold_value(10, |acc, v| acc + v);
        assert_eq!(seed_only.to_fixed().expect("fold"), Fixed::full(10));
    }

    #[test]
    fn operators_on_single_results_degrade_first() {
        let one = SingleResult::one(2, false).map(|v| v + 1);
        assert_eq!(one.to_fixed().expect("one"), Fixed::full(3));

        let many = SingleResult::<i32>::more_than_one(false).map(|v| v + 1);
        assert!(many.to_fixed().unwrap_err().is_more_than_one());
    }
}
