//! Deferred options: resolution produced on demand by a stored generator.
//!
//! # No memoization
//!
//! A deferred option never caches. Every fixation request re-runs the full
//! generator chain, so side effects inside a generator repeat on every
//! resolution. Callers that want a single evaluation fix once and keep the
//! resulting [`Fixed`]:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use zero_or_one::{Deferred, Fixed};
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let deferred = Deferred::new(move || {
//!     counter.set(counter.get() + 1);
//!     Fixed::full(1)
//! });
//!
//! deferred.to_fixed().unwrap();
//! deferred.to_fixed().unwrap();
//! assert_eq!(calls.get(), 2);
//!
//! // Cache externally.
//! let cached = deferred.to_fixed().unwrap();
//! assert_eq!(cached, Fixed::full(1));
//! assert_eq!(calls.get(), 3);
//! ```
//!
//! Cloning a deferred option shares its generator; it never snapshots a
//! result.
//!
//! # Enumeration
//!
//! [`DeferredIter`] and [`DeferredSingleIter`] hold the generator, not a
//! result. Creating one runs nothing; the first `next` runs the generator
//! once and yields what the resolved form would yield.

use core::fmt;
use core::iter::FusedIterator;
use std::rc::Rc;

use crate::combinator::compose::compose_single;
use crate::combinator::single::{single_of, single_where};
use crate::error::Result;
use crate::fixation::{Fixable, SingleFixable};
use crate::tracing_compat::trace;
use crate::types::{Fixed, Quantity, Shape, SingleResult};

type Generator<T> = Rc<dyn Fn() -> Result<T>>;

/// An option whose fixed form is recomputed on every request.
pub struct Deferred<T> {
    generator: Generator<Fixed<T>>,
}

impl<T: 'static> Deferred<T> {
    /// Creates a deferred option from an infallible generator.
    #[must_use]
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn() -> Fixed<T> + 'static,
    {
        Self::try_new(move || Ok(generator()))
    }

    /// Creates a deferred option from a fallible generator.
    #[must_use]
    pub fn try_new<F>(generator: F) -> Self
    where
        F: Fn() -> Result<Fixed<T>> + 'static,
    {
        Self {
            generator: Rc::new(generator),
        }
    }

    /// Wraps an already fixed option; each fixation returns a clone.
    #[must_use]
    pub fn from_fixed(fixed: Fixed<T>) -> Self
    where
        T: Clone,
    {
        Self::new(move || fixed.clone())
    }
}

impl<T> Deferred<T> {
    /// Runs the generator and returns the fixed form.
    ///
    /// # Errors
    ///
    /// Any error raised by the generator chain.
    pub fn to_fixed(&self) -> Result<Fixed<T>> {
        trace!("fixing deferred option");
        (self.generator)()
    }

    /// Fixes and reports whether a value is present.
    ///
    /// # Errors
    ///
    /// Any error raised by the generator chain.
    pub fn has_value(&self) -> Result<bool> {
        self.to_fixed().map(|fixed| fixed.has_value())
    }

    /// Fixes and returns the value.
    ///
    /// # Errors
    ///
    /// `NoOptionValue` if the fixed form is empty, or any generator error.
    pub fn value(&self) -> Result<T> {
        self.to_fixed()?.into_value()
    }

    /// Fixes and returns the value or `T::default()`.
    ///
    /// # Errors
    ///
    /// Any error raised by the generator chain; emptiness is not an error.
    pub fn value_or_default(&self) -> Result<T>
    where
        T: Default + Clone,
    {
        self.to_fixed().map(|fixed| fixed.value_or_default())
    }

    /// Returns a lazy iterator over the value.
    ///
    /// The generator runs on the first call to `next`, not here.
    pub fn iter(&self) -> DeferredIter<T> {
        DeferredIter {
            pending: Some(Rc::clone(&self.generator)),
        }
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            generator: Rc::clone(&self.generator),
        }
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<T> Fixable for Deferred<T> {
    type Item = T;

    fn to_fixed(&self) -> Result<Fixed<T>> {
        Deferred::to_fixed(self)
    }
}

/// Lazy iterator over a [`Deferred`], yielding `Result` items.
///
/// Yields `Ok(v)` for a full resolution, nothing for an empty one, and the
/// generator's error if it fails.
pub struct DeferredIter<T> {
    pending: Option<Generator<Fixed<T>>>,
}

impl<T> Iterator for DeferredIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let generator = self.pending.take()?;
        trace!("enumerating deferred option");
        match generator() {
            Ok(fixed) => fixed.into_option().map(Ok),
            Err(err) => Some(Err(err)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(self.pending.is_some())))
    }
}

impl<T> FusedIterator for DeferredIter<T> {}

impl<T> fmt::Debug for DeferredIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredIter")
            .field("resolved", &self.pending.is_none())
            .finish()
    }
}

impl<T> IntoIterator for Deferred<T> {
    type Item = Result<T>;
    type IntoIter = DeferredIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        DeferredIter {
            pending: Some(self.generator),
        }
    }
}

impl<T> IntoIterator for &Deferred<T> {
    type Item = Result<T>;
    type IntoIter = DeferredIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single-result option whose state is recomputed on every request.
pub struct DeferredSingleResult<T> {
    generator: Generator<SingleResult<T>>,
}

impl<T: 'static> DeferredSingleResult<T> {
    /// Creates a deferred single result from an infallible generator.
    #[must_use]
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn() -> SingleResult<T> + 'static,
    {
        Self::try_new(move || Ok(generator()))
    }

    /// Creates a deferred single result from a fallible generator.
    #[must_use]
    pub fn try_new<F>(generator: F) -> Self
    where
        F: Fn() -> Result<SingleResult<T>> + 'static,
    {
        Self {
            generator: Rc::new(generator),
        }
    }

    /// Wraps an already resolved single result.
    #[must_use]
    pub fn from_single(single: SingleResult<T>) -> Self
    where
        T: Clone,
    {
        Self::new(move || single.clone())
    }

    /// Single-element filter over `sequence`, re-enumerated on every
    /// fixation.
    #[must_use]
    pub fn from_sequence<S>(sequence: S) -> Self
    where
        S: Clone + IntoIterator<Item = T> + 'static,
    {
        Self::new(move || single_of(sequence.clone()))
    }

    /// Single-element filter of the items of `sequence` matching
    /// `predicate`, re-enumerated on every fixation.
    #[must_use]
    pub fn from_sequence_where<S, P>(sequence: S, predicate: P) -> Self
    where
        S: Clone + IntoIterator<Item = T> + 'static,
        P: Fn(&T) -> bool + 'static,
    {
        Self::new(move || single_where(sequence.clone(), &predicate))
    }

    /// Lazily maps `MoreThanOne` to `Full(replacement)`.
    #[must_use]
    pub fn replace_if_more_than_one(self, replacement: T) -> Deferred<T>
    where
        T: Clone,
    {
        compose_single(self, move |single| {
            Ok(single.replace_if_more_than_one(replacement.clone()))
        })
    }

    /// Lazily maps `MoreThanOne` to `Empty`.
    #[must_use]
    pub fn empty_if_more_than_one(self) -> Deferred<T> {
        compose_single(self, |single| Ok(single.empty_if_more_than_one()))
    }

    /// Lazily maps `MoreThanOne` to `Full(T::default())`.
    #[must_use]
    pub fn default_if_more_than_one(self) -> Deferred<T>
    where
        T: Default,
    {
        compose_single(self, |single| Ok(single.default_if_more_than_one()))
    }
}

impl<T> DeferredSingleResult<T> {
    /// Runs the generator and returns the resolved single result.
    ///
    /// # Errors
    ///
    /// Any error raised by the generator.
    pub fn to_single(&self) -> Result<SingleResult<T>> {
        trace!("fixing deferred single result");
        (self.generator)()
    }

    /// Resolves and returns the quantity.
    ///
    /// # Errors
    ///
    /// Any error raised by the generator.
    pub fn quantity(&self) -> Result<Quantity> {
        self.to_single().map(|single| single.quantity())
    }

    /// Resolves and returns the single value.
    ///
    /// # Errors
    ///
    /// `NoElements`/`NoMatch`, `MoreThanOneResult`, or any generator error.
    pub fn value(&self) -> Result<T> {
        self.to_single()?.into_value()
    }

    /// Returns a lazy iterator over the value.
    ///
    /// The generator runs on the first call to `next`. For `MoreThanOne`
    /// that call yields the `MoreThanOneResult` error.
    pub fn iter(&self) -> DeferredSingleIter<T> {
        DeferredSingleIter {
            pending: Some(Rc::clone(&self.generator)),
        }
    }
}

impl<T> Clone for DeferredSingleResult<T> {
    fn clone(&self) -> Self {
        Self {
            generator: Rc::clone(&self.generator),
        }
    }
}

impl<T> fmt::Debug for DeferredSingleResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSingleResult").finish_non_exhaustive()
    }
}

impl<T> Fixable for DeferredSingleResult<T> {
    type Item = T;

    fn to_fixed(&self) -> Result<Fixed<T>> {
        self.to_single()?.into_fixed()
    }

    fn to_shape(&self) -> Result<Shape<T>> {
        self.to_single().map(SingleResult::into_shape)
    }
}

impl<T> SingleFixable for DeferredSingleResult<T> {
    fn to_single(&self) -> Result<SingleResult<T>> {
        DeferredSingleResult::to_single(self)
    }
}

/// Lazy iterator over a [`DeferredSingleResult`], yielding `Result` items.
///
/// Once resolved it yields exactly what [`SingleResult`]'s own iterator
/// yields; a generator error is yielded in its place.
pub struct DeferredSingleIter<T> {
    pending: Option<Generator<SingleResult<T>>>,
}

impl<T> Iterator for DeferredSingleIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let generator = self.pending.take()?;
        trace!("enumerating deferred single result");
        match generator() {
            Ok(single) => single.into_iter().next(),
            Err(err) => Some(Err(err)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(self.pending.is_some())))
    }
}

impl<T> FusedIterator for DeferredSingleIter<T> {}

impl<T> fmt::Debug for DeferredSingleIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSingleIter")
            .field("resolved", &self.pending.is_none())
            .finish()
    }
}

impl<T> IntoIterator for DeferredSingleResult<T> {
    type Item = Result<T>;
    type IntoIter = DeferredSingleIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        DeferredSingleIter {
            pending: Some(self.generator),
        }
    }
}

impl<T> IntoIterator for &DeferredSingleResult<T> {
    type Item = Result<T>;
    type IntoIter = DeferredSingleIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use std::cell::Cell;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    fn counting(calls: &Rc<Cell<usize>>, fixed: Fixed<i32>) -> Deferred<i32> {
        let calls = Rc::clone(calls);
        Deferred::new(move || {
            calls.set(calls.get() + 1);
            fixed
        })
    }

    #[test]
    fn refixing_reinvokes_the_generator() {
        init_test("refixing_reinvokes_the_generator");
        let calls = Rc::new(Cell::new(0));
        let deferred = counting(&calls, Fixed::full(3));

        assert_eq!(deferred.to_fixed().expect("first"), Fixed::full(3));
        assert_eq!(deferred.to_fixed().expect("second"), Fixed::full(3));
        crate::assert_with_log!(calls.get() == 2, "generator calls", 2, calls.get());
        crate::test_complete!("refixing_reinvokes_the_generator");
    }

    #[test]
    fn clones_share_the_generator_without_caching() {
        let calls = Rc::new(Cell::new(0));
        let deferred = counting(&calls, Fixed::empty());
        let copy = deferred.clone();
        assert!(!deferred.has_value().expect("first"));
        assert!(!copy.has_value().expect("second"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn value_accessors() {
        let full = Deferred::from_fixed(Fixed::full(String::from("v")));
        assert_eq!(full.value().expect("value"), "v");
        let empty = Deferred::<i32>::from_fixed(Fixed::empty());
        assert_eq!(empty.value().unwrap_err().kind(), ErrorKind::NoOptionValue);
        assert_eq!(empty.value_or_default().expect("default"), 0);
    }

    #[test]
    fn generator_errors_surface_at_fixation() {
        let failing =
            Deferred::<i32>::try_new(|| Err(Error::precondition("generator refused")));
        let err = failing.to_fixed().expect_err("generator error");
        assert_eq!(err.kind(), ErrorKind::PreconditionViolated);
    }

    #[test]
    fn deferred_single_result_reenumerates_its_sequence() {
        init_test("deferred_single_result_reenumerates_its_sequence");
        let enumerations = Rc::new(Cell::new(0));
        let seen = Rc::clone(&enumerations);
        let single = DeferredSingleResult::from_sequence_where(vec![1, 2, 3], move |x| {
            seen.set(seen.get() + 1);
            *x == 2
        });

        assert_eq!(single.quantity().expect("quantity"), Quantity::One);
        let after_first = enumerations.get();
        assert_eq!(single.value().expect("value"), 2);
        crate::assert_with_log!(
            enumerations.get() == after_first * 2,
            "predicate calls double",
            after_first * 2,
            enumerations.get()
        );
        crate::test_complete!("deferred_single_result_reenumerates_its_sequence");
    }

    #[test]
    fn deferred_single_result_degrades_lazily() {
        let many = DeferredSingleResult::from_sequence(vec![1, 2]);
        assert_eq!(many.quantity().expect("quantity"), Quantity::MoreThanOne);
        assert!(many.to_fixed().unwrap_err().is_more_than_one());

        assert_eq!(
            many.clone().replace_if_more_than_one(-1).to_fixed().expect("replace"),
            Fixed::full(-1)
        );
        assert_eq!(
            many.clone().empty_if_more_than_one().to_fixed().expect("empty"),
            Fixed::empty()
        );
        assert_eq!(
            many.default_if_more_than_one().to_fixed().expect("default"),
            Fixed::full(0)
        );
    }

    #[test]
    fn deferred_single_result_shape_reports_more_than_one() {
        let many = DeferredSingleResult::from_sequence(vec!['a', 'b']);
        assert!(matches!(
            many.to_shape().expect("shape"),
            Shape::MoreThanOne
        ));
        let zero = DeferredSingleResult::from_sequence(Vec::<char>::new());
        assert!(matches!(zero.to_shape().expect("shape"), Shape::Zero));
        assert_eq!(zero.to_fixed().expect("zero degrades"), Fixed::empty());
    }

    #[test]
    fn deferred_single_iter_runs_the_generator_on_first_advance() {
        init_test("deferred_single_iter_runs_the_generator_on_first_advance");
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let many = DeferredSingleResult::new(move || {
            counter.set(counter.get() + 1);
            SingleResult::<i32>::more_than_one(true)
        });

        let mut it = many.iter();
        crate::assert_with_log!(calls.get() == 0, "calls at creation", 0, calls.get());

        let err = it.next().expect("one item").expect_err("ambiguous");
        crate::assert_with_log!(calls.get() == 1, "calls after next", 1, calls.get());
        assert_eq!(
            err.kind(),
            ErrorKind::MoreThanOneResult(crate::error::MoreThanOneVariant::Match)
        );

        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert_eq!(calls.get(), 1);
        crate::test_complete!("deferred_single_iter_runs_the_generator_on_first_advance");
    }

    #[test]
    fn deferred_single_iter_yields_like_the_resolved_result() {
        let one = DeferredSingleResult::from_sequence_where(vec![1, 2, 3], |x| *x == 3);
        let values: Vec<i32> = one.iter().collect::<Result<_>>().expect("one value");
        assert_eq!(values, vec![3]);

        let zero = DeferredSingleResult::from_sequence(Vec::<i32>::new());
        assert_eq!((&zero).into_iter().count(), 0);

        let failing = DeferredSingleResult::<i32>::try_new(|| Err(Error::precondition("no source")));
        let mut it = failing.into_iter();
        assert_eq!(
            it.next().expect("error item").unwrap_err().kind(),
            ErrorKind::PreconditionViolated
        );
        assert!(it.next().is_none());
    }

    #[test]
    fn deferred_iter_is_lazy_and_reruns_per_iterator() {
        init_test("deferred_iter_is_lazy_and_reruns_per_iterator");
        let calls = Rc::new(Cell::new(0));
        let deferred = counting(&calls, Fixed::full(4));

        let mut first = deferred.iter();
        let second = deferred.iter();
        crate::assert_with_log!(calls.get() == 0, "calls at creation", 0, calls.get());
        assert_eq!(first.size_hint(), (0, Some(1)));

        assert_eq!(first.next().expect("item").expect("value"), 4);
        assert_eq!(calls.get(), 1);
        assert!(first.next().is_none());
        assert_eq!(first.size_hint(), (0, Some(0)));

        let rest: Vec<i32> = second.collect::<Result<_>>().expect("value");
        assert_eq!(rest, vec![4]);
        crate::assert_with_log!(calls.get() == 2, "one call per iterator", 2, calls.get());
        crate::test_complete!("deferred_iter_is_lazy_and_reruns_per_iterator");
    }

    #[test]
    fn deferred_iter_empty_and_failing() {
        let calls = Rc::new(Cell::new(0));
        let empty = counting(&calls, Fixed::empty());
        assert_eq!(empty.into_iter().count(), 0);
        assert_eq!(calls.get(), 1);

        let failing = Deferred::<i32>::try_new(|| Err(Error::precondition("generator refused")));
        let items: Vec<Result<i32>> = (&failing).into_iter().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].as_ref().unwrap_err().kind(),
            ErrorKind::PreconditionViolated
        );
    }
}
