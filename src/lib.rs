//! Zero-or-one option types with a single composition primitive.
//!
//! # Shapes
//!
//! - [`Fixed`]: an option resolved up front, `Empty` or `Full(v)`
//! - [`Deferred`]: an option recomputed by a generator on every request
//! - [`SingleResult`]: the result of a single-element filter, `Zero`, `One(v)`
//!   or `MoreThanOne`
//! - [`DeferredSingleResult`]: the lazily re-evaluated form of the above
//!
//! Every shape implements [`Fixable`], which reduces it to a [`Fixed`]
//! ("fixation"). Foreign sequences that claim to hold zero or one element
//! can join in through [`Foreign`] and [`fix_sequence`].
//!
//! # Composition
//!
//! All operators in [`OptionExt`] are [`compose()`] applied to a
//! fixed-to-fixed function, and obey the laws in [`combinator::laws`].
//! Nothing is cached: fixing a deferred option twice runs its generators
//! twice.
//!
//! ```
//! use zero_or_one::{Fixed, OptionExt, SingleExt};
//!
//! let found = vec![3, 8, 11]
//!     .single_result_where(|x| x % 2 == 0)
//!     .map(|x| x * 10);
//! assert_eq!(found.to_fixed().unwrap(), Fixed::full(80));
//!
//! let ambiguous = vec![3, 8, 12].single_result_where(|x| x % 2 == 0);
//! assert!(ambiguous.to_fixed().unwrap_err().is_more_than_one());
//! assert_eq!(ambiguous.empty_if_more_than_one(), Fixed::empty());
//! ```
//!
//! # Equality
//!
//! Equality is structural across shapes ([`equality`]). A `MoreThanOne`
//! result is never equal to anything, itself included.
//!
//! # Feature flags
//!
//! - `tracing-integration` (default): emit `tracing` events from fixation
//!   and degrade paths. Without it the logging macros compile to nothing.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod combinator;
pub mod deferred;
pub mod equality;
pub mod erased;
pub mod error;
pub mod fixation;
pub mod types;
pub mod util;

#[cfg(test)]
mod test_utils;
mod tracing_compat;

pub use combinator::{
    OptionExt, SingleExt, compose, compose_single, single_of, single_where, try_compose,
};
pub use deferred::{Deferred, DeferredIter, DeferredSingleIter, DeferredSingleResult};
pub use equality::{EMPTY_HASH, MORE_THAN_ONE_HASH, option_eq, option_hash, shapes_equal};
pub use erased::AnyOption;
pub use error::{Error, ErrorCategory, ErrorKind, MoreThanOneVariant, Result};
pub use fixation::{Fixable, Foreign, SingleFixable, fix, fix_sequence};
pub use types::{Fixed, Quantity, Shape, SingleResult};
