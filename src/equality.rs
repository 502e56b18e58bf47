//! Cross-shape structural equality and hashing.
//!
//! Every comparison normalizes both operands to their canonical [`Shape`]
//! and compares there:
//!
//! | left \ right | Zero | One(b) | MoreThanOne |
//! |--------------|------|--------|-------------|
//! | Zero         | true | false  | false       |
//! | One(a)       | false| a == b | false       |
//! | MoreThanOne  | false| false  | **false**   |
//!
//! `MoreThanOne` is never equal to anything, including another
//! `MoreThanOne` and itself. Single results are therefore `PartialEq` but not
//! `Eq`.
//!
//! Hashing agrees with equality across shapes: `Empty` and `Zero` hash to
//! [`EMPTY_HASH`], `Full(v)` and `One(v)` hash like `v`, and `MoreThanOne`
//! hashes to the fixed [`MORE_THAN_ONE_HASH`] sentinel.
//!
//! The `PartialEq`/`Hash` impls cover the eager shapes. Deferred shapes must
//! be fixed first, which can fail; use [`option_eq`] and [`option_hash`].

use core::hash::{BuildHasher, Hash, Hasher};

use crate::error::Result;
use crate::fixation::Fixable;
use crate::types::{Fixed, Shape, SingleResult};
use crate::util::DetBuildHasher;

/// Hash code of every empty (`Zero`) option.
pub const EMPTY_HASH: u64 = 0;

/// Hash code of every `MoreThanOne` single result.
pub const MORE_THAN_ONE_HASH: u64 = 0x4d54_4f5f_5345_4e54;

/// Compares two canonical shapes.
///
/// `MoreThanOne` on either side yields `false`.
#[must_use]
pub fn shapes_equal<A, B>(left: Shape<&A>, right: Shape<&B>) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    match (left, right) {
        (Shape::Zero, Shape::Zero) => true,
        (Shape::One(a), Shape::One(b)) => a == b,
        _ => false,
    }
}

/// Fixes both operands to their canonical shapes and compares them.
///
/// # Errors
///
/// Any error raised while fixing either operand (for example the
/// implementation error of a misbehaving foreign sequence).
///
/// ```
/// use zero_or_one::{option_eq, Fixed, SingleExt};
///
/// let one = vec![1, 2, 3].single_result_where(|x| *x == 2);
/// assert!(option_eq(&one, &Fixed::full(2)).unwrap());
///
/// let many = vec![1, 2, 3].single_result();
/// assert!(!option_eq(&many, &many).unwrap());
/// ```
pub fn option_eq<A, B>(left: &A, right: &B) -> Result<bool>
where
    A: Fixable + ?Sized,
    B: Fixable + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    let left = left.to_shape()?;
    let right = right.to_shape()?;
    Ok(shapes_equal(left.as_ref(), right.as_ref()))
}

/// Deterministic hash code of any option shape.
///
/// Stable across runs and processes; consistent with [`option_eq`].
///
/// # Errors
///
/// Any error raised while fixing the operand.
pub fn option_hash<O>(option: &O) -> Result<u64>
where
    O: Fixable + ?Sized,
    O::Item: Hash,
{
    Ok(shape_hash(option.to_shape()?.as_ref()))
}

fn shape_hash<T: Hash + ?Sized>(shape: Shape<&T>) -> u64 {
    match shape {
        Shape::Zero => EMPTY_HASH,
        Shape::One(value) => DetBuildHasher.hash_one(value),
        Shape::MoreThanOne => MORE_THAN_ONE_HASH,
    }
}

impl<T: Hash> Hash for Shape<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Zero => state.write_u64(EMPTY_HASH),
            Self::One(value) => value.hash(state),
            Self::MoreThanOne => state.write_u64(MORE_THAN_ONE_HASH),
        }
    }
}

impl<T: PartialEq> PartialEq for Shape<T> {
    fn eq(&self, other: &Self) -> bool {
        shapes_equal(self.as_ref(), other.as_ref())
    }
}

impl<T: PartialEq> PartialEq for Fixed<T> {
    fn eq(&self, other: &Self) -> bool {
        shapes_equal(Shape::from(self.as_ref()), Shape::from(other.as_ref()))
    }
}

impl<T: Eq> Eq for Fixed<T> {}

impl<T: Hash> Hash for Fixed<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Shape::from(self.as_ref()).hash(state);
    }
}

impl<T: PartialEq> PartialEq for SingleResult<T> {
    fn eq(&self, other: &Self) -> bool {
        shapes_equal(self.shape().as_ref(), other.shape().as_ref())
    }
}

impl<T: PartialEq> PartialEq<Fixed<T>> for SingleResult<T> {
    fn eq(&self, other: &Fixed<T>) -> bool {
        shapes_equal(self.shape().as_ref(), Shape::from(other.as_ref()))
    }
}

impl<T: PartialEq> PartialEq<SingleResult<T>> for Fixed<T> {
    fn eq(&self, other: &SingleResult<T>) -> bool {
        shapes_equal(Shape::from(self.as_ref()), other.shape().as_ref())
    }
}

impl<T: Hash> Hash for SingleResult<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
    }
}
