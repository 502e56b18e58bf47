//! Type-erased option facade.
//!
//! [`AnyOption`] holds any option shape behind a type tag, for boundaries
//! that cannot name the item type statically (heterogeneous collections,
//! plugin registries). The item type is checked at the downcast, and
//! fixation applies the usual priority order: a stored [`Fixed`] is returned
//! as-is, anything else goes through its own fixation.

use core::any::{Any, TypeId};
use core::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::fixation::{Fixable, Foreign};
use crate::tracing_compat::trace;
use crate::types::Fixed;

trait ErasedFixable {
    fn as_any(&self) -> &dyn Any;
    fn fix_boxed(&self) -> Result<Box<dyn Any>>;
    fn has_value(&self) -> Result<bool>;
}

struct Erased<O>(O);

impl<O> ErasedFixable for Erased<O>
where
    O: Fixable + 'static,
    O::Item: 'static,
{
    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn fix_boxed(&self) -> Result<Box<dyn Any>> {
        Ok(Box::new(self.0.to_fixed()?))
    }

    fn has_value(&self) -> Result<bool> {
        Ok(self.0.to_fixed()?.has_value())
    }
}

/// An option whose item type is only known at runtime.
///
/// ```
/// use zero_or_one::{AnyOption, Fixed, SingleResult};
///
/// let options = vec![
///     AnyOption::new(Fixed::full(1_i32)),
///     AnyOption::new(SingleResult::one(2_i32, false)),
///     AnyOption::new(Some("three")),
/// ];
/// assert_eq!(options[1].fix::<i32>().unwrap(), Fixed::full(2));
/// assert!(options[2].fix::<i32>().is_err());
/// ```
#[derive(Clone)]
pub struct AnyOption {
    inner: Rc<dyn ErasedFixable>,
    item_type: TypeId,
    item_type_name: &'static str,
    shape_name: &'static str,
}

impl AnyOption {
    /// Erases an option shape.
    #[must_use]
    pub fn new<O>(option: O) -> Self
    where
        O: Fixable + 'static,
        O::Item: 'static,
    {
        Self {
            inner: Rc::new(Erased(option)),
            item_type: TypeId::of::<O::Item>(),
            item_type_name: core::any::type_name::<O::Item>(),
            shape_name: core::any::type_name::<O>(),
        }
    }

    /// Erases a foreign sequence that claims to hold zero or one element.
    #[must_use]
    pub fn from_sequence<S>(sequence: S) -> Self
    where
        S: Clone + IntoIterator + 'static,
        S::Item: 'static,
    {
        Self::new(Foreign::new(sequence))
    }

    /// Returns `true` if the item type is `T`.
    #[must_use]
    pub fn holds<T: 'static>(&self) -> bool {
        self.item_type == TypeId::of::<T>()
    }

    /// Returns the item type name.
    #[must_use]
    pub const fn item_type_name(&self) -> &'static str {
        self.item_type_name
    }

    /// Returns the type name of the erased shape.
    #[must_use]
    pub const fn shape_name(&self) -> &'static str {
        self.shape_name
    }

    /// Fixes the erased option as an option of `T`.
    ///
    /// # Errors
    ///
    /// `PreconditionViolated` if the item type is not `T`; otherwise whatever
    /// fixing the erased shape raises.
    pub fn fix<T: Clone + 'static>(&self) -> Result<Fixed<T>> {
        if !self.holds::<T>() {
            return Err(self.type_mismatch::<T>());
        }
        if let Some(fixed) = self.inner.as_any().downcast_ref::<Fixed<T>>() {
            trace!(shape = self.shape_name, "erased option is already fixed");
            return Ok(fixed.clone());
        }
        self.inner
            .fix_boxed()?
            .downcast::<Fixed<T>>()
            .map(|fixed| *fixed)
            .map_err(|_| self.type_mismatch::<T>())
    }

    /// Fixes the erased option and reports whether it holds a value.
    ///
    /// # Errors
    ///
    /// Whatever fixing the erased shape raises.
    pub fn has_value(&self) -> Result<bool> {
        self.inner.has_value()
    }

    fn type_mismatch<T>(&self) -> Error {
        Error::precondition(format!(
            "option of `{}` requested as option of `{}`",
            self.item_type_name,
            core::any::type_name::<T>()
        ))
    }
}

impl fmt::Debug for AnyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOption")
            .field("item_type", &self.item_type_name)
            .field("shape", &self.shape_name)
            .finish_non_exhaustive()
    }
}
