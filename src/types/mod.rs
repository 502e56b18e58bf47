//! Core option types.
//!
//! - [`fixed`]: the immediately-resolved option, canonical for all shapes
//! - [`shape`]: the `Zero | One | MoreThanOne` canonical form and [`Quantity`]
//! - [`single`]: the three-state single-result option
//! - [`matching`]: branch resolvers with optional handlers

pub mod fixed;
pub mod matching;
pub mod shape;
pub mod single;

pub use fixed::Fixed;
pub use matching::{FixedMatch, SingleMatch};
pub use shape::{Quantity, Shape};
pub use single::{SingleIter, SingleResult};
