//! Combinators over zero-or-one options.
//!
//! This module provides:
//!
//! - [`compose()`]: the single composition primitive every operator reduces to
//! - [`ops`]: derived operators (`map`, `filter`, `and_then`, `zip`, ...)
//! - [`single`]: single-element filters over sequences
//! - [`laws`]: the law sheet the operators commit to

pub mod compose;
pub mod laws;
pub mod ops;
pub mod single;

pub use compose::{compose, compose_single, try_compose};
pub use laws::{Law, LawClassification, LawEntry, conditional_laws, law_sheet, unconditional_laws};
pub use ops::OptionExt;
pub use single::{SingleExt, single_of, single_where};
