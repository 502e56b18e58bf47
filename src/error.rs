//! Error types and error handling strategy for option fixation.
//!
//! Every failure in this crate is an [`Error`] carrying an [`ErrorKind`].
//! Error handling follows these principles:
//!
//! - Errors are explicit and typed (no stringly-typed errors)
//! - Nothing is retried internally; an error is fatal to the operation
//!   that raised it
//! - Recovery is expressed by callers through the non-failing degraders
//!   (`empty_if_more_than_one` and friends)
//!
//! # Error Categories
//!
//! - **Precondition**: an invalid argument reached a public entry point
//! - **Domain**: a legitimate "no value" / "too many values" condition
//! - **Implementation**: a foreign option-shaped value broke the
//!   zero-or-one contract; this is a collaborator bug, not a domain result
//!
//! The implementation category is kept apart on purpose: a caller matching on
//! [`ErrorKind::MoreThanOneResult`] must never catch a foreign contract
//! violation by accident.

use core::fmt;
use std::sync::Arc;

/// The kind of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // === Precondition ===
    /// An argument to a public entry point was invalid.
    PreconditionViolated,

    // === Domain ===
    /// Read the value of an empty option.
    NoOptionValue,
    /// Forced a single-element extraction on an empty option.
    NoElements,
    /// Forced a single-element extraction with a predicate that matched nothing.
    NoMatch,
    /// Resolved a more-than-one single result as a plain option.
    MoreThanOneResult(MoreThanOneVariant),
    /// A branch resolver had no handler for the state it reached.
    MatchCaseFailed,

    // === Implementation ===
    /// A foreign option-shaped sequence yielded a second element.
    OptionEnumeratorMoreThanOneElement,
}

/// Wording selector for [`ErrorKind::MoreThanOneResult`].
///
/// Chosen by the `using_predicate` flag of the originating single result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoreThanOneVariant {
    /// The unfiltered source had more than one element.
    Element,
    /// More than one element matched the predicate.
    Match,
}

impl MoreThanOneVariant {
    /// Returns the variant for the given `using_predicate` flag.
    #[must_use]
    pub const fn from_predicate(using_predicate: bool) -> Self {
        if using_predicate {
            Self::Match
        } else {
            Self::Element
        }
    }
}

impl ErrorKind {
    /// Returns the error category for this kind.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::PreconditionViolated => ErrorCategory::Precondition,
            Self::NoOptionValue
            | Self::NoElements
            | Self::NoMatch
            | Self::MoreThanOneResult(_)
            | Self::MatchCaseFailed => ErrorCategory::Domain,
            Self::OptionEnumeratorMoreThanOneElement => ErrorCategory::Implementation,
        }
    }

    /// Returns the default human-readable description of this kind.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PreconditionViolated => "invalid argument",
            Self::NoOptionValue => "option has no value",
            Self::NoElements => "sequence contains no elements",
            Self::NoMatch => "sequence contains no matching element",
            Self::MoreThanOneResult(MoreThanOneVariant::Element) => {
                "sequence contains more than one element"
            }
            Self::MoreThanOneResult(MoreThanOneVariant::Match) => {
                "sequence contains more than one matching element"
            }
            Self::MatchCaseFailed => "no handler for the reached case",
            Self::OptionEnumeratorMoreThanOneElement => {
                "option enumerator yielded more than one element"
            }
        }
    }

    /// Returns the kind used when extracting from an empty source.
    #[must_use]
    pub const fn nothing_found(using_predicate: bool) -> Self {
        if using_predicate {
            Self::NoMatch
        } else {
            Self::NoElements
        }
    }
}

/// High-level error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid arguments at a call site.
    Precondition,
    /// Ordinary absence/ambiguity conditions.
    Domain,
    /// Contract violations by foreign collaborators.
    Implementation,
}

/// Details of a contract violation by a foreign option-shaped value.
///
/// Attached as the [`std::error::Error::source`] of an
/// [`ErrorKind::OptionEnumeratorMoreThanOneElement`] error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// The cursor produced a second element after the first.
    #[error("`{type_name}` yielded a second element while being fixed as an option")]
    SecondElement {
        /// Type name of the offending sequence.
        type_name: &'static str,
    },
}

/// The main error type for option operations.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Adds a message description to the error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Adds a source error to the chain.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true if this error signals a foreign contract violation.
    #[must_use]
    pub const fn is_implementation_error(&self) -> bool {
        matches!(self.kind.category(), ErrorCategory::Implementation)
    }

    /// Returns true if this is a more-than-one result error.
    #[must_use]
    pub const fn is_more_than_one(&self) -> bool {
        matches!(self.kind, ErrorKind::MoreThanOneResult(_))
    }

    /// Creates a precondition error.
    #[must_use]
    pub fn precondition(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::PreconditionViolated).with_message(detail)
    }

    /// Creates the error raised when reading an empty option.
    #[must_use]
    pub const fn no_value() -> Self {
        Self::new(ErrorKind::NoOptionValue)
    }

    /// Creates the error raised when a single extraction finds nothing.
    #[must_use]
    pub const fn nothing_found(using_predicate: bool) -> Self {
        Self::new(ErrorKind::nothing_found(using_predicate))
    }

    /// Creates the error raised when a more-than-one result is degraded.
    #[must_use]
    pub const fn more_than_one(using_predicate: bool) -> Self {
        Self::new(ErrorKind::MoreThanOneResult(
            MoreThanOneVariant::from_predicate(using_predicate),
        ))
    }

    /// Creates the error raised when a resolver has no handler for `case`.
    #[must_use]
    pub fn match_case_failed(case: &str) -> Self {
        Self::new(ErrorKind::MatchCaseFailed).with_message(format!("no handler for `{case}`"))
    }

    /// Creates the implementation error for a foreign sequence that
    /// yielded a second element.
    #[must_use]
    pub fn second_element(type_name: &'static str) -> Self {
        Self::new(ErrorKind::OptionEnumeratorMoreThanOneElement)
            .with_source(ContractViolation::SecondElement { type_name })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {msg}", self.kind.description()),
            None => f.write_str(self.kind.description()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

/// A specialized Result type for option operations.
pub type Result<T> = core::result::Result<T, Error>;
