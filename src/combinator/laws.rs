//! Composition and equality laws for zero-or-one options.
//!
//! This module is the **law sheet** for the option algebra: every law the
//! combinators, the fixation protocol and the equality relation commit to.
//! New operators must be expressible through [`compose`](crate::compose())
//! without violating them.
//!
//! # Law Classification
//!
//! - **Unconditional**: holds for every input and every function.
//! - **Conditional on purity**: holds at the value level only when the
//!   functions involved are deterministic and side-effect free. The
//!   structural part (how often a source is fixed) still holds
//!   unconditionally.
//! - **Deliberate**: intentionally breaks a conventional algebraic
//!   property. Callers must not assume the property.
//!
//! # Law Sheet
//!
//! ## Fixation
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | FIX-IDENTITY | `fix(Fixed x) = Fixed x` | Unconditional |
//! | FIX-FALLBACK | A foreign sequence with a second element fails with the implementation error | Unconditional |
//! | FIX-CURSOR | The foreign cursor is advanced at most twice and released on every path | Unconditional |
//! | NO-MEMO | Every fixation of a deferred option re-runs its generator chain | Unconditional |
//!
//! ## Composition
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | COMPOSE-IDENTITY | `fix(compose(o, id)) = fix(o)` | Unconditional |
//! | COMPOSE-FUSION | `compose(compose(o, f), g) ≃ compose(o, g ∘ f)` | Conditional on purity |
//! | COMPOSE-ONCE | `compose(compose(o, f), g)` fixes `o` once per fixation | Unconditional |
//! | MAP-FUSION | `map(map(o, f), g) ≃ map(o, g ∘ f)` | Conditional on purity |
//! | FILTER-CONJ | `filter(filter(o, p), q) ≃ filter(o, p ∧ q)` | Conditional on purity |
//!
//! ## Single results
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | SCAN-SHORT | A single-element scan stops at the second match | Unconditional |
//! | DEGRADE-TOTAL | `*_if_more_than_one` never fails with `MoreThanOneResult` | Unconditional |
//!
//! ## Equality
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | EQ-CANONICAL | Two options are equal iff their canonical shapes are `Zero`/`Zero` or `One(a)`/`One(b)` with `a = b` | Unconditional |
//! | EQ-SYMMETRIC | `a = b ⇔ b = a` across shapes | Unconditional |
//! | EQ-MTO-IRREFLEXIVE | `MoreThanOne ≠ x` for every `x`, including itself | Deliberate |
//! | HASH-CONSISTENT | `a = b ⇒ hash(a) = hash(b)` | Unconditional |
//!
//! EQ-MTO-IRREFLEXIVE makes equality a partial equivalence: single results
//! implement `PartialEq` but not `Eq`, and must not be used as hash-map keys
//! when they can hold `MoreThanOne`.

/// Every committed law, identified by name.
///
/// Each variant maps to a row in the law table above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    // --- Fixation ---
    /// `fix(Fixed x) = Fixed x`.
    FixIdentity,
    /// A second foreign element is an implementation error.
    FixFallbackImplementationError,
    /// The foreign cursor is advanced at most twice and always released.
    FixCursorBounded,
    /// Deferred options never cache.
    NoMemoization,

    // --- Composition ---
    /// `fix(compose(o, id)) = fix(o)`.
    ComposeIdentity,
    /// `compose(compose(o, f), g) ≃ compose(o, g ∘ f)`.
    ComposeFusion,
    /// Nested composition fixes the source once per outer fixation.
    ComposeFixesSourceOnce,
    /// `map(map(o, f), g) ≃ map(o, g ∘ f)`.
    MapFusion,
    /// `filter(filter(o, p), q) ≃ filter(o, p ∧ q)`.
    FilterConjunction,

    // --- Single results ---
    /// Single-element scans stop at the second match.
    ScanShortCircuit,
    /// The non-failing degraders are total.
    DegradeTotal,

    // --- Equality ---
    /// Equality is decided on canonical shapes.
    EqualityCanonical,
    /// Cross-shape equality is symmetric.
    EqualitySymmetric,
    /// `MoreThanOne` is unequal to everything, itself included.
    MoreThanOneIrreflexive,
    /// Equal options hash equally.
    HashConsistent,
}

/// How broadly a law applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawClassification {
    /// Holds for all inputs and all functions.
    Unconditional,
    /// Holds at the value level only for deterministic, side-effect-free
    /// functions.
    ConditionalOnPurity,
    /// Intentionally breaks a conventional algebraic property.
    Deliberate,
}

/// A single entry in the law sheet: name, classification, and description.
#[derive(Debug, Clone)]
pub struct LawEntry {
    /// The law identifier.
    pub law: Law,
    /// How broadly the law applies.
    pub classification: LawClassification,
    /// Human-readable statement of the law.
    pub statement: &'static str,
}

/// The complete law sheet.
#[must_use]
pub fn law_sheet() -> Vec<LawEntry> {
    vec![
        // Fixation
        LawEntry {
            law: Law::FixIdentity,
            classification: LawClassification::Unconditional,
            statement: "fix(Fixed x) = Fixed x",
        },
        LawEntry {
            law: Law::FixFallbackImplementationError,
            classification: LawClassification::Unconditional,
            statement: "a foreign sequence yielding a second element fails with \
                        OptionEnumeratorMoreThanOneElement, never MoreThanOneResult",
        },
        LawEntry {
            law: Law::FixCursorBounded,
            classification: LawClassification::Unconditional,
            statement: "the foreign cursor is advanced at most twice and released on every path",
        },
        LawEntry {
            law: Law::NoMemoization,
            classification: LawClassification::Unconditional,
            statement: "every fixation of a deferred option re-runs its generator chain",
        },
        // Composition
        LawEntry {
            law: Law::ComposeIdentity,
            classification: LawClassification::Unconditional,
            statement: "fix(compose(o, id)) = fix(o)",
        },
        LawEntry {
            law: Law::ComposeFusion,
            classification: LawClassification::ConditionalOnPurity,
            statement: "compose(compose(o, f), g) fixes to the same value as compose(o, g . f)",
        },
        LawEntry {
            law: Law::ComposeFixesSourceOnce,
            classification: LawClassification::Unconditional,
            statement: "compose(compose(o, f), g) fixes o exactly once per fixation",
        },
        LawEntry {
            law: Law::MapFusion,
            classification: LawClassification::ConditionalOnPurity,
            statement: "map(map(o, f), g) fixes to the same value as map(o, g . f)",
        },
        LawEntry {
            law: Law::FilterConjunction,
            classification: LawClassification::ConditionalOnPurity,
            statement: "filter(filter(o, p), q) fixes to the same value as filter(o, p && q)",
        },
        // Single results
        LawEntry {
            law: Law::ScanShortCircuit,
            classification: LawClassification::Unconditional,
            statement: "a single-element scan inspects no element after the second match",
        },
        LawEntry {
            law: Law::DegradeTotal,
            classification: LawClassification::Unconditional,
            statement: "replace/empty/default_if_more_than_one never fail with MoreThanOneResult",
        },
        // Equality
        LawEntry {
            law: Law::EqualityCanonical,
            classification: LawClassification::Unconditional,
            statement: "a = b iff both are Zero, or both are One with equal values",
        },
        LawEntry {
            law: Law::EqualitySymmetric,
            classification: LawClassification::Unconditional,
            statement: "a = b iff b = a, across Fixed and SingleResult",
        },
        LawEntry {
            law: Law::MoreThanOneIrreflexive,
            classification: LawClassification::Deliberate,
            statement: "MoreThanOne != x for every x, including MoreThanOne itself",
        },
        LawEntry {
            law: Law::HashConsistent,
            classification: LawClassification::Unconditional,
            statement: "a = b implies hash(a) = hash(b)",
        },
    ]
}

/// Returns only the unconditional laws from the sheet.
#[must_use]
pub fn unconditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification == LawClassification::Unconditional)
        .collect()
}

/// Returns the laws that do not hold for every input.
#[must_use]
pub fn conditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification != LawClassification::Unconditional)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
