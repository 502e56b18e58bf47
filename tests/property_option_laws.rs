//! Property-based tests for the option algebra.
//!
//! Verifies the composition laws (identity, fusion, single source fixation)
//! and the cross-shape equality relation (symmetry, hash consistency, the
//! never-equal `MoreThanOne` state) using proptest.

#[macro_use]
mod common;
use common::*;

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use zero_or_one::{
    Deferred, Fixed, OptionExt, SingleExt, SingleResult, compose, option_eq, option_hash,
};

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_fixed() -> impl Strategy<Value = Fixed<i32>> {
    prop_oneof![
        Just(Fixed::Empty),
        (-100..100_i32).prop_map(Fixed::Full),
    ]
}

fn arb_single() -> impl Strategy<Value = SingleResult<i32>> {
    (any::<bool>(), prop_oneof![
        Just(None),
        (-100..100_i32).prop_map(|v| Some(Some(v))),
        Just(Some(None)),
    ])
        .prop_map(|(using_predicate, state)| match state {
            None => SingleResult::zero(using_predicate),
            Some(Some(v)) => SingleResult::one(v, using_predicate),
            Some(None) => SingleResult::more_than_one(using_predicate),
        })
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Add(i32),
    Mul(i32),
    KeepEven,
    KeepAbove(i32),
}

impl Step {
    fn apply(self, fixed: Fixed<i32>) -> Fixed<i32> {
        match self {
            Self::Add(n) => fixed.map(|v| v.wrapping_add(n)),
            Self::Mul(n) => fixed.map(|v| v.wrapping_mul(n)),
            Self::KeepEven => fixed.filter(|v| v % 2 == 0),
            Self::KeepAbove(n) => fixed.filter(|v| *v > n),
        }
    }
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-10..10_i32).prop_map(Step::Add),
        (-3..4_i32).prop_map(Step::Mul),
        Just(Step::KeepEven),
        (-50..50_i32).prop_map(Step::KeepAbove),
    ]
}

fn counted(calls: &Rc<Cell<usize>>, fixed: Fixed<i32>) -> Deferred<i32> {
    let calls = Rc::clone(calls);
    Deferred::new(move || {
        calls.set(calls.get() + 1);
        fixed
    })
}

// ============================================================================
// Composition laws
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// compose(o, id) fixes to fix(o).
    #[test]
    fn compose_identity(fixed in arb_fixed()) {
        let composed = compose(fixed, |x| x);
        prop_assert_eq!(composed.to_fixed().unwrap(), fixed);
    }

    /// compose(compose(o, f), g) fixes to compose(o, g . f), and both fix
    /// the source exactly once.
    #[test]
    fn compose_fusion(fixed in arb_fixed(), f in arb_step(), g in arb_step()) {
        let calls = Rc::new(Cell::new(0));
        let nested = compose(compose(counted(&calls, fixed), move |x| f.apply(x)), move |x| g.apply(x));
        let nested_value = nested.to_fixed().unwrap();
        prop_assert_eq!(calls.get(), 1);

        let fused = compose(counted(&calls, fixed), move |x| g.apply(f.apply(x)));
        let fused_value = fused.to_fixed().unwrap();
        prop_assert_eq!(calls.get(), 2);
        prop_assert_eq!(nested_value, fused_value);
    }

    /// A chain of derived operators fixes its source once per fixation,
    /// however long the chain.
    #[test]
    fn operator_chain_fixes_source_once(fixed in arb_fixed(), steps in prop::collection::vec(arb_step(), 1..8)) {
        let calls = Rc::new(Cell::new(0));
        let mut chained = counted(&calls, fixed);
        for step in &steps {
            let step = *step;
            chained = chained.transform(move |x| step.apply(x));
        }
        let expected = steps.iter().fold(fixed, |acc, step| step.apply(acc));
        prop_assert_eq!(chained.to_fixed().unwrap(), expected);
        prop_assert_eq!(calls.get(), 1);
        chained.to_fixed().unwrap();
        prop_assert_eq!(calls.get(), 2);
    }

    /// Lazy map agrees with eager map.
    #[test]
    fn lazy_map_matches_eager(fixed in arb_fixed(), n in -10..10_i32) {
        let lazy = OptionExt::map(fixed, move |v| v.wrapping_add(n));
        prop_assert_eq!(lazy.to_fixed().unwrap(), fixed.map(|v| v.wrapping_add(n)));
    }
}

// ============================================================================
// Single-element scans
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The scan's quantity matches the number of matching elements, capped
    /// at two.
    #[test]
    fn scan_quantity_matches_count(items in prop::collection::vec(-5..5_i32, 0..12), target in -5..5_i32) {
        let matches = items.iter().filter(|v| **v == target).count();
        let single = items.single_result_where(|v| *v == target);
        match matches {
            0 => prop_assert!(single.to_fixed().unwrap().is_empty()),
            1 => prop_assert_eq!(single.to_fixed().unwrap(), Fixed::full(target)),
            _ => prop_assert!(single.to_fixed().unwrap_err().is_more_than_one()),
        }
    }
}

// ============================================================================
// Equality algebra
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Fixed equality agrees with the std Option it converts to.
    #[test]
    fn fixed_equality_is_structural(a in arb_fixed(), b in arb_fixed()) {
        let std_eq = a.into_option() == b.into_option();
        prop_assert_eq!(a == b, std_eq);
    }

    /// Cross-shape equality is symmetric.
    #[test]
    fn equality_symmetric(a in arb_single(), b in arb_fixed(), c in arb_single()) {
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(a == c, c == a);
        prop_assert_eq!(option_eq(&a, &b).unwrap(), option_eq(&b, &a).unwrap());
    }

    /// Equal options hash equally.
    #[test]
    fn hash_consistent(a in arb_single(), b in arb_fixed()) {
        if a == b {
            prop_assert_eq!(option_hash(&a).unwrap(), option_hash(&b).unwrap());
        }
    }

    /// MoreThanOne is never equal to anything, itself included.
    #[test]
    fn more_than_one_never_equal(using_predicate in any::<bool>(), other in arb_single(), fixed in arb_fixed()) {
        let many = SingleResult::<i32>::more_than_one(using_predicate);
        prop_assert!(!option_eq(&many, &many).unwrap());
        prop_assert!(many != other);
        prop_assert!(other != many);
        prop_assert!(many != fixed);
    }
}

#[test]
fn more_than_one_equality_is_deliberately_false() {
    init_test("more_than_one_equality_is_deliberately_false");
    let first = vec![1, 2, 3].single_result();
    let second = vec![1, 2, 3].single_result();
    let equal = first == second;
    assert_with_log!(!equal, "identical sources", false, equal);
    test_complete!("more_than_one_equality_is_deliberately_false");
}
