//! The primitives against plain Rust: each law written out by hand.

use proptest::prelude::*;
use sc_basis::combinators::{composition, constancy, duplicator, fusion, identity, interchange};
use sc_basis::function::Fun;

use crate::common::{affine, minus, small, word};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn identity_law(s in word()) {
        prop_assert_eq!(identity::<String>().apply(s.clone()), s);
    }

    #[test]
    fn constancy_law(x in small(), y in word()) {
        prop_assert_eq!(constancy::<i64, String>().apply(x).apply(y), x);
    }

    #[test]
    fn interchange_law(x in small(), y in small()) {
        prop_assert_eq!(interchange::<i64, i64, i64>().apply(minus()).apply(y).apply(x), x - y);
    }

    #[test]
    fn composition_law(a in -30i64..30, b in small(), x in small()) {
        let f = affine(a, b);
        let g = Fun::new(|n: i64| n - 7);
        prop_assert_eq!(
            composition::<i64, i64, i64>().apply(f).apply(g).apply(x),
            a * (x - 7) + b
        );
    }

    #[test]
    fn fusion_law(x in small()) {
        let g = Fun::new(|n: i64| n * n);
        prop_assert_eq!(fusion::<i64, i64, i64>().apply(minus()).apply(g).apply(x), x - x * x);
    }

    #[test]
    fn duplicator_law(x in small()) {
        prop_assert_eq!(duplicator::<i64, i64>().apply(minus()).apply(x), 0);
    }

    /// `SCC` reaches the same value as `I` with nothing but `S` and `C`.
    #[test]
    fn fusion_of_constancies_is_identity(x in small()) {
        let scc = fusion::<i64, Fun<i64, i64>, i64>()
            .apply(constancy::<i64, Fun<i64, i64>>())
            .apply(constancy::<i64, i64>());
        prop_assert_eq!(scc.apply(x), identity::<i64>().apply(x));
    }
}
