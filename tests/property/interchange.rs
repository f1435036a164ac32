//! `Tfyx = fxy` for every interchange route.

use proptest::prelude::*;
use sc_basis::combinators::constancy;
use sc_basis::function::Binary;
use sc_basis::verify::{interchange_family, triple, INTERCHANGE_ROUTES};

use crate::common::{minus, small, word};

const MEMBERS: usize = INTERCHANGE_ROUTES + 1;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn interchange_reverses_subtraction(x in small(), y in small()) {
        let family = interchange_family::<i64, i64, i64>();
        let probe = triple::<Binary<i64, i64, i64>, i64, i64, i64>(minus(), y, x);
        prop_assert_eq!(family.check(probe, &(x - y)), Ok(MEMBERS));
    }

    /// Constancy keeps its first argument, so the answer is the value passed
    /// last. Distinct values make a route that forgets to swap visible.
    #[test]
    fn interchange_of_constancy_returns_the_last_argument(x in word(), y in word()) {
        prop_assume!(x != y);
        let family = interchange_family::<String, String, String>();
        let probe = triple::<Binary<String, String, String>, String, String, String>(
            constancy(),
            y,
            x.clone(),
        );
        prop_assert_eq!(family.check(probe, &x), Ok(MEMBERS));
    }

    #[test]
    fn interchange_across_argument_types(s in word(), n in 0usize..4) {
        let repeat: Binary<String, usize, String> =
            sc_basis::curried!(|s: String, n: usize| s.repeat(n));
        let family = interchange_family::<String, usize, String>();
        let probe =
            triple::<Binary<String, usize, String>, usize, String, String>(repeat, n, s.clone());
        prop_assert_eq!(family.check(probe, &s.repeat(n)), Ok(MEMBERS));
    }
}
