//! `Zfgx = f(gx)` for every composition route.

use proptest::prelude::*;
use sc_basis::function::Fun;
use sc_basis::verify::{composition_family, triple, COMPOSITION_ROUTES};

use crate::common::{affine, head, small, uppercase, word};

const MEMBERS: usize = COMPOSITION_ROUTES + 1;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn composition_applies_g_then_f(
        a in -30i64..30,
        b in small(),
        c in -30i64..30,
        d in small(),
        x in small(),
    ) {
        let f = affine(a, b);
        let g = affine(c, d);
        let expected = a * (c * x + d) + b;
        let family = composition_family::<i64, i64, i64>();
        let probe = triple::<Fun<i64, i64>, Fun<i64, i64>, i64, i64>(f, g, x);
        prop_assert_eq!(family.check(probe, &expected), Ok(MEMBERS));
    }

    #[test]
    fn composition_on_words(s in word()) {
        let expected: String = s.chars().take(2).collect::<String>().to_uppercase();
        let family = composition_family::<String, String, String>();
        let probe = triple::<Fun<String, String>, Fun<String, String>, String, String>(
            uppercase(),
            head(),
            s,
        );
        prop_assert_eq!(family.check(probe, &expected), Ok(MEMBERS));
    }

    #[test]
    fn composition_changes_type_twice(s in word()) {
        let count = Fun::new(|s: String| s.chars().count());
        let even = Fun::new(|n: usize| n % 2 == 0);
        let expected = s.chars().count() % 2 == 0;
        let family = composition_family::<String, usize, bool>();
        let probe = triple::<Fun<usize, bool>, Fun<String, usize>, String, bool>(even, count, s);
        prop_assert_eq!(family.check(probe, &expected), Ok(MEMBERS));
    }
}
