//! `Ix = x` for every identity route.

use proptest::prelude::*;
use sc_basis::function::Fun;
use sc_basis::verify::{identity_family, thrush, IDENTITY_ROUTES};

use crate::common::{always, small, word};

const MEMBERS: usize = IDENTITY_ROUTES + 1;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn identity_returns_integers(v in small()) {
        prop_assert_eq!(identity_family::<i64>().check(thrush::<i64, i64>(v), &v), Ok(MEMBERS));
    }

    #[test]
    fn identity_returns_words(s in word()) {
        let family = identity_family::<String>();
        prop_assert_eq!(family.check(thrush::<String, String>(s.clone()), &s), Ok(MEMBERS));
    }

    #[test]
    fn identity_returns_pairs(a in small(), s in word()) {
        let pair = (a, s);
        let family = identity_family::<(i64, String)>();
        prop_assert_eq!(
            family.check(thrush::<(i64, String), (i64, String)>(pair.clone()), &pair),
            Ok(MEMBERS)
        );
    }

    /// The carried value is a function; whatever comes back must still answer `n`.
    #[test]
    fn identity_returns_functions(n: u8) {
        let f = always(n);
        let family = identity_family::<Fun<(), u8>>();
        let probe = |i: &Fun<Fun<(), u8>, Fun<(), u8>>| i.apply(f.clone()).apply(());
        prop_assert_eq!(family.check(probe, &n), Ok(MEMBERS));
    }
}
