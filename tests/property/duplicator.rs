//! `Wfx = fxx` for every duplicator route.

use proptest::prelude::*;
use sc_basis::function::Binary;
use sc_basis::verify::{duplicator_family, vireo, DUPLICATOR_ROUTES};

use crate::common::{join, small, word};

const MEMBERS: usize = DUPLICATOR_ROUTES + 1;

proptest! {
    // Each duplicator family builds the fully expanded T five times over.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn duplicator_feeds_both_slots(x in small()) {
        let f: Binary<i64, i64, i64> = sc_basis::curried!(|x: i64, y: i64| 3 * x - y);
        let family = duplicator_family::<i64, i64>();
        prop_assert_eq!(
            family.check(vireo::<Binary<i64, i64, i64>, i64, i64>(f, x), &(2 * x)),
            Ok(MEMBERS)
        );
    }

    #[test]
    fn duplicator_doubles_words(s in word()) {
        let family = duplicator_family::<String, String>();
        let expected = format!("{s}{s}");
        let probe = vireo::<Binary<String, String, String>, String, String>(join(), s);
        prop_assert_eq!(family.check(probe, &expected), Ok(MEMBERS));
    }

    #[test]
    fn duplicator_divides_nonzero_by_itself(x in 1i64..10_000) {
        let div: Binary<i64, i64, i64> = sc_basis::curried!(|x: i64, y: i64| x / y);
        let family = duplicator_family::<i64, i64>();
        prop_assert_eq!(
            family.check(vireo::<Binary<i64, i64, i64>, i64, i64>(div, -x), &1),
            Ok(MEMBERS)
        );
    }
}
