//! A wrong member in a family has to turn the check into an error.

use sc_basis::combinators::constancy;
use sc_basis::function::{Binary, Fun};
use sc_basis::verify::{
    composition_family, duplicator_family, interchange_family, triple, vireo, InterchangeFn,
    VerificationError,
};

use crate::common::{half_duplicated, join, reversed, unswapped};

type Swap = InterchangeFn<String, String, String>;

fn swap_with(y: &str, x: &str) -> impl Fn(&Swap) -> String {
    triple::<Binary<String, String, String>, String, String, String>(
        constancy(),
        y.to_string(),
        x.to_string(),
    )
}

// ============================================================================
// INTERCHANGE
// ============================================================================

#[test]
fn test_swap_that_does_not_swap_is_named() {
    let family =
        interchange_family::<String, String, String>().with("unswapped", "fyx", unswapped());
    let err = family.check(swap_with("y", "x"), &"x".to_string()).unwrap_err();

    assert_eq!(
        err,
        VerificationError::Mismatch {
            family: "interchange",
            member: "unswapped",
            formula: "fyx",
            expected: "\"x\"".to_string(),
            actual: "\"y\"".to_string(),
        }
    );
    assert!(err.to_string().contains("unswapped"));
}

#[test]
fn test_swap_that_does_not_swap_hides_behind_equal_arguments() {
    let family =
        interchange_family::<String, String, String>().with("unswapped", "fyx", unswapped());
    assert_eq!(family.check(swap_with(".", "."), &".".to_string()), Ok(10));
}

#[test]
fn test_broken_member_placed_mid_family_stops_the_fold() {
    // Wrong member first, correct duplicates after: the fold must stop at it.
    let family = interchange_family::<String, String, String>()
        .with("unswapped", "fyx", unswapped())
        .with("again", "T", sc_basis::combinators::interchange());
    let err = family.check(swap_with("y", "x"), &"x".to_string()).unwrap_err();
    assert_eq!(err.member(), "unswapped");
}

// ============================================================================
// COMPOSITION AND DUPLICATOR
// ============================================================================

#[test]
fn test_reversed_composition_is_caught() {
    let family = composition_family::<i32, i32, i32>().with("reversed", "g(fx)", reversed());
    let inc = Fun::new(|n: i32| n + 1);
    let dbl = Fun::new(|n: i32| n * 2);
    let probe = triple::<Fun<i32, i32>, Fun<i32, i32>, i32, i32>(inc, dbl, 5);

    match family.check(probe, &11) {
        Err(VerificationError::Mismatch { member, actual, .. }) => {
            assert_eq!(member, "reversed");
            assert_eq!(actual, "12");
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }
}

#[test]
fn test_half_duplicated_is_caught() {
    let family = duplicator_family::<String, String>().with("half", "fx0", half_duplicated());
    let probe = vireo::<Binary<String, String, String>, String, String>(join(), "ab".into());
    let err = family.check(probe, &"abab".to_string()).unwrap_err();
    assert_eq!(err.member(), "half");
    assert_eq!(err.family(), "duplicator");
}

// ============================================================================
// ORACLE
// ============================================================================

#[test]
fn test_wrong_expected_value_blames_the_oracle() {
    let family = interchange_family::<String, String, String>();
    let err = family.check(swap_with("y", "x"), &"y".to_string()).unwrap_err();
    assert!(matches!(err, VerificationError::OracleMismatch { member: "T", .. }));
}
