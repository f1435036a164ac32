//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. Besides a few
//! sample functions it holds deliberately wrong members: each has the right
//! type for its family and the wrong behaviour, so a harness run that includes
//! one has to fail.

#![doc(hidden)]

use crate::curried;
use crate::function::{Binary, Fun, Value};
use crate::verify::{CompositionFn, DuplicatorFn, InterchangeFn};

/// `x - y`, for probing argument order.
pub fn minus() -> Binary<i64, i64, i64> {
    curried!(|x: i64, y: i64| x - y)
}

/// `x ++ y`.
pub fn join() -> Binary<String, String, String> {
    curried!(|x: String, y: String| format!("{x}{y}"))
}

/// A function that always answers `n`, for carrying functions as values.
pub fn always(n: u8) -> Fun<(), u8> {
    Fun::new(move |_| n)
}

/// Claims to be `T` but passes `y` and `x` straight through. Only type-checks
/// when both arguments share a type, which is exactly where it goes unnoticed.
pub fn unswapped<A: Value, C: Value>() -> InterchangeFn<A, A, C> {
    curried!(|f: Binary<A, A, C>, y: A, x: A| f.apply(y).apply(x))
}

/// Claims to be `Z` but runs `f` first.
pub fn reversed<A: Value>() -> CompositionFn<A, A, A> {
    curried!(|f: Fun<A, A>, g: Fun<A, A>, x: A| g.apply(f.apply(x)))
}

/// Claims to be `W` but fills the second slot with `A::default()`.
pub fn half_duplicated<A: Value + Default, B: Value>() -> DuplicatorFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| f.apply(x).apply(A::default()))
}
