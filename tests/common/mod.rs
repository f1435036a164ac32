//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use proptest::prelude::*;
use sc_basis::function::Fun;

// Re-export canonical test utilities from sc_basis::testing
pub use sc_basis::testing::{always, half_duplicated, join, minus, reversed, unswapped};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Integers small enough that a few products and sums stay in range.
pub fn small() -> impl Strategy<Value = i64> {
    -1_000i64..1_000
}

/// Short words, including multi-byte code points.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zäöüñ]{0,8}").unwrap()
}

// ============================================================================
// SAMPLE FUNCTIONS
// ============================================================================

/// `x ↦ a·x + b`.
pub fn affine(a: i64, b: i64) -> Fun<i64, i64> {
    Fun::new(move |x| a * x + b)
}

pub fn uppercase() -> Fun<String, String> {
    Fun::new(|s: String| s.to_uppercase())
}

/// First two code points.
pub fn head() -> Fun<String, String> {
    Fun::new(|s: String| s.chars().take(2).collect())
}
