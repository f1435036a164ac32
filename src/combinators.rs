// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The six primitive combinators.
//!
//! Each function here is a factory: it takes no runtime arguments and returns
//! the combinator as a curried [`Fun`]. These are the direct, one-line
//! definitions and they act as the oracle for every alternate derivation in
//! [`crate::derive`].
//!
//! | Factory        | Letter | Law               |
//! |----------------|--------|-------------------|
//! | `identity`     | `I`    | `Ix = x`          |
//! | `constancy`    | `C`    | `Cxy = x`         |
//! | `interchange`  | `T`    | `Tfyx = fxy`      |
//! | `composition`  | `Z`    | `Zfgx = f(gx)`    |
//! | `fusion`       | `S`    | `Sfgx = fx(gx)`   |
//! | `duplicator`   | `W`    | `Wfx = fxx`       |
//!
//! The letters follow Schönfinkel ("On the building blocks of mathematical
//! logic"). Curry and Feys write `K`, `C`, `B` for constancy, interchange and
//! composition; the duplicator `W` is theirs.

use crate::curried;
use crate::function::{Binary, Fun, Ternary, Value};

/// `I`: returns its argument unchanged.
///
/// `Ix = Cxx = (Cx)(Cx) = SCCx`, so `I = SCC`.
pub fn identity<A: Value>() -> Fun<A, A> {
    Fun::new(|x| x)
}

/// `C`: given `x`, returns a function that ignores its argument and yields `x`.
pub fn constancy<A: Value, B: Value>() -> Binary<A, B, A> {
    curried!(|x: A, _y: B| x)
}

/// `T`: swaps the two arguments of a curried binary function.
///
/// `Tfyx = fxy`. Derived from the basis as `T = S(ZZS)(CC)`.
pub fn interchange<A: Value, B: Value, C: Value>() -> Ternary<Binary<A, B, C>, B, A, C> {
    curried!(|f: Binary<A, B, C>, y: B, x: A| f.apply(x).apply(y))
}

/// `Z`: chains two unary functions, right one first.
///
/// `Zfgx = f(gx)`. Derived from the basis as `Z = S(CS)C`.
pub fn composition<A: Value, B: Value, C: Value>() -> Ternary<Fun<B, C>, Fun<A, B>, A, C> {
    curried!(|f: Fun<B, C>, g: Fun<A, B>, x: A| f.apply(g.apply(x)))
}

/// `S`: feeds one argument to both `f` and `g`, then applies `f`'s result to
/// `g`'s.
///
/// `Sfgx = fx(gx)`.
pub fn fusion<A: Value, B: Value, C: Value>() -> Ternary<Binary<A, B, C>, Fun<A, B>, A, C> {
    curried!(|f: Binary<A, B, C>, g: Fun<A, B>, x: A| f.apply(x.clone()).apply(g.apply(x)))
}

/// `W`: applies a binary function with its single argument in both positions.
///
/// `Wfx = fxx`. Derived from the basis as `W = SS(SC)`, and via interchange as
/// `W = T(S(TT)(TT))`.
pub fn duplicator<A: Value, B: Value>() -> Binary<Binary<A, A, B>, A, B> {
    curried!(|f: Binary<A, A, B>, x: A| f.apply(x.clone()).apply(x))
}
