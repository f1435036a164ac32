// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composition from `{S, C}`.
//!
//! ```text
//! Zfgx = f(gx)
//!      = (Cfx)(gx)
//!      = S(Cf)gx
//!      = (CSf)(Cf)gx
//!      = S(CS)Cfgx
//! ```
//!
//! therefore `Z = S(CS)C`.

use crate::curried;
use crate::function::{Binary, Fun, Ternary, Value};

use super::shapes::{c, s, Fusion};

/// The curried shape shared by every composition route.
type ZFn<A, B, C> = Ternary<Fun<B, C>, Fun<A, B>, A, C>;

/// `(Cfx)(gx)`.
pub fn cfxgx<A: Value, B: Value, C: Value>() -> ZFn<A, B, C> {
    curried!(|f: Fun<B, C>, g: Fun<A, B>, x: A| {
        // (g(x))
        let b = g.apply(x.clone());

        // ((C(f)) (x))
        let g_ = c::<Fun<B, C>, A>().apply(f).apply(x);
        g_.apply(b)
    })
}

/// `S(Cf)gx`.
pub fn scfgx<A: Value, B: Value, C: Value>() -> ZFn<A, B, C> {
    curried!(|f: Fun<B, C>, g: Fun<A, B>, x: A| {
        // (S(C(f)))
        let h_ = s::<A, B, C>().apply(c::<Fun<B, C>, A>().apply(f));
        h_.apply(g).apply(x)
    })
}

/// `(CSf)(Cf)gx`.
///
/// `CS` carries the fusion combinator itself as a value, so the constancy here
/// is instantiated over the [`Fusion`] capability type.
pub fn csfcfgx<A: Value, B: Value, C: Value>() -> ZFn<A, B, C> {
    curried!(|f: Fun<B, C>, g: Fun<A, B>, x: A| {
        // ((C(S)) (f))
        let g_: Fusion<A, B, C> = c::<Fusion<A, B, C>, Fun<B, C>>()
            .apply(s::<A, B, C>())
            .apply(f.clone());

        // (C(f))
        let h_ = c::<Fun<B, C>, A>().apply(f);
        g_.apply(h_).apply(g).apply(x)
    })
}

/// `S(CS)Cfgx`.
pub fn scscfgx<A: Value, B: Value, C: Value>() -> ZFn<A, B, C> {
    curried!(|f: Fun<B, C>, g: Fun<A, B>, x: A| {
        // (S (C(S))). C carries the bare fusion shape here, not the tag.
        let cs = c::<Ternary<Binary<A, B, C>, Fun<A, B>, A, C>, Fun<B, C>>()
            .apply(s::<A, B, C>().into());
        let h_ = s::<Fun<B, C>, Binary<A, B, C>, Fun<Fun<A, B>, Fun<A, C>>>().apply(cs);

        // ((S (C(S))) (C))
        let gg_ = h_.apply(c::<Fun<B, C>, A>().into());
        gg_.apply(f).apply(g).apply(x)
    })
}

/// `S(CS)C`.
pub fn scsc<A: Value, B: Value, C: Value>() -> ZFn<A, B, C> {
    let cs = c::<Ternary<Binary<A, B, C>, Fun<A, B>, A, C>, Fun<B, C>>()
        .apply(s::<A, B, C>().into());
    s::<Fun<B, C>, Binary<A, B, C>, Fun<Fun<A, B>, Fun<A, C>>>()
        .apply(cs)
        .apply(c::<Fun<B, C>, A>().into())
}
