// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Duplicator from `{S, C}`, with a second family of routes through
//! interchange.
//!
//! ```text
//! Wfx = fxx
//!     = fx(Cx(fx))
//!     = fx(SCfx)
//!     = Sf(SCf)x
//!     = SS(SC)fx
//! ```
//!
//! and, starting again from `Tfxx`,
//!
//! ```text
//! Wfx = Tfxx
//!     = TTxfx
//!     = T(TTx)xf
//!     = (TTx)(TTx)f
//!     = S(TT)(TT)xf
//!     = T(S(TT)(TT))fx
//! ```
//!
//! The interchange routes take [`t`] from the basis, so they stay inside
//! `{S, C}` even where the term is written with `T`. [`tstttt_expanded`]
//! spells every `T` out.

use crate::curried;
use crate::function::{Binary, Fun, Value};

use super::interchange::sscscscscscc;
use super::shapes::{c, s, t};

type WFn<A, B> = Binary<Binary<A, A, B>, A, B>;

/// What `TTx` leaves behind: still waiting for `f`, then the second `x`.
type Swapped<A, B> = Fun<Binary<A, A, B>, Fun<A, B>>;

/// `SC`, instantiated for a binary `f` over `A`.
fn sc<A: Value, B: Value>() -> Fun<Binary<A, A, B>, Fun<A, A>> {
    s::<A, Fun<A, B>, A>().apply(c::<A, Fun<A, B>>().into())
}

/// `TT`.
fn tt<A: Value, B: Value>() -> Fun<A, Swapped<A, B>> {
    t::<Binary<A, A, B>, A, Fun<A, B>>().apply(t::<A, A, B>().into())
}

/// `S(TT)(TT)`.
fn stt_tt<A: Value, B: Value>() -> Binary<A, Binary<A, A, B>, B> {
    let tt_outer = t::<Swapped<A, B>, A, Fun<Binary<A, A, B>, B>>()
        .apply(t::<Binary<A, A, B>, A, B>().into());

    s::<A, Swapped<A, B>, Fun<Binary<A, A, B>, B>>()
        .apply(tt_outer)
        .apply(tt())
}

/// `fx(Cx(fx))`.
pub fn fxcxfx<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| {
        // (f(x))
        let f_ = f.apply(x.clone());

        // ((C(x)) (f(x)))
        let a = c::<A, Fun<A, B>>().apply(x).apply(f_.clone());
        f_.apply(a)
    })
}

/// `fx(SCfx)`.
pub fn fxscfx<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| {
        // (f(x))
        let f_ = f.apply(x.clone());

        // (((S(C)) (f)) (x))
        let a = sc::<A, B>().apply(f).apply(x);
        f_.apply(a)
    })
}

/// `Sf(SCf)x`.
pub fn sfscfx<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| {
        // (S(f))
        let g_ = s::<A, A, B>().apply(f.clone());

        // ((S(C)) (f))
        let gg_ = sc::<A, B>().apply(f);
        g_.apply(gg_).apply(x)
    })
}

/// `SS(SC)fx`.
pub fn ssscfx<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| {
        // ((S(S)) (S(C)))
        let gg_ = s::<Binary<A, A, B>, Fun<A, A>, Fun<A, B>>()
            .apply(s::<A, A, B>().into())
            .apply(sc());
        gg_.apply(f).apply(x)
    })
}

/// `SS(SC)`.
pub fn sssc<A: Value, B: Value>() -> WFn<A, B> {
    s::<Binary<A, A, B>, Fun<A, A>, Fun<A, B>>()
        .apply(s::<A, A, B>().into())
        .apply(sc())
}

/// `Tfxx`.
pub fn tfxx<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| t::<A, A, B>().apply(f).apply(x.clone()).apply(x))
}

/// `TTxfx`.
pub fn ttxfx<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| tt().apply(x.clone()).apply(f).apply(x))
}

/// `T(TTx)xf`.
pub fn tttxxf<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| {
        // ((T(T)) (x))
        let g_ = tt::<A, B>().apply(x.clone());

        // (T(((T(T)) (x))))
        let h_ = t::<Binary<A, A, B>, A, B>().apply(g_);
        h_.apply(x).apply(f)
    })
}

/// `(TTx)(TTx)f`.
pub fn ttxttxf<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| {
        // ((T(T)) (x)), with the outer T one level up
        let h_ = t::<Swapped<A, B>, A, Fun<Binary<A, A, B>, B>>()
            .apply(t::<Binary<A, A, B>, A, B>().into())
            .apply(x.clone());

        // ((T(T)) (x))
        let hh_ = tt::<A, B>().apply(x);
        h_.apply(hh_).apply(f)
    })
}

/// `S(TT)(TT)xf`.
pub fn sttttxf<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| stt_tt().apply(x).apply(f))
}

/// `T(S(TT)(TT))fx`.
pub fn tsttttfx<A: Value, B: Value>() -> WFn<A, B> {
    curried!(|f: Binary<A, A, B>, x: A| {
        // (T(((S(T(T))) (T(T)))))
        let h_ = t::<A, Binary<A, A, B>, B>().apply(stt_tt());
        h_.apply(f).apply(x)
    })
}

/// `T(S(TT)(TT))`.
pub fn tstttt<A: Value, B: Value>() -> WFn<A, B> {
    t::<A, Binary<A, A, B>, B>().apply(stt_tt())
}

/// `T(S(TT)(TT))` with each of the five `T`s replaced by
/// `S((S(CS)C)(S(CS)C)S)(CC)`.
pub fn tstttt_expanded<A: Value, B: Value>() -> WFn<A, B> {
    let tt_outer = sscscscscscc::<Swapped<A, B>, A, Fun<Binary<A, A, B>, B>>()
        .apply(sscscscscscc::<Binary<A, A, B>, A, B>());
    let tt_inner = sscscscscscc::<Binary<A, A, B>, A, Fun<A, B>>()
        .apply(sscscscscscc::<A, A, B>());

    sscscscscscc::<A, Binary<A, A, B>, B>().apply(
        s::<A, Swapped<A, B>, Fun<Binary<A, A, B>, B>>()
            .apply(tt_outer)
            .apply(tt_inner),
    )
}
