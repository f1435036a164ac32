// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interchange from `{S, C}`.
//!
//! ```text
//! Tfyx = fxy
//!      = fx(Cyx)
//!      = Sf(Cy)x
//!      = Z(Sf)Cyx
//!      = ZZSfCyx
//!      = ZZSf(CCf)yx
//!      = S(ZZS)(CC)fyx
//! ```
//!
//! Substituting `Z = S(CS)C` closes the last step over the basis:
//! `T = S((S(CS)C)(S(CS)C)S)(CC)`.
//!
//! The intermediate routes use [`z`], which is itself the closed form from
//! [`super::composition::scsc`], so nothing here touches the primitive `T` or
//! `Z`.

use crate::curried;
use crate::function::{Binary, Fun, Ternary, Value};

use super::composition::scsc;
use super::shapes::{c, s, z};

type TFn<A, B, C> = Ternary<Binary<A, B, C>, B, A, C>;

/// `ZZS`, the left operand of the outer fusion.
fn zzs<A: Value, B: Value, C: Value>(
) -> Fun<Binary<A, B, C>, Fun<Fun<B, Fun<A, B>>, Fun<B, Fun<A, C>>>> {
    z::<Binary<A, B, C>, Fun<Fun<A, B>, Fun<A, C>>, Fun<Fun<B, Fun<A, B>>, Fun<B, Fun<A, C>>>>()
        .apply(z::<B, Fun<A, B>, Fun<A, C>>().into())
        .apply(s::<A, B, C>().into())
}

/// `fx(Cyx)`.
pub fn fxcyx<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    curried!(|f: Binary<A, B, C>, y: B, x: A| {
        // ((C(y)) (x))
        let b = c::<B, A>().apply(y).apply(x.clone());
        f.apply(x).apply(b)
    })
}

/// `Sf(Cy)x`.
pub fn sfcyx<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    curried!(|f: Binary<A, B, C>, y: B, x: A| {
        // (S(f))
        let h_ = s::<A, B, C>().apply(f);

        // (C(y))
        let g_ = c::<B, A>().apply(y);
        h_.apply(g_).apply(x)
    })
}

/// `Z(Sf)Cyx`.
pub fn zsfcyx<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    curried!(|f: Binary<A, B, C>, y: B, x: A| {
        // (Z (S(f)))
        let h_ = z::<B, Fun<A, B>, Fun<A, C>>().apply(s::<A, B, C>().apply(f));
        h_.apply(c::<B, A>().into()).apply(y).apply(x)
    })
}

/// `ZZSfCyx`.
pub fn zzsfcyx<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    curried!(|f: Binary<A, B, C>, y: B, x: A| {
        zzs().apply(f).apply(c::<B, A>().into()).apply(y).apply(x)
    })
}

/// `ZZSf(CCf)yx`.
pub fn zzsfccfyx<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    curried!(|f: Binary<A, B, C>, y: B, x: A| {
        // ((C(C)) (f))
        let ccf = c::<Fun<B, Fun<A, B>>, Binary<A, B, C>>()
            .apply(c::<B, A>().into())
            .apply(f.clone());
        zzs().apply(f).apply(ccf).apply(y).apply(x)
    })
}

/// `S(ZZS)(CC)fyx`.
pub fn szzsccfyx<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    curried!(|f: Binary<A, B, C>, y: B, x: A| {
        // (C(C))
        let cc = c::<Fun<B, Fun<A, B>>, Binary<A, B, C>>().apply(c::<B, A>().into());

        // ((S (Z(Z)(S))) (C(C)))
        let gg_ = s::<Binary<A, B, C>, Fun<B, Fun<A, B>>, Fun<B, Fun<A, C>>>()
            .apply(zzs())
            .apply(cc);
        gg_.apply(f).apply(y).apply(x)
    })
}

/// `S(ZZS)(CC)`.
pub fn szzscc<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    s::<Binary<A, B, C>, Fun<B, Fun<A, B>>, Fun<B, Fun<A, C>>>()
        .apply(zzs())
        .apply(c::<Fun<B, Fun<A, B>>, Binary<A, B, C>>().apply(c::<B, A>().into()))
}

/// `S((S(CS)C)(S(CS)C)S)(CC)`: interchange with every `Z` expanded.
pub fn sscscscscscc<A: Value, B: Value, C: Value>() -> TFn<A, B, C> {
    let zzs = scsc::<
        Binary<A, B, C>,
        Fun<Fun<A, B>, Fun<A, C>>,
        Fun<Fun<B, Fun<A, B>>, Fun<B, Fun<A, C>>>,
    >()
    .apply(scsc::<B, Fun<A, B>, Fun<A, C>>())
    .apply(s::<A, B, C>().into());

    s::<Binary<A, B, C>, Fun<B, Fun<A, B>>, Fun<B, Fun<A, C>>>()
        .apply(zzs)
        .apply(c::<Fun<B, Fun<A, B>>, Binary<A, B, C>>().apply(c::<B, A>().into()))
}
