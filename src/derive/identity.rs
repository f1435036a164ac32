// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Identity from `{S, C}`.
//!
//! `Ix = Cxx = (Cx)(Cx) = SCCx`, therefore `I = SCC`.

use crate::curried;
use crate::function::{Fun, Value};

use super::shapes::{c, s};

/// `Cxx`.
pub fn cxx<A: Value>() -> Fun<A, A> {
    curried!(|x: A| c::<A, A>().apply(x.clone()).apply(x))
}

/// `(Cx)(Cx)`.
pub fn cxcx<A: Value>() -> Fun<A, A> {
    curried!(|x: A| {
        // (C(x))
        let f_ = c::<A, Fun<A, A>>().apply(x.clone());

        // (C(x))
        let g_ = c::<A, A>().apply(x);
        f_.apply(g_)
    })
}

/// `SCCx`.
pub fn sccx<A: Value>() -> Fun<A, A> {
    curried!(|x: A| {
        // (S(C))
        let h_ = s::<A, Fun<A, A>, A>().apply(c::<A, Fun<A, A>>().into());

        // ((S(C)) (C))
        let gg_ = h_.apply(c::<A, A>().into());
        gg_.apply(x)
    })
}

/// `SCC`.
pub fn scc<A: Value>() -> Fun<A, A> {
    s::<A, Fun<A, A>, A>()
        .apply(c::<A, Fun<A, A>>().into())
        .apply(c::<A, A>().into())
}
