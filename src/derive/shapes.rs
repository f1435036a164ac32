// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capability types and the basis they are drawn from.
//!
//! A derivation threads many partial applications through each other, and a
//! bare `Fun<Fun<A, Fun<B, C>>, Fun<Fun<A, B>, Fun<A, C>>>` says nothing about
//! which combinator it is supposed to be. The four wrappers below name the
//! shape. Each one derefs to the underlying [`Fun`] (so `s().apply(f)` works
//! directly) and converts into it with `.into()` wherever a derivation passes
//! the combinator as an argument.
//!
//! | Capability          | Shape                                 |
//! |---------------------|---------------------------------------|
//! | `Constancy<A, B>`   | `A → B → A`                           |
//! | `Interchange<A,B,C>`| `(A → B → C) → B → A → C`             |
//! | `Composition<A,B,C>`| `(B → C) → (A → B) → A → C`           |
//! | `Fusion<A, B, C>`   | `(A → B → C) → (A → B) → A → C`       |
//!
//! Only [`c`] and [`s`] come from the primitive library. [`t`] and [`z`] are
//! the closed basis expansions `S((S(CS)C)(S(CS)C)S)(CC)` and `S(CS)C`, so any
//! derivation that leans on them is still spelled in `{S, C}` alone.

use std::ops::Deref;

use crate::combinators::{constancy, fusion};
use crate::function::{Binary, Fun, Ternary, Value};

use super::composition::scsc;
use super::interchange::sscscscscscc;

macro_rules! capability {
    ($(#[$doc:meta])* $name:ident<$($p:ident),+> = $shape:ty) => {
        $(#[$doc])*
        pub struct $name<$($p),+>($shape);

        impl<$($p),+> $name<$($p),+> {
            /// Tag an existing function of this shape.
            pub fn new(inner: $shape) -> Self {
                Self(inner)
            }
        }

        impl<$($p),+> Clone for $name<$($p),+> {
            fn clone(&self) -> Self {
                Self(self.0.clone())
            }
        }

        impl<$($p),+> Deref for $name<$($p),+> {
            type Target = $shape;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<$($p),+> From<$name<$($p),+>> for $shape {
            fn from(tagged: $name<$($p),+>) -> Self {
                tagged.0
            }
        }
    };
}

capability! {
    /// A function shaped like `C`.
    Constancy<A, B> = Binary<A, B, A>
}

capability! {
    /// A function shaped like `T`.
    Interchange<A, B, C> = Ternary<Binary<A, B, C>, B, A, C>
}

capability! {
    /// A function shaped like `Z`.
    Composition<A, B, C> = Ternary<Fun<B, C>, Fun<A, B>, A, C>
}

capability! {
    /// A function shaped like `S`.
    Fusion<A, B, C> = Ternary<Binary<A, B, C>, Fun<A, B>, A, C>
}

/// The constancy basis combinator.
pub fn c<A: Value, B: Value>() -> Constancy<A, B> {
    Constancy::new(constancy())
}

/// The fusion basis combinator.
pub fn s<A: Value, B: Value, C: Value>() -> Fusion<A, B, C> {
    Fusion::new(fusion())
}

/// Interchange, spelled in the basis.
pub fn t<A: Value, B: Value, C: Value>() -> Interchange<A, B, C> {
    Interchange::new(sscscscscscc())
}

/// Composition, spelled in the basis.
pub fn z<A: Value, B: Value, C: Value>() -> Composition<A, B, C> {
    Composition::new(scsc())
}
