// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one function type everything else is built from.
//!
//! Every combinator in this crate is a chain of single-argument functions.
//! `Fun<A, B>` is that single-argument function: a reference-counted handle to
//! a `dyn Fn(A) -> B`. Arity `n` is `n` nested `Fun`s, so a two-argument curried
//! function is `Fun<A, Fun<B, C>>` (spelled [`Binary`]) and a three-argument one
//! is `Fun<A, Fun<B, Fun<C, D>>>` (spelled [`Ternary`]).
//!
//! Cloning a `Fun` shares the closure. Applying it never consumes it, which is
//! why every captured argument has to be [`Value`] (`Clone + 'static`): the
//! closure hands out a fresh clone on each application instead of giving its
//! only copy away.
//!
//! There is no `PartialEq` on `Fun`. Two functions are equal when they agree on
//! the inputs you feed them, and that question belongs to [`crate::verify`].

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

/// Anything a combinator can carry: cloneable and free of borrowed data.
///
/// `Fun` itself is a `Value`, so combinators instantiate over function types
/// as readily as over strings or integers.
pub trait Value: Clone + 'static {}

impl<T: Clone + 'static> Value for T {}

/// A pure unary function `A → B`.
pub struct Fun<A, B>(Rc<dyn Fn(A) -> B>);

/// A curried two-argument function `A → B → C`.
pub type Binary<A, B, C> = Fun<A, Fun<B, C>>;

/// A curried three-argument function `A → B → C → D`.
pub type Ternary<A, B, C, D> = Fun<A, Fun<B, Fun<C, D>>>;

impl<A, B> Fun<A, B> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self(Rc::new(f))
    }

    /// Apply to one argument.
    #[inline]
    pub fn apply(&self, argument: A) -> B {
        (self.0)(argument)
    }
}

impl<A, B> Clone for Fun<A, B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, B> fmt::Debug for Fun<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fun<{}, {}>", type_name::<A>(), type_name::<B>())
    }
}

/// Build a curried function from a multi-parameter closure.
///
/// `curried!(|f: Fun<B, C>, g: Fun<A, B>, x: A| f.apply(g.apply(x)))` expands to
/// three nested [`Fun`]s. Each level re-binds the parameters captured so far to
/// fresh clones before the next closure takes them, so the body may consume
/// every parameter by value and the result can still be applied any number of
/// times.
#[macro_export]
macro_rules! curried {
    (|$x:ident : $t:ty $(, $rest:ident : $rt:ty)*| $body:expr) => {
        $crate::curried!(@level [] |$x: $t $(, $rest: $rt)*| $body)
    };
    (@level [$($seen:ident)*] |$x:ident : $t:ty| $body:expr) => {
        $crate::function::Fun::new(move |$x: $t| {
            $(#[allow(unused_variables)] let $seen = ::core::clone::Clone::clone(&$seen);)*
            $body
        })
    };
    (@level [$($seen:ident)*] |$x:ident : $t:ty, $($rest:ident : $rt:ty),+| $body:expr) => {
        $crate::function::Fun::new(move |$x: $t| {
            $(#[allow(unused_variables)] let $seen = ::core::clone::Clone::clone(&$seen);)*
            $crate::curried!(@level [$($seen)* $x] |$($rest: $rt),+| $body)
        })
    };
}
