// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Families of interchangeable implementations and the fold that checks them.
//!
//! A [`Family`] is the primitive oracle followed by every derivation of the
//! same combinator, all at one concrete type. [`Family::check`] pushes each
//! member through the same probe and folds the outputs with [`Agreement`],
//! stopping at the first output that differs from the oracle's.
//!
//! Probes are ordinary closures over the member type. [`thrush`], [`vireo`]
//! and [`triple`] build the common ones: feed one, two or three fixed
//! arguments to whatever function they are given.

use std::fmt::Debug;

use crate::function::{Binary, Fun, Ternary, Value};

use super::error::VerificationError;

/// One implementation of a combinator, with the term it spells.
#[derive(Clone, Debug)]
pub struct Member<F> {
    pub name: &'static str,
    pub formula: &'static str,
    pub function: F,
}

impl<F> Member<F> {
    pub fn new(name: &'static str, formula: &'static str, function: F) -> Self {
        Self {
            name,
            formula,
            function,
        }
    }
}

/// The oracle and every alternative for one combinator at one type.
#[derive(Clone, Debug)]
pub struct Family<F> {
    name: &'static str,
    members: Vec<Member<F>>,
}

impl<F> Family<F> {
    /// Start a family from its oracle.
    pub fn new(name: &'static str, oracle: Member<F>) -> Self {
        Self {
            name,
            members: vec![oracle],
        }
    }

    /// Add an alternative. Order among alternatives does not matter and the
    /// same function may appear twice.
    pub fn with(mut self, name: &'static str, formula: &'static str, function: F) -> Self {
        self.members.push(Member::new(name, formula, function));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every member, oracle first.
    pub fn members(&self) -> &[Member<F>] {
        &self.members
    }

    pub fn oracle(&self) -> &Member<F> {
        &self.members[0]
    }

    /// Apply `probe` to every member and require one common answer.
    ///
    /// The oracle's output is compared with `expected` first, then every
    /// alternative's output with the oracle's. Returns the number of members
    /// checked.
    ///
    /// The fold is a left-to-right `try_fold` with no combiner, so partial
    /// [`Agreement`]s are never merged and the first disagreement wins.
    pub fn check<R, P>(&self, probe: P, expected: &R) -> Result<usize, VerificationError>
    where
        R: PartialEq + Debug,
        P: Fn(&F) -> R,
    {
        let oracle = self.oracle();
        let baseline = probe(&oracle.function);
        if baseline != *expected {
            return Err(VerificationError::OracleMismatch {
                family: self.name,
                member: oracle.name,
                expected: format!("{:?}", expected),
                actual: format!("{:?}", baseline),
            });
        }

        let agreement = self.members[1..].iter().try_fold(
            Agreement::new(self.name, baseline),
            |agreement, member| {
                let candidate = probe(&member.function);
                agreement.admit(member, candidate)
            },
        )?;

        Ok(agreement.count())
    }
}

/// Running state of the fold in [`Family::check`]: the oracle's output and
/// how many members have matched it.
#[derive(Debug)]
pub struct Agreement<R> {
    family: &'static str,
    baseline: R,
    count: usize,
}

impl<R: PartialEq + Debug> Agreement<R> {
    /// Seed with the oracle's output. The oracle counts as the first member.
    pub fn new(family: &'static str, baseline: R) -> Self {
        Self {
            family,
            baseline,
            count: 1,
        }
    }

    /// Fold one more output in, or fail naming the member that produced it.
    pub fn admit<F>(self, member: &Member<F>, candidate: R) -> Result<Self, VerificationError> {
        if candidate != self.baseline {
            return Err(VerificationError::Mismatch {
                family: self.family,
                member: member.name,
                formula: member.formula,
                expected: format!("{:?}", self.baseline),
                actual: format!("{:?}", candidate),
            });
        }
        Ok(Self {
            count: self.count + 1,
            ..self
        })
    }

    /// Members that have agreed so far, oracle included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Combining two partial agreements is not part of the fold.
    ///
    /// [`Family::check`] never calls this: its `try_fold` has no combiner. It
    /// is the combiner to hand any parallel reduction over members, which
    /// then fails loudly instead of merging two baselines.
    ///
    /// # Panics
    ///
    /// Always. The fold is strictly sequential: one baseline, one candidate
    /// at a time.
    pub fn merge(self, _other: Self) -> Self {
        panic!(
            "Contract violation: partial agreements for '{}' cannot be merged",
            self.family
        );
    }
}

/// `x ↦ (i ↦ i x)`: apply a unary member to `x`.
pub fn thrush<X: Value, Y>(x: X) -> impl Fn(&Fun<X, Y>) -> Y {
    move |i| i.apply(x.clone())
}

/// `(f, x) ↦ (w ↦ w f x)`: apply a binary member to `f` then `x`.
pub fn vireo<F: Value, X: Value, Y>(f: F, x: X) -> impl Fn(&Binary<F, X, Y>) -> Y {
    move |w| w.apply(f.clone()).apply(x.clone())
}

/// Apply a ternary member to three fixed arguments, left to right.
pub fn triple<F: Value, G: Value, X: Value, Y>(
    f: F,
    g: G,
    x: X,
) -> impl Fn(&Ternary<F, G, X, Y>) -> Y {
    move |t| t.apply(f.clone()).apply(g.clone()).apply(x.clone())
}
