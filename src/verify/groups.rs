// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The four checks: one family per combinator, probed at fixed inputs.
//!
//! Probe inputs are picked so that a route which gets the argument order wrong
//! cannot pass by accident. The interchange probe uses constancy as `f`, so the
//! answer is whichever value lands in `f`'s first slot; the same probe is run
//! with the carried types in both orientations and with two distinct values of
//! one type.

use serde::Serialize;

use crate::combinators::{composition, constancy, duplicator, identity, interchange};
use crate::derive;
use crate::function::{Binary, Fun, Ternary, Value};

use super::error::VerificationError;
use super::family::{thrush, triple, vireo, Family, Member};
use super::{COMPOSITION_ROUTES, DUPLICATOR_ROUTES, IDENTITY_ROUTES, INTERCHANGE_ROUTES};

/// A named derivation and the factory that builds it at one type.
type Route<F> = (&'static str, &'static str, fn() -> F);

/// Curried shape of `T` at `A, B, C`.
pub type InterchangeFn<A, B, C> = Ternary<Binary<A, B, C>, B, A, C>;

/// Curried shape of `Z` at `A, B, C`.
pub type CompositionFn<A, B, C> = Ternary<Fun<B, C>, Fun<A, B>, A, C>;

/// Curried shape of `W` at `A, B`.
pub type DuplicatorFn<A, B> = Binary<Binary<A, A, B>, A, B>;

/// What a passing group checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub family: &'static str,
    pub members: Vec<MemberReport>,
    pub probes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberReport {
    pub name: &'static str,
    pub formula: &'static str,
}

impl GroupReport {
    fn new<F>(family: &Family<F>, probes: usize) -> Self {
        Self {
            family: family.name(),
            members: family
                .members()
                .iter()
                .map(|m| MemberReport {
                    name: m.name,
                    formula: m.formula,
                })
                .collect(),
            probes,
        }
    }

    /// Oracle plus derivations.
    pub fn implementations(&self) -> usize {
        self.members.len()
    }
}

fn assemble<F, const N: usize>(
    name: &'static str,
    oracle: Member<F>,
    routes: [Route<F>; N],
) -> Family<F> {
    routes
        .into_iter()
        .fold(Family::new(name, oracle), |family, (route, formula, build)| {
            family.with(route, formula, build())
        })
}

// ============================================================================
// FAMILIES
// ============================================================================

pub fn identity_family<A: Value>() -> Family<Fun<A, A>> {
    let routes: [Route<Fun<A, A>>; IDENTITY_ROUTES] = [
        ("cxx", "Cxx", derive::identity::cxx),
        ("cxcx", "(Cx)(Cx)", derive::identity::cxcx),
        ("sccx", "SCCx", derive::identity::sccx),
        ("scc", "SCC", derive::identity::scc),
    ];
    assemble("identity", Member::new("I", "I", identity()), routes)
}

pub fn interchange_family<A: Value, B: Value, C: Value>() -> Family<InterchangeFn<A, B, C>> {
    use derive::interchange::*;

    let routes: [Route<InterchangeFn<A, B, C>>; INTERCHANGE_ROUTES] = [
        ("fxcyx", "(fx)(Cyx)", fxcyx),
        ("sfcyx", "(Sf)(Cy)x", sfcyx),
        ("zsfcyx", "Z(Sf)Cyx", zsfcyx),
        ("zzsfcyx", "(ZZSf)Cyx", zzsfcyx),
        ("zzsfccfyx", "(ZZSf)(CCf)yx", zzsfccfyx),
        ("szzsccfyx", "S(ZZS)(CC)fyx", szzsccfyx),
        ("szzscc", "S(ZZS)(CC)", szzscc),
        ("sscscscscscc", "S((S(CS)C)(S(CS)C)S)(CC)", sscscscscscc),
    ];
    assemble("interchange", Member::new("T", "T", interchange()), routes)
}

pub fn composition_family<A: Value, B: Value, C: Value>() -> Family<CompositionFn<A, B, C>> {
    use derive::composition::*;

    let routes: [Route<CompositionFn<A, B, C>>; COMPOSITION_ROUTES] = [
        ("cfxgx", "(Cfx)(gx)", cfxgx),
        ("scfgx", "S(Cf)gx", scfgx),
        ("csfcfgx", "(CSf)(Cf)gx", csfcfgx),
        ("scscfgx", "S(CS)Cfgx", scscfgx),
        ("scsc", "S(CS)C", scsc),
    ];
    assemble("composition", Member::new("Z", "Z", composition()), routes)
}

pub fn duplicator_family<A: Value, B: Value>() -> Family<DuplicatorFn<A, B>> {
    use derive::duplicator::*;

    let routes: [Route<DuplicatorFn<A, B>>; DUPLICATOR_ROUTES] = [
        ("fxcxfx", "fx(Cx(fx))", fxcxfx),
        ("fxscfx", "fx(SCfx)", fxscfx),
        ("sfscfx", "Sf(SCf)x", sfscfx),
        ("ssscfx", "SS(SC)fx", ssscfx),
        ("sssc", "SS(SC)", sssc),
        ("tfxx", "Tfxx", tfxx),
        ("ttxfx", "TTxfx", ttxfx),
        ("tttxxf", "T(TTx)xf", tttxxf),
        ("ttxttxf", "(TTx)(TTx)f", ttxttxf),
        ("sttttxf", "S(TT)(TT)xf", sttttxf),
        ("tsttttfx", "T(S(TT)(TT))fx", tsttttfx),
        ("tstttt", "T(S(TT)(TT))", tstttt),
        (
            "tstttt_expanded",
            "T(S(TT)(TT)) with T = S((S(CS)C)(S(CS)C)S)(CC)",
            tstttt_expanded,
        ),
    ];
    assemble("duplicator", Member::new("W", "W", duplicator()), routes)
}

// ============================================================================
// PROBE INPUTS
// ============================================================================

fn uppercase() -> Fun<String, String> {
    Fun::new(|s: String| s.to_uppercase())
}

/// The first two code points, not bytes.
fn first_two() -> Fun<String, String> {
    Fun::new(|s: String| s.chars().take(2).collect())
}

fn quotient() -> Binary<i64, i64, i64> {
    crate::curried!(|x: i64, y: i64| x / y)
}

fn labelled() -> Binary<u8, u8, String> {
    crate::curried!(|x: u8, y: u8| format!("{x}:{y}"))
}

// ============================================================================
// GROUPS
// ============================================================================

/// `I` at strings, integers, unit, and at a function type.
pub fn verify_identity() -> Result<GroupReport, VerificationError> {
    let strings = identity_family::<String>();

    // A function carried as the value: identity must hand back something that
    // still answers 7.
    let seven: Fun<(), u8> = constancy::<u8, ()>().apply(7);
    let outcomes = [
        strings.check(thrush::<String, String>("hallo".into()), &"hallo".to_string())?,
        identity_family::<i64>().check(thrush::<i64, i64>(-7), &-7)?,
        identity_family::<()>().check(thrush::<(), ()>(()), &())?,
        identity_family::<Fun<(), u8>>()
            .check(|i: &Fun<Fun<(), u8>, Fun<(), u8>>| i.apply(seven.clone()).apply(()), &7)?,
    ];

    Ok(GroupReport::new(&strings, outcomes.len()))
}

/// `T` with a constancy `f`, so the result is the value passed last.
pub fn verify_interchange() -> Result<GroupReport, VerificationError> {
    let forward = interchange_family::<String, (), String>();
    let outcomes = [
        forward.check(
            triple::<Binary<String, (), String>, (), String, String>(constancy(), (), ".".into()),
            &".".to_string(),
        )?,
        interchange_family::<(), String, ()>().check(
            triple::<Binary<(), String, ()>, String, (), ()>(constancy(), ".".into(), ()),
            &(),
        )?,
        interchange_family::<String, String, String>().check(
            triple::<Binary<String, String, String>, String, String, String>(
                constancy(),
                "y".into(),
                "x".into(),
            ),
            &"x".to_string(),
        )?,
    ];

    Ok(GroupReport::new(&forward, outcomes.len()))
}

/// `Z` on `"hallo"`, and on integers where the order of `f` and `g` shows.
pub fn verify_composition() -> Result<GroupReport, VerificationError> {
    let strings = composition_family::<String, String, String>();
    let inc = Fun::new(|n: i32| n + 1);
    let dbl = Fun::new(|n: i32| n * 2);
    let outcomes = [
        strings.check(
            triple::<Fun<String, String>, Fun<String, String>, String, String>(
                uppercase(),
                first_two(),
                "hallo".into(),
            ),
            &"HA".to_string(),
        )?,
        composition_family::<i32, i32, i32>().check(
            triple::<Fun<i32, i32>, Fun<i32, i32>, i32, i32>(inc, dbl, 5),
            &11,
        )?,
    ];

    Ok(GroupReport::new(&strings, outcomes.len()))
}

/// `W` with integer division at 2, and with a result type distinct from the
/// argument type.
pub fn verify_duplicator() -> Result<GroupReport, VerificationError> {
    let integers = duplicator_family::<i64, i64>();
    let outcomes = [
        integers.check(vireo::<Binary<i64, i64, i64>, i64, i64>(quotient(), 2), &1)?,
        duplicator_family::<u8, String>().check(
            vireo::<Binary<u8, u8, String>, u8, String>(labelled(), 4),
            &"4:4".to_string(),
        )?,
    ];

    Ok(GroupReport::new(&integers, outcomes.len()))
}
