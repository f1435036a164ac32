// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The equivalence harness: every derivation against its primitive.
//!
//! Each group builds one [`Family`] per probe type, runs the probe over every
//! member and folds the answers. A group either passes whole or returns the
//! first [`VerificationError`] it finds. There is no partial result.
//!
//! The four groups share nothing, so [`Schedule::FanOut`] can hand each to its
//! own rayon worker. Families are built on the worker that checks them; the
//! `Rc` inside every [`Fun`](crate::function::Fun) never changes thread.
//! Reports come back in group order either way.
//!
//! These checks are plain `Result`s and run in every build profile.

mod error;
mod family;
mod groups;

pub use error::VerificationError;
pub use family::{thrush, triple, vireo, Agreement, Family, Member};
pub use groups::{
    composition_family, duplicator_family, identity_family, interchange_family, verify_composition,
    verify_duplicator, verify_identity, verify_interchange, CompositionFn, DuplicatorFn,
    GroupReport, InterchangeFn, MemberReport,
};

/// Derivations of `I`.
pub const IDENTITY_ROUTES: usize = 4;
/// Derivations of `T`.
pub const INTERCHANGE_ROUTES: usize = 8;
/// Derivations of `Z`.
pub const COMPOSITION_ROUTES: usize = 5;
/// Derivations of `W`, through `SS(SC)` and through `T(S(TT)(TT))`.
pub const DUPLICATOR_ROUTES: usize = 13;

// Route tables in `groups` are fixed-size arrays of these lengths, so a route
// added or dropped without updating the count fails to build.
const _: () = {
    assert!(IDENTITY_ROUTES + INTERCHANGE_ROUTES + COMPOSITION_ROUTES + DUPLICATOR_ROUTES == 30);
    assert!(DUPLICATOR_ROUTES == 5 + 8);
};

/// How the four groups are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// One after another on the calling thread.
    #[default]
    Sequential,
    /// Each group on its own rayon worker, joined before returning. Falls back
    /// to sequential without the `parallel` feature.
    FanOut,
}

impl Schedule {
    pub fn from_concurrent(concurrent: bool) -> Self {
        if concurrent {
            Schedule::FanOut
        } else {
            Schedule::Sequential
        }
    }
}

pub(crate) type Group = fn() -> Result<GroupReport, VerificationError>;

const GROUPS: [Group; 4] = [
    verify_identity,
    verify_interchange,
    verify_composition,
    verify_duplicator,
];

/// Run every group and collect the reports in group order.
pub fn run_all(schedule: Schedule) -> Result<Vec<GroupReport>, VerificationError> {
    run_groups(&GROUPS, schedule)
}

/// Run every group. `concurrent` picks the schedule and nothing else.
pub fn run(concurrent: bool) -> Result<(), VerificationError> {
    run_all(Schedule::from_concurrent(concurrent)).map(|_| ())
}

/// Run a table of groups under `schedule`. Any failing group fails the run.
pub(crate) fn run_groups(
    groups: &[Group],
    schedule: Schedule,
) -> Result<Vec<GroupReport>, VerificationError> {
    match schedule {
        Schedule::Sequential => sequential(groups),
        Schedule::FanOut => fan_out(groups),
    }
}

fn sequential(groups: &[Group]) -> Result<Vec<GroupReport>, VerificationError> {
    groups.iter().map(|group| group()).collect()
}

#[cfg(feature = "parallel")]
fn fan_out(groups: &[Group]) -> Result<Vec<GroupReport>, VerificationError> {
    use rayon::prelude::*;

    // Join every group, then take the first error in table order.
    let outcomes: Vec<_> = groups.par_iter().map(|group| group()).collect();
    outcomes.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
fn fan_out(groups: &[Group]) -> Result<Vec<GroupReport>, VerificationError> {
    sequential(groups)
}
