// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one way a verification run fails.

use std::fmt;

/// A family whose members did not all produce the same output.
///
/// Output values are kept in their `Debug` form so the error does not carry the
/// probe's result type around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// A derivation disagreed with the primitive oracle.
    Mismatch {
        family: &'static str,
        member: &'static str,
        formula: &'static str,
        expected: String,
        actual: String,
    },
    /// The primitive oracle disagreed with the known answer for a probe.
    OracleMismatch {
        family: &'static str,
        member: &'static str,
        expected: String,
        actual: String,
    },
}

impl VerificationError {
    /// Name of the family the failure was found in.
    pub fn family(&self) -> &'static str {
        match self {
            VerificationError::Mismatch { family, .. }
            | VerificationError::OracleMismatch { family, .. } => family,
        }
    }

    /// Name of the member whose output was wrong.
    pub fn member(&self) -> &'static str {
        match self {
            VerificationError::Mismatch { member, .. }
            | VerificationError::OracleMismatch { member, .. } => member,
        }
    }
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationError::Mismatch {
                family,
                member,
                formula,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} member '{}' ({}) produced {} but the oracle produced {}",
                    family, member, formula, actual, expected
                )
            }
            VerificationError::OracleMismatch {
                family,
                member,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} oracle '{}' produced {} but {} was expected",
                    family, member, actual, expected
                )
            }
        }
    }
}

impl std::error::Error for VerificationError {}
