// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sc-basis command-line interface.
//!
//! No subcommands: running the binary runs the harness. Flags only choose
//! how the groups are scheduled and whether a report is printed.

pub mod display;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sc-basis",
    about = "Check every {S, C} derivation of I, T, Z and W against its primitive",
    version
)]
pub struct Cli {
    /// Evaluate the four combinator groups concurrently
    #[arg(short, long)]
    pub concurrent: bool,

    /// Print a per-family summary after a successful run
    #[arg(long)]
    pub report: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[cfg(feature = "serde_json")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Without `serde_json` there is no JSON report, so clap rejects `json`.
#[cfg(not(feature = "serde_json"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
}
