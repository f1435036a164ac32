// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::process;

use sc_basis::verify::{self, GroupReport, Schedule};

mod cli;
use cli::display;
use cli::{Cli, Format};

fn main() {
    let cli = Cli::parse();

    let reports = match verify::run_all(Schedule::from_concurrent(cli.concurrent)) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{}", display::render_error(&e));
            process::exit(1);
        }
    };

    // Success is silent unless asked
    if cli.report {
        if let Err(e) = print_report(&reports, cli.format) {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    }
}

fn print_report(reports: &[GroupReport], format: Format) -> Result<(), String> {
    match format {
        Format::Text => println!("{}", display::render_report(reports)),
        #[cfg(feature = "serde_json")]
        Format::Json => println!("{}", to_json(reports)?),
    }
    Ok(())
}

#[cfg(feature = "serde_json")]
fn to_json(reports: &[GroupReport]) -> Result<String, String> {
    serde_json::to_string_pretty(reports).map_err(|e| format!("Failed to encode report: {}", e))
}
