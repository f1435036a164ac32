// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the `sc-basis` report.
//!
//! One box per family: the oracle on top, then each derivation with the term
//! it spells. Colour only when stdout is a terminal and `NO_COLOR` is unset,
//! so piping the report into a file gives plain text.

use sc_basis::verify::{GroupReport, VerificationError};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    paint(styles, text, use_colors())
}

fn paint(styles: &[&str], text: &str, colors: bool) -> String {
    if colors {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border glyphs in gray, or bare on a pipe.
fn border(glyphs: &str) -> String {
    styled(&[GRAY], glyphs)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Format a content line: │ content          │
pub fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"))
}

/// Format section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let label_part = format!(" {} ", styled(&[CYAN, BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part) + 1);
    format!(
        "{}{}{}",
        border("┌─"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    )
}

/// Format section footer: └──────────────────┘
pub fn section_bot() -> String {
    border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Column width of the oracle/agrees mark, before styling.
const MARK_WIDTH: usize = 6;

/// Padded to `MARK_WIDTH` before styling, so escapes never eat the padding.
fn mark(oracle: bool, colors: bool) -> String {
    let (style, label) = if oracle {
        (DIM, "oracle")
    } else {
        (GREEN, "agrees")
    };
    paint(&[style], &format!("{:<MARK_WIDTH$}", label), colors)
}

/// Render every group as a box, then a one-line total.
pub fn render_report(reports: &[GroupReport]) -> String {
    let mut lines = Vec::new();

    for report in reports {
        lines.push(section_top(&report.family.to_uppercase()));
        let name_width = report
            .members
            .iter()
            .map(|m| m.name.len())
            .max()
            .unwrap_or(0);

        for (i, member) in report.members.iter().enumerate() {
            let cell = mark(i == 0, use_colors());
            let content = format!(
                " {:<width$}  {}  {}",
                member.name,
                cell,
                member.formula,
                width = name_width
            );
            lines.push(row(&content));
        }

        let probes = format!(" {} probe(s)", report.probes);
        lines.push(row(&styled(&[DIM], &probes)));
        lines.push(section_bot());
    }

    let derivations: usize = reports.iter().map(|r| r.implementations() - 1).sum();
    let probes: usize = reports.iter().map(|r| r.probes).sum();
    lines.push(format!(
        "{} derivations agree with their primitives across {} probes",
        styled(&[BOLD], &derivations.to_string()),
        probes
    ));

    lines.join("\n")
}

/// Format a verification failure for stderr.
pub fn render_error(err: &VerificationError) -> String {
    format!("{} {}", styled(&[RED, BOLD], "✗"), err)
}
