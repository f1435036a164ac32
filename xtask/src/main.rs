//! Custom cargo commands for the sc-basis crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask routes    - Compare derivation sources with the route counts

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Derivation module, and the constant in `src/verify/mod.rs` that counts it.
const FAMILIES: [(&str, &str); 4] = [
    ("identity", "IDENTITY_ROUTES"),
    ("interchange", "INTERCHANGE_ROUTES"),
    ("composition", "COMPOSITION_ROUTES"),
    ("duplicator", "DUPLICATOR_ROUTES"),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("routes") => routes()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (routes + tests + clippy + both schedules)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  routes    Compare public derivations with the route counts
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sc-basis Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking route counts...");
    routes()?;
    println!("✓ Route counts match derivation sources\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running tests without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential fallback passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Running the harness in both schedules...");
    run_cargo(&["run", "--quiet", "--"])?;
    run_cargo(&["run", "--quiet", "--", "--concurrent"])?;
    println!("✓ Harness passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Every `pub fn` in a derivation module is a route, so the count in the
/// source has to match the constant the harness sizes its tables with.
fn routes() -> Result<()> {
    let root = project_root()?;
    let verify_rs = std::fs::read_to_string(root.join("src/verify/mod.rs"))
        .context("Failed to read src/verify/mod.rs")?;

    for (module, constant) in FAMILIES {
        let path = root.join("src/derive").join(format!("{}.rs", module));
        let in_source = count_public_fns(&path)?;
        let Some(declared) = extract_const(&verify_rs, constant) else {
            bail!("{} not found in src/verify/mod.rs", constant);
        };

        if in_source != declared {
            bail!(
                "src/derive/{}.rs has {} public derivations but {} = {}",
                module,
                in_source,
                constant,
                declared
            );
        }
        println!("  {:<12} {:>2} routes", module, declared);
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Public functions outside the `#[cfg(test)]` module.
fn count_public_fns(path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(content
        .lines()
        .take_while(|line| !line.starts_with("#[cfg(test)]"))
        .filter(|line| line.starts_with("pub fn "))
        .count())
}

fn extract_const(content: &str, name: &str) -> Option<usize> {
    // Look for "pub const NAME: usize = 4;"
    let prefix = format!("pub const {}: usize =", name);
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.trim().trim_end_matches(';').trim().parse().ok())
}
