//! Full runs of all four groups.

use sc_basis::verify::{
    run, run_all, Schedule, COMPOSITION_ROUTES, DUPLICATOR_ROUTES, IDENTITY_ROUTES,
    INTERCHANGE_ROUTES,
};

// ============================================================================
// SCHEDULING
// ============================================================================

#[test]
fn test_run_passes_in_both_modes() {
    assert_eq!(run(false), Ok(()));
    assert_eq!(run(true), Ok(()));
}

#[test]
fn test_fan_out_matches_sequential() {
    let sequential = run_all(Schedule::Sequential).expect("sequential run failed");
    let fan_out = run_all(Schedule::FanOut).expect("fan-out run failed");
    assert_eq!(sequential, fan_out);
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run_all(Schedule::FanOut).unwrap();
    for _ in 0..3 {
        assert_eq!(run_all(Schedule::FanOut).unwrap(), first);
    }
}

// ============================================================================
// REPORT CONTENTS
// ============================================================================

#[test]
fn test_reports_count_every_route() {
    let reports = run_all(Schedule::Sequential).unwrap();
    let sizes: Vec<(&str, usize)> = reports
        .iter()
        .map(|r| (r.family, r.implementations()))
        .collect();
    assert_eq!(
        sizes,
        [
            ("identity", IDENTITY_ROUTES + 1),
            ("interchange", INTERCHANGE_ROUTES + 1),
            ("composition", COMPOSITION_ROUTES + 1),
            ("duplicator", DUPLICATOR_ROUTES + 1),
        ]
    );
}

#[test]
fn test_every_report_leads_with_its_oracle() {
    let reports = run_all(Schedule::Sequential).unwrap();
    let oracles: Vec<&str> = reports.iter().map(|r| r.members[0].name).collect();
    assert_eq!(oracles, ["I", "T", "Z", "W"]);
}

#[test]
fn test_closed_forms_are_reported_by_formula() {
    let reports = run_all(Schedule::Sequential).unwrap();
    let formulas: Vec<&str> = reports
        .iter()
        .flat_map(|r| r.members.iter().map(|m| m.formula))
        .collect();
    for closed in ["SCC", "S((S(CS)C)(S(CS)C)S)(CC)", "S(CS)C", "SS(SC)", "T(S(TT)(TT))"] {
        assert!(formulas.contains(&closed), "missing {closed}");
    }
}
