//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the solver/catalog/benchmark code stays clean and testable
//! - output changes are localized (the table layout has a snapshot test)

use crate::catalog::Catalog;
use crate::domain::{BenchmarkReport, BenchmarkRecord, Structure};
use crate::fit::FittedPade;

/// Header block plus the reference solver row.
pub fn format_run_summary(report: &BenchmarkReport) -> String {
    let config = &report.config;
    let mut out = String::new();

    out.push_str("=== wdisp - dispersion relation benchmark ===\n");
    out.push_str(&format!(
        "Samples: n={} | alpha=[{}, {}] | spacing={:?}\n",
        config.points, config.alpha_min, config.alpha_max, config.spacing
    ));
    out.push_str(&format!(
        "Timing: {} trials x {} calls | seed={}\n",
        config.timing.trials, config.timing.calls_per_trial, config.seed
    ));
    out.push_str(&format!(
        "Reference: Newton-Raphson tol={:e} | max iterations used={} | non-converged={} | {:.1} ns/call\n",
        config.solver.tolerance,
        report.reference.max_iterations_used,
        report.reference.non_converged,
        report.reference.nanos_per_call
    ));
    out
}

/// Ranked table, best first.
pub fn format_rankings(report: &BenchmarkReport, top: Option<usize>) -> String {
    let rows: Vec<&BenchmarkRecord> = match top {
        Some(n) => report.records.iter().take(n).collect(),
        None => report.records.iter().collect(),
    };
    let mut out = format_table(&rows);

    if !report.skipped.is_empty() {
        out.push('\n');
        for s in &report.skipped {
            out.push_str(&format!("  (skipped {}) {}\n", s.name, s.reason));
        }
    }
    out
}

/// Best entry of each structural class, in rank order.
pub fn format_structure_summary(report: &BenchmarkReport) -> String {
    let mut seen: Vec<Structure> = Vec::new();
    let mut out = String::from("Best per structure:\n");
    for r in &report.records {
        if seen.contains(&r.structure) {
            continue;
        }
        seen.push(r.structure);
        out.push_str(&format!(
            "  {:<17} {:<26} {:>12.3e} %\n",
            r.structure.label(),
            truncate(&r.name, 26),
            r.mean_rel_error_pct
        ));
    }
    out
}

fn format_table(rows: &[&BenchmarkRecord]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>4} {:<26} {:>12} {:>12} {:>12} {:>9}\n",
            "Rank", "Method", "AvgErr %", "MaxErr %", "a@MaxErr", "ns/call"
        )
        .trim_end(),
    );
    out.push('\n');

    out.push_str(
        format!(
            "{:-<4} {:-<26} {:-<12} {:-<12} {:-<12} {:-<9}\n",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:>4} {:<26} {:>12.3e} {:>12.3e} {:>12.6} {:>9.1}\n",
                r.rank,
                truncate(&r.name, 26),
                r.mean_rel_error_pct,
                r.max_rel_error_pct,
                r.alpha_at_max,
                r.nanos_per_call,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Every registered entry with its structure, domain, documented bound and the interval it covers.
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<26} {:<17} {:<20} {:>10}  {}\n",
        "Method", "Structure", "Domain", "Bound %", "Bound on"
    ));
    for e in catalog.entries() {
        out.push_str(&format!(
            "{:<26} {:<17} {:<20} {:>10.2e}  {}\n",
            truncate(&e.name, 26),
            e.structure.label(),
            e.domain.to_string(),
            e.bound.max_rel_error_pct,
            e.bound.over
        ));
    }
    out
}

/// Coefficients and accuracy of a fitted approximant.
pub fn format_fit(fitted: &FittedPade) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Fitted Pade: degree {} (requested {}), {} nodes on {}\n",
        fitted.degree, fitted.requested_degree, fitted.nodes, fitted.domain
    ));
    out.push_str(&format!("- num: {}\n", fmt_vec(&fitted.num)));
    out.push_str(&format!("- den: {}\n", fmt_vec(&fitted.den)));
    out.push_str(&format!(
        "- grid error: mean {:.3e} % | max {:.3e} %\n",
        fitted.mean_rel_error_pct, fitted.max_rel_error_pct
    ));
    out.push_str(&format!(
        "- min singular value (scaled): {:.3e}\n",
        fitted.min_singular_value
    ));
    out
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.15e}")).collect();
    format!("[{}]", parts.join(", "))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BenchmarkConfig, EntryKey, FamilyKind, ReferenceRecord, SkippedEntry, Structure,
    };

    fn record(rank: usize, family: FamilyKind, variant: u8, mean: f64) -> BenchmarkRecord {
        let key = EntryKey::new(family, variant);
        BenchmarkRecord {
            rank,
            name: key.to_string(),
            key,
            structure: Structure::PadeRational,
            mean_rel_error_pct: mean,
            max_rel_error_pct: mean * 3.0,
            alpha_at_max: 6.2,
            nanos_per_call: 12.5,
            samples: 10_000,
        }
    }

    fn report() -> BenchmarkReport {
        BenchmarkReport {
            config: BenchmarkConfig::default(),
            reference: ReferenceRecord {
                nanos_per_call: 80.0,
                max_iterations_used: 4,
                non_converged: 0,
            },
            records: vec![
                record(1, FamilyKind::Pade, 11, 8.77e-10),
                record(2, FamilyKind::Pade, 13, 1.2e-9),
            ],
            skipped: vec![SkippedEntry {
                name: "Series_4".to_string(),
                key: EntryKey::new(FamilyKind::Series, 4),
                kind: None,
                reason: "no samples inside domain [2.0000, inf)".to_string(),
            }],
        }
    }

    #[test]
    fn rankings_table_layout() {
        let table = format_rankings(&report(), None);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "Rank Method                         AvgErr %     MaxErr %     a@MaxErr   ns/call"
        );
        assert!(lines[2].starts_with("   1 Pade(2025)_11"));
        assert!(lines[2].contains("8.770e-10"));
        assert!(table.contains("(skipped Series_4)"));
    }

    #[test]
    fn top_limits_rows() {
        let table = format_rankings(&report(), Some(1));
        assert!(!table.contains("Pade(2025)_13"));
    }

    #[test]
    fn structure_summary_lists_each_class_once() {
        let summary = format_structure_summary(&report());
        assert_eq!(summary.matches("pade").count(), 1);
    }

    #[test]
    fn catalog_listing_shows_where_each_bound_holds() {
        let listing = format_catalog(&Catalog::standard());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), Catalog::standard().len() + 1);
        assert!(lines[0].ends_with("Bound %  Bound on"));
        let carvalho_19 = lines.iter().find(|l| l.starts_with("Carvalho(2025)_19 ")).unwrap();
        assert!(carvalho_19.contains("6.80e0"), "{carvalho_19}");
        assert!(carvalho_19.ends_with("[0.0000, 10000.0000]"), "{carvalho_19}");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Simarro&Orfila(2013)", 8), "Simarro.");
        assert_eq!(truncate("Beji", 8), "Beji");
    }
}
