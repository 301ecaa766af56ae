//! Export benchmark results.
//!
//! - JSON: the full [`BenchmarkReport`] (config echo, reference row, ranking, skipped)
//! - CSV: one row per ranked entry, easy to consume in spreadsheets or scripts
//! - CSV: an error profile (one row per sample) for external plotting

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{BenchmarkReport, ErrorSample};
use crate::error::AppError;

/// Write the full report as pretty JSON.
pub fn write_report_json(path: &Path, report: &BenchmarkReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .map_err(|e| AppError::new(4, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Write ranked records to CSV.
pub fn write_report_csv(path: &Path, report: &BenchmarkReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_records_csv(BufWriter::new(file), report)
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV: {e}")))
}

/// Write an error profile to CSV.
pub fn write_profile_csv(path: &Path, samples: &[ErrorSample]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create profile CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    let write = |out: &mut BufWriter<File>| -> std::io::Result<()> {
        writeln!(out, "alpha,exact,approx,rel_error_pct")?;
        for s in samples {
            writeln!(out, "{:.12},{:.17},{:.17},{:.6e}", s.alpha, s.exact, s.approx, s.rel_error_pct)?;
        }
        out.flush()
    };
    write(&mut out).map_err(|e| AppError::new(4, format!("Failed to write profile CSV: {e}")))
}

fn write_records_csv<W: Write>(mut out: W, report: &BenchmarkReport) -> std::io::Result<()> {
    writeln!(
        out,
        "rank,method,family,variant,structure,mean_rel_error_pct,max_rel_error_pct,alpha_at_max,ns_per_call,samples"
    )?;
    for r in &report.records {
        writeln!(
            out,
            "{},{},{:?},{},{},{:.6e},{:.6e},{:.10},{:.2},{}",
            r.rank,
            csv_field(&r.name),
            r.key.family,
            r.key.variant,
            r.structure.label(),
            r.mean_rel_error_pct,
            r.max_rel_error_pct,
            r.alpha_at_max,
            r.nanos_per_call,
            r.samples,
        )?;
    }
    out.flush()
}

/// Quote a field when it contains a separator or a quote.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BenchmarkConfig, BenchmarkRecord, EntryKey, FamilyKind, ReferenceRecord, Structure,
    };

    fn report() -> BenchmarkReport {
        let key = EntryKey::new(FamilyKind::GuanJu, 1);
        BenchmarkReport {
            config: BenchmarkConfig::default(),
            reference: ReferenceRecord {
                nanos_per_call: 50.0,
                max_iterations_used: 4,
                non_converged: 0,
            },
            records: vec![BenchmarkRecord {
                rank: 1,
                name: key.to_string(),
                key,
                structure: Structure::Empirical,
                mean_rel_error_pct: 0.1,
                max_rel_error_pct: 0.5,
                alpha_at_max: 0.25,
                nanos_per_call: 9.0,
                samples: 10,
            }],
            skipped: Vec::new(),
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let mut buf = Vec::new();
        write_records_csv(&mut buf, &report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("rank,method,family"));
        assert!(lines[1].starts_with("1,Guan&Ju(2005),GuanJu,1,empirical,"));
    }

    #[test]
    fn json_echoes_config_and_records() {
        let value = serde_json::to_value(report()).unwrap();
        assert_eq!(value["config"]["points"], 10_000);
        assert_eq!(value["records"][0]["key"]["family"], "guan-ju");
        assert_eq!(value["records"][0]["structure"], "empirical");
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("plain"), "plain");
    }
}
