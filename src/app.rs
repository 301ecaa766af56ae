//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - builds the catalog (optionally with fitted Padé entries)
//! - runs the benchmark, solver or a single entry
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use log::{LevelFilter, warn};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use crate::cli::{BenchArgs, Command, EvalArgs, FitArgs, PlotArgs, SolveArgs};
use crate::domain::{BenchmarkConfig, BenchmarkReport, SolverConfig, Spacing, TimingConfig};
use crate::error::AppError;
use crate::solver::ExactSolver;

pub mod pipeline;

/// Bar width of `bench --chart`.
const CHART_WIDTH: usize = 50;

/// Entry point for the `wdisp` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse_from(std::env::args());
    init_logging(cli.verbose);

    match cli.command {
        Command::Bench(args) => handle_bench(args),
        Command::Solve(args) => handle_solve(args),
        Command::Eval(args) => handle_eval(args),
        Command::List => handle_list(),
        Command::Plot(args) => handle_plot(args),
        Command::Fit(args) => handle_fit(args),
    }
}

fn level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    if let Err(err) = TermLogger::init(
        level_from_verbose(verbose),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("wdisp: logging disabled: {err}");
    }
}

fn handle_bench(args: BenchArgs) -> Result<(), AppError> {
    let config = bench_config_from_args(&args);
    let run = pipeline::run_bench(&config, &args.fit_degrees)?;

    println!("{}", crate::report::format_run_summary(&run.report));
    println!("{}", crate::report::format_rankings(&run.report, args.top));

    if args.chart {
        let rows = chart_rows(&run.report, args.top);
        println!(
            "{}",
            crate::plot::render_error_bars("mean relative error", &rows, CHART_WIDTH)
        );
    }
    if args.by_structure {
        println!("{}", crate::report::format_structure_summary(&run.report));
    }

    if let Some(path) = &args.export {
        crate::io::write_report_json(path, &run.report)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::write_report_csv(path, &run.report)?;
    }

    Ok(())
}

fn handle_solve(args: SolveArgs) -> Result<(), AppError> {
    let solver = ExactSolver::new(solver_config_from_args(&args))?;

    println!("{:>14} {:>22} {:>5} {:>9}", "alpha", "beta", "iter", "converged");
    for &alpha in &args.alphas {
        let outcome = solver.solve(alpha)?;
        if !outcome.converged {
            warn!("alpha = {alpha}: no convergence after {} iterations", outcome.iterations);
        }
        println!(
            "{:>14.8} {:>22.17} {:>5} {:>9}",
            alpha, outcome.beta, outcome.iterations, outcome.converged
        );
    }
    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let catalog = pipeline::catalog_for(args.family, args.variant)?;
    let entry = pipeline::lookup(&catalog, args.family, args.variant)?;

    println!("{}  ({}, domain {})", entry.name, entry.structure.label(), entry.domain);
    for &alpha in &args.alphas {
        let beta = entry.evaluate(alpha)?;
        println!("{:>14.8} {:>22.17}", alpha, beta);
    }
    Ok(())
}

fn handle_list() -> Result<(), AppError> {
    let catalog = crate::catalog::Catalog::standard();
    println!("{}", crate::report::format_catalog(&catalog));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let catalog = pipeline::catalog_for(args.family, args.variant)?;
    let entry = pipeline::lookup(&catalog, args.family, args.variant)?;

    // Oversample so every column gets several points.
    let points = args.width.max(2) * 4;
    let samples = pipeline::profile(entry, args.min, args.max, points)?;

    let plot = crate::plot::render_error_plot(&entry.name, &samples, args.width, args.height);
    println!("{plot}");

    if let Some(path) = &args.export {
        crate::io::write_profile_csv(path, &samples)?;
    }
    Ok(())
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let fitted = crate::fit::fit_pade(args.degree, args.nodes)?;
    println!("{}", crate::report::format_fit(&fitted));
    Ok(())
}

/// `(name, mean error %)` per ranked record, limited like the table.
fn chart_rows(report: &BenchmarkReport, top: Option<usize>) -> Vec<(&str, f64)> {
    report
        .records
        .iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|r| (r.name.as_str(), r.mean_rel_error_pct))
        .collect()
}

pub fn bench_config_from_args(args: &BenchArgs) -> BenchmarkConfig {
    BenchmarkConfig {
        alpha_min: args.min,
        alpha_max: args.max,
        points: args.points,
        spacing: if args.log { Spacing::Log } else { Spacing::Linear },
        seed: args.seed,
        timing: TimingConfig {
            trials: args.trials,
            calls_per_trial: args.calls,
        },
        solver: SolverConfig::default(),
        families: args.families.clone(),
    }
}

pub fn solver_config_from_args(args: &SolveArgs) -> SolverConfig {
    SolverConfig {
        tolerance: args.tolerance,
        max_iterations: args.max_iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::domain::FamilyKind;

    fn bench_args(argv: &[&str]) -> BenchArgs {
        match Cli::parse_from(argv.iter().copied()).command {
            Command::Bench(args) => args,
            other => panic!("expected bench, got {other:?}"),
        }
    }

    #[test]
    fn default_bench_flags_match_default_config() {
        let config = bench_config_from_args(&bench_args(&["wdisp", "bench"]));
        assert_eq!(config, BenchmarkConfig::default());
    }

    #[test]
    fn bench_flags_are_carried_into_config() {
        let config = bench_config_from_args(&bench_args(&[
            "wdisp", "bench", "--min", "0.5", "--max", "3", "-n", "100", "--log", "--seed", "7",
            "--trials", "3", "--calls", "10", "--family", "hunt",
        ]));
        assert_eq!(config.alpha_min, 0.5);
        assert_eq!(config.alpha_max, 3.0);
        assert_eq!(config.points, 100);
        assert_eq!(config.spacing, Spacing::Log);
        assert_eq!(config.seed, 7);
        assert_eq!(config.timing.trials, 3);
        assert_eq!(config.timing.calls_per_trial, 10);
        assert_eq!(config.families, vec![FamilyKind::Hunt]);
    }

    #[test]
    fn solve_flags_become_solver_config() {
        let argv = ["wdisp", "solve", "1.0", "--tolerance", "1e-12", "--max-iter", "5"];
        let args = match Cli::parse_from(argv).command {
            Command::Solve(args) => args,
            other => panic!("expected solve, got {other:?}"),
        };
        let config = solver_config_from_args(&args);
        assert_eq!(config.tolerance, 1e-12);
        assert_eq!(config.max_iterations, 5);
    }

    #[test]
    fn chart_rows_follow_rank_order_and_top() {
        let config = BenchmarkConfig {
            points: 200,
            timing: TimingConfig {
                trials: 1,
                calls_per_trial: 2,
            },
            families: vec![FamilyKind::Pade, FamilyKind::Eckart],
            ..BenchmarkConfig::default()
        };
        let run = pipeline::run_bench(&config, &[]).unwrap();

        let rows = chart_rows(&run.report, None);
        assert_eq!(rows.len(), run.report.records.len());
        assert_eq!(rows[0].0, run.report.records[0].name);
        assert!(rows.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(rows.last().map(|r| r.0), Some("Eckart(1951)"));
        assert_eq!(chart_rows(&run.report, Some(3)).len(), 3);
    }

    #[test]
    fn second_logger_init_is_not_fatal() {
        init_logging(0);
        init_logging(3);
        assert!(log::max_level() >= LevelFilter::Warn);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_from_verbose(0), LevelFilter::Warn);
        assert_eq!(level_from_verbose(1), LevelFilter::Info);
        assert_eq!(level_from_verbose(2), LevelFilter::Debug);
        assert_eq!(level_from_verbose(9), LevelFilter::Trace);
    }
}
