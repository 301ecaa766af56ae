//! Command-line parsing for the `wdisp` binary.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the solver/catalog/benchmark code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{DEFAULT_ALPHA_MAX, DEFAULT_ALPHA_MIN, DEFAULT_POINTS, FamilyKind};
use crate::fit::DEFAULT_NODES;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "wdisp",
    version,
    about = "Solve and benchmark explicit approximations of the dispersion relation a = b tanh b"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score every catalog entry against the reference solver and print the ranking.
    Bench(BenchArgs),
    /// Solve the dispersion relation with Newton-Raphson.
    Solve(SolveArgs),
    /// Evaluate one catalog entry.
    Eval(EvalArgs),
    /// List every catalog entry with its structure, domain and documented bound.
    List,
    /// Plot the signed relative error of one entry.
    Plot(PlotArgs),
    /// Fit a fractional-power Pade approximant and print its coefficients.
    Fit(FitArgs),
}

/// Options for `wdisp bench`.
#[derive(Debug, Parser, Clone)]
pub struct BenchArgs {
    /// Lower edge of the sample grid.
    #[arg(long, default_value_t = DEFAULT_ALPHA_MIN)]
    pub min: f64,

    /// Upper edge of the sample grid.
    #[arg(long, default_value_t = DEFAULT_ALPHA_MAX)]
    pub max: f64,

    /// Number of samples.
    #[arg(short = 'n', long, default_value_t = DEFAULT_POINTS)]
    pub points: usize,

    /// Log-spaced samples instead of evenly spaced ones.
    #[arg(long)]
    pub log: bool,

    /// Seed for timing inputs.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Timed batches per entry (median is reported).
    #[arg(long, default_value_t = 15)]
    pub trials: usize,

    /// Calls per timed batch.
    #[arg(long, default_value_t = 1_000)]
    pub calls: usize,

    /// Restrict to these families (repeatable).
    #[arg(long = "family", value_enum)]
    pub families: Vec<FamilyKind>,

    /// Add a fitted Pade approximant of this degree (repeatable).
    #[arg(long = "fit-degree")]
    pub fit_degrees: Vec<usize>,

    /// Show only the top-N rows.
    #[arg(long)]
    pub top: Option<usize>,

    /// Print a log-scaled bar chart of mean error per entry, in rank order.
    #[arg(long)]
    pub chart: bool,

    /// Print the best entry of each structural class.
    #[arg(long = "by-structure")]
    pub by_structure: bool,

    /// Export the full report to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export ranked records to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}

/// Options for `wdisp solve`.
#[derive(Debug, Parser, Clone)]
pub struct SolveArgs {
    /// Values of a = k0 h.
    #[arg(required = true, allow_negative_numbers = true)]
    pub alphas: Vec<f64>,

    /// Relative step tolerance.
    #[arg(long, default_value_t = 1e-15)]
    pub tolerance: f64,

    /// Iteration cap.
    #[arg(long = "max-iter", default_value_t = 100)]
    pub max_iterations: usize,
}

/// Options for `wdisp eval`.
#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    #[arg(long, value_enum)]
    pub family: FamilyKind,

    #[arg(long, default_value_t = 1)]
    pub variant: u8,

    /// Values of a = k0 h.
    #[arg(required = true, allow_negative_numbers = true)]
    pub alphas: Vec<f64>,
}

/// Options for `wdisp plot`.
#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    #[arg(long, value_enum)]
    pub family: FamilyKind,

    #[arg(long, default_value_t = 1)]
    pub variant: u8,

    #[arg(long, default_value_t = DEFAULT_ALPHA_MIN)]
    pub min: f64,

    #[arg(long, default_value_t = DEFAULT_ALPHA_MAX)]
    pub max: f64,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Also write the sampled profile to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

/// Options for `wdisp fit`.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Requested degree (odd; an even value is reduced by one).
    #[arg(long, default_value_t = 9)]
    pub degree: usize,

    /// Chebyshev nodes on [0, 2pi].
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bench_flags() {
        let cli = Cli::parse_from([
            "wdisp", "-vv", "bench", "--points", "500", "--log", "--family", "pade", "--family",
            "fenton-mckee", "--fit-degree", "7", "--top", "5",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Bench(args) = cli.command else {
            panic!("expected bench");
        };
        assert_eq!(args.points, 500);
        assert!(args.log);
        assert_eq!(args.families, vec![FamilyKind::Pade, FamilyKind::FentonMcKee]);
        assert_eq!(args.fit_degrees, vec![7]);
        assert_eq!(args.top, Some(5));
        assert!(!args.chart && !args.by_structure);
    }

    #[test]
    fn chart_and_structure_summary_are_separate_flags() {
        let cli = Cli::parse_from(["wdisp", "bench", "--chart", "--by-structure"]);
        let Command::Bench(args) = cli.command else {
            panic!("expected bench");
        };
        assert!(args.chart);
        assert!(args.by_structure);
    }

    #[test]
    fn parses_eval() {
        let cli = Cli::parse_from(["wdisp", "eval", "--family", "carvalho", "--variant", "3", "1.0", "2.5"]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.family, FamilyKind::Carvalho);
        assert_eq!(args.variant, 3);
        assert_eq!(args.alphas, vec![1.0, 2.5]);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
