//! clap definitions for `qc solve` and `qc generate`.
//!
//! Parsed arguments are turned into `SolveConfig` / `SampleSpec` in `app`;
//! nothing here touches evidence or arithmetic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::SearchStrategy;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "qc",
    version,
    about = "Recover the constant term of a quadratic from base-N encoded evidence, exactly"
)]
pub struct Cli {
    /// Debug-level logging on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve for `c` from evidence documents and print it.
    ///
    /// With `--roots`, `c` comes from the two roots and one point (mode A);
    /// otherwise from the first non-degenerate triple of points (mode B).
    Solve(SolveArgs),
    /// Write synthetic evidence documents from a known integer quadratic.
    Generate(GenerateArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct SolveArgs {
    /// Points document (JSON).
    #[arg(short, long)]
    pub points: PathBuf,

    /// Roots document (JSON). Switches to roots + point mode.
    #[arg(short, long)]
    pub roots: Option<PathBuf>,

    /// Truncate each evidence set to its document's `keys.k`.
    #[arg(long)]
    pub use_k: bool,

    /// Triple search strategy (both return the same triple).
    #[arg(long, value_enum, default_value_t = SearchStrategy::Sequential)]
    pub search: SearchStrategy,

    /// Also print `a` and `b` for the chosen triple (points mode).
    #[arg(long)]
    pub coefficients: bool,

    /// Write the solution to a JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// Number of points to generate.
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Random seed (x-values and bases).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Leading coefficient.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub a: i64,

    /// Linear coefficient.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub b: i64,

    /// Constant term.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub c: i64,

    /// Build the quadratic from two integer roots instead of `b` and `c`.
    #[arg(
        long,
        num_args = 2,
        value_names = ["R1", "R2"],
        allow_negative_numbers = true,
        conflicts_with_all = ["b", "c"],
        requires = "roots_out"
    )]
    pub roots: Option<Vec<i64>>,

    /// `keys.k` written to the points document (defaults to the count).
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Output path for the points document.
    #[arg(long)]
    pub points_out: PathBuf,

    /// Output path for the roots document.
    #[arg(long, requires = "roots")]
    pub roots_out: Option<PathBuf>,
}
