//! `qc` command dispatch.
//!
//! Loads `.env`, fills in the default subcommand, starts logging, then hands
//! each subcommand to its handler. Handlers print results on stdout and turn
//! every failure into an `AppError` carrying the exit code.

use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command, GenerateArgs, SolveArgs};
use crate::data::sample::{SampleSpec, generate_sample};
use crate::domain::SolveConfig;
use crate::error::AppError;
use crate::io::export::{write_json_pretty, write_solution_json};

pub mod pipeline;

/// Entry point for the `qc` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);
    crate::logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Solve(args) => handle_solve(args, cli.verbose),
        Command::Generate(args) => handle_generate(args),
    }
}

fn handle_solve(args: SolveArgs, verbose: bool) -> Result<(), AppError> {
    let config = solve_config_from_args(&args);
    let run = pipeline::run_solve(&config)?;

    if verbose {
        eprintln!("{}", crate::report::format_run_summary(&run, &config));
    }
    println!("{}", crate::report::format_solution(&run, &config));

    if let Some(path) = &config.export {
        write_solution_json(path, &run.solution.to_file())?;
        info!(path = %path.display(), "wrote solution");
    }

    Ok(())
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let spec = sample_spec_from_args(&args)?;
    let sample = generate_sample(&spec)?;

    write_json_pretty(&args.points_out, &sample.points)?;
    info!(path = %args.points_out.display(), count = spec.count, "wrote points document");

    if let (Some(path), Some(roots)) = (&args.roots_out, &sample.roots) {
        write_json_pretty(path, roots)?;
        info!(path = %path.display(), "wrote roots document");
    }

    println!("a = {}, b = {}, c = {}", sample.a, sample.b, sample.c);
    Ok(())
}

pub fn solve_config_from_args(args: &SolveArgs) -> SolveConfig {
    SolveConfig {
        points_path: args.points.clone(),
        roots_path: args.roots.clone(),
        use_k: args.use_k,
        search: args.search,
        coefficients: args.coefficients,
        export: args.export.clone(),
    }
}

pub fn sample_spec_from_args(args: &GenerateArgs) -> Result<SampleSpec, AppError> {
    let roots = match args.roots.as_deref() {
        None => None,
        Some([r1, r2]) => Some((*r1, *r2)),
        Some(other) => {
            return Err(AppError::new(
                2,
                format!("--roots takes exactly two values, got {}", other.len()),
            ));
        }
    };

    Ok(SampleSpec {
        a: args.a,
        b: args.b,
        c: args.c,
        roots,
        count: args.count,
        seed: args.seed,
        k: args.k,
    })
}

/// Insert the default `solve` subcommand.
///
/// `qc` and `qc --points p.json ...` become `qc solve ...`. Top-level
/// help/version flags and anything that is not a flag are left for clap.
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    const TOP_LEVEL_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

    let needs_solve = match argv.get(1).map(String::as_str) {
        None => true,
        Some(first) if TOP_LEVEL_FLAGS.contains(&first) => false,
        Some(first) => first.starts_with('-'),
    };
    if needs_solve {
        let at = argv.len().min(1);
        argv.insert(at, "solve".to_string());
    }
    argv
}
