//! Text rendering of solve results.
//!
//! `format_solution` is the stdout contract (one `c = ...` line last);
//! `format_run_summary` is the verbose bookkeeping written to stderr.

use std::path::Path;

use crate::app::pipeline::{RunOutput, Solution};
use crate::domain::SolveConfig;
use crate::io::ingest::Loaded;

/// Format the result lines printed on stdout.
///
/// Mode A:
/// ```text
/// Roots from roots.json: r1=2, r2=3
/// Point from points.json: x=0, y=12
/// c = 12
/// ```
///
/// Mode B:
/// ```text
/// Used points (keys): 1, 2, 3
/// c = -1 / 3
/// ```
pub fn format_solution(run: &RunOutput, config: &SolveConfig) -> String {
    let mut out = String::new();

    match &run.solution {
        Solution::Roots(fit) => {
            let roots_path = config.roots_path.as_deref().unwrap_or(Path::new("-"));
            out.push_str(&format!(
                "Roots from {}: r1={}, r2={}\n",
                roots_path.display(),
                fit.roots[0].r,
                fit.roots[1].r
            ));
            out.push_str(&format!(
                "Point from {}: x={}, y={}\n",
                config.points_path.display(),
                fit.point.x,
                fit.point.y
            ));
        }
        Solution::Points(fit) => {
            out.push_str(&format!("Used points (keys): {}\n", fit.used.join(", ")));
            if let Some(coeffs) = &run.coefficients {
                out.push_str(&format!("a = {}\n", coeffs.a));
                out.push_str(&format!("b = {}\n", coeffs.b));
            }
        }
    }

    out.push_str(&format!("c = {}", run.solution.c()));
    out
}

/// Format the verbose run summary (evidence bookkeeping), printed to stderr.
pub fn format_run_summary(run: &RunOutput, config: &SolveConfig) -> String {
    let mut out = String::new();

    out.push_str("=== qc - exact quadratic constant ===\n");
    out.push_str(&format!("Mode: {}\n", run.solution.mode().display_name()));
    out.push_str(&format_loaded("Points", &config.points_path, &run.points));
    if let (Some(roots), Some(path)) = (&run.roots, &config.roots_path) {
        out.push_str(&format_loaded("Roots", path, roots));
    }
    if let Solution::Points(fit) = &run.solution {
        let (i, j, k) = fit.indices;
        out.push_str(&format!("Triple: indices ({i}, {j}, {k}) of {}\n", run.points.items.len()));
    }

    out
}

fn format_loaded<T>(name: &str, path: &Path, loaded: &Loaded<T>) -> String {
    let mut line = format!(
        "{name}: {} | records={} used={}",
        path.display(),
        loaded.records_read,
        loaded.items.len()
    );
    if let Some(k) = loaded.k_applied {
        line.push_str(&format!(" k={k}"));
    }
    if !loaded.malformed.is_empty() {
        line.push_str(&format!(" skipped=[{}]", loaded.malformed.join(", ")));
    }
    line.push('\n');
    line
}
